//! Fixed 2-D grid with row-proxy indexing.
//!
//! `Grid<T>` owns `rows * cols` elements in row-major order. Elements are
//! reachable three ways:
//!
//! - `grid[(y, x)]` direct two-axis indexing,
//! - `grid[y][x]` where `grid[y]` is the row as a slice,
//! - `grid.row(y)[x]` through a [`RowProxy`], a borrowed view of one row.
//!
//! A row proxy borrows the grid, so the grid cannot be dropped, reassigned
//! or moved while the proxy is alive.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut, Range};

use ndgrid_core::{checked_linear_index, GridShape, RawStorage};

use crate::error::{GridError, Result};
use crate::lifecycle::{construct, construct_with, element_count};
use crate::nd::NdGrid;

/// Owning 2-D grid of `T` in row-major order.
///
/// # Example
///
/// ```
/// use ndgrid::Grid;
///
/// let mut grid = Grid::filled(3, 2, 0.0f32).unwrap();
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.cols(), 2);
///
/// grid[1][0] = 1.0;
/// assert_eq!(grid[(1, 0)], 1.0);
/// assert_eq!(grid.row(1)[0], 1.0);
/// ```
pub struct Grid<T> {
    storage: RawStorage<T>,
    /// `[rows, cols]`
    extents: [usize; 2],
}

impl<T> Grid<T> {
    /// A 1×1 grid holding `value`.
    pub fn single(value: T) -> Self {
        Self {
            storage: RawStorage::from_vec(vec![value]),
            extents: [1, 1],
        }
    }

    /// A `rows × cols` grid with every element built by `T::default()`.
    ///
    /// # Errors
    /// `Core(CapacityOverflow)` or `Core(AllocFailed)` if the buffer cannot
    /// be allocated. A panic from `T::default` drops the elements built so far.
    pub fn new(rows: usize, cols: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::from_fn(rows, cols, |_, _| T::default())
    }

    /// A `rows × cols` grid with every element cloned from `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::from_fn(rows, cols, |_, _| fill.clone())
    }

    /// A `rows × cols` grid with element `(y, x)` built by `f(y, x)`.
    ///
    /// Elements are built in row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = element_count(&[rows, cols])?;
        let storage = construct_with(len, |i| f(i / cols, i % cols))?;
        Ok(Self {
            storage,
            extents: [rows, cols],
        })
    }

    /// A `rows × cols` grid whose element construction may fail.
    ///
    /// If `f` fails at element `k`, the `k` elements already built are
    /// dropped in reverse order and the buffer is freed before the error is
    /// returned.
    ///
    /// # Example
    ///
    /// ```
    /// use ndgrid::{Grid, GridError};
    ///
    /// #[derive(Debug)]
    /// enum ParseError {
    ///     Grid(GridError),
    ///     Bad(String),
    /// }
    ///
    /// impl From<GridError> for ParseError {
    ///     fn from(err: GridError) -> Self {
    ///         ParseError::Grid(err)
    ///     }
    /// }
    ///
    /// let cells = ["1", "2", "x", "4"];
    /// let result = Grid::try_from_fn(2, 2, |y, x| {
    ///     let raw = cells[y * 2 + x];
    ///     raw.parse::<u32>().map_err(|_| ParseError::Bad(raw.to_string()))
    /// });
    /// assert!(matches!(result, Err(ParseError::Bad(s)) if s == "x"));
    /// ```
    pub fn try_from_fn<E, F>(rows: usize, cols: usize, mut f: F) -> std::result::Result<Self, E>
    where
        E: From<GridError>,
        F: FnMut(usize, usize) -> std::result::Result<T, E>,
    {
        let len = element_count(&[rows, cols])?;
        let storage = construct::<T, E, _>(len, |i| f(i / cols, i % cols))?;
        Ok(Self {
            storage,
            extents: [rows, cols],
        })
    }

    /// Adopt a row-major buffer of exactly `rows * cols` elements.
    ///
    /// # Errors
    /// `ShapeMismatch` if the buffer length differs from `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<T>) -> Result<Self> {
        let expected = element_count(&[rows, cols])?;
        if values.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self {
            storage: RawStorage::from_vec(values),
            extents: [rows, cols],
        })
    }

    pub(crate) fn from_raw_parts(storage: RawStorage<T>, extents: [usize; 2]) -> Self {
        debug_assert_eq!(ndgrid_core::volume(&extents), Some(storage.len()));
        Self { storage, extents }
    }

    pub(crate) fn into_raw_parts(self) -> (RawStorage<T>, [usize; 2]) {
        (self.storage, self.extents)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.extents[0]
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.extents[1]
    }

    /// `[rows, cols]`.
    #[inline]
    pub fn extents(&self) -> [usize; 2] {
        self.extents
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the grid holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// All elements in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Element at `(y, x)`, or `None` if either coordinate is out of range.
    #[inline]
    pub fn get(&self, y: usize, x: usize) -> Option<&T> {
        let offset = checked_linear_index(&self.extents, &[y, x]).ok()?;
        self.storage.as_slice().get(offset)
    }

    /// Mutable element at `(y, x)`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, y: usize, x: usize) -> Option<&mut T> {
        let offset = checked_linear_index(&self.extents, &[y, x]).ok()?;
        self.storage.as_mut_slice().get_mut(offset)
    }

    /// Element at `(y, x)` without bounds checking.
    ///
    /// # Safety
    /// `y < rows` and `x < cols` must hold.
    #[inline]
    pub unsafe fn get_unchecked(&self, y: usize, x: usize) -> &T {
        self.storage.as_slice().get_unchecked(y * self.extents[1] + x)
    }

    /// Mutable element at `(y, x)` without bounds checking.
    ///
    /// # Safety
    /// `y < rows` and `x < cols` must hold.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, y: usize, x: usize) -> &mut T {
        let cols = self.extents[1];
        self.storage.as_mut_slice().get_unchecked_mut(y * cols + x)
    }

    /// Borrowed view of row `y`.
    ///
    /// # Panics
    /// Panics if `y >= rows`.
    #[inline]
    pub fn row(&self, y: usize) -> RowProxy<'_, T> {
        let range = self.row_range(y);
        RowProxy {
            cells: &self.storage.as_slice()[range],
        }
    }

    /// Mutable borrowed view of row `y`.
    ///
    /// # Panics
    /// Panics if `y >= rows`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> RowProxyMut<'_, T> {
        let range = self.row_range(y);
        RowProxyMut {
            cells: &mut self.storage.as_mut_slice()[range],
        }
    }

    /// Borrowed view of row `y`, or `None` if `y >= rows`.
    #[inline]
    pub fn get_row(&self, y: usize) -> Option<RowProxy<'_, T>> {
        (y < self.rows()).then(|| self.row(y))
    }

    /// Iterate over the rows from top to bottom.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = RowProxy<'_, T>> + '_ {
        (0..self.rows()).map(move |y| self.row(y))
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.as_slice().iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.as_mut_slice().iter_mut()
    }

    /// Assign `value` to every element. The extents are unchanged.
    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.storage.as_mut_slice().fill(value);
    }

    /// Move the contents into a new grid, leaving `self` empty (`0 × 0`).
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            storage: self.storage.take(),
            extents: mem::take(&mut self.extents),
        }
    }

    /// Drop every element and free the buffer, leaving `self` empty.
    ///
    /// Clearing an empty grid is a no-op.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
        self.extents = [0, 0];
    }

    /// Consume the grid and return its elements in row-major order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    #[inline]
    fn row_range(&self, y: usize) -> Range<usize> {
        let [rows, cols] = self.extents;
        assert!(
            y < rows,
            "row index {} out of bounds for grid with {} rows",
            y,
            rows
        );
        y * cols..(y + 1) * cols
    }

    #[inline]
    fn offset(&self, y: usize, x: usize) -> usize {
        match checked_linear_index(&self.extents, &[y, x]) {
            Ok(offset) => offset,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> GridShape for Grid<T> {
    #[inline]
    fn extents(&self) -> &[usize] {
        &self.extents
    }
}

impl<T> Default for Grid<T> {
    /// An empty `0 × 0` grid that owns no buffer.
    fn default() -> Self {
        Self {
            storage: RawStorage::empty(),
            extents: [0, 0],
        }
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            extents: self.extents,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
        self.extents = source.extents;
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.extents == other.extents && self.storage == other.storage
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("data", &self.storage)
            .finish()
    }
}

/// `grid[y]` is row `y` as a slice, so `grid[y][x]` reads one element.
impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    #[inline]
    fn index(&self, y: usize) -> &[T] {
        let range = self.row_range(y);
        &self.storage.as_slice()[range]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, y: usize) -> &mut [T] {
        let range = self.row_range(y);
        &mut self.storage.as_mut_slice()[range]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (y, x): (usize, usize)) -> &T {
        let offset = self.offset(y, x);
        &self.storage.as_slice()[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (y, x): (usize, usize)) -> &mut T {
        let offset = self.offset(y, x);
        &mut self.storage.as_mut_slice()[offset]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> From<NdGrid<T, 2>> for Grid<T> {
    fn from(grid: NdGrid<T, 2>) -> Self {
        let (storage, extents) = grid.into_raw_parts();
        Self::from_raw_parts(storage, extents)
    }
}

// -----------------------------------------------------------------------------
// Row proxies
// -----------------------------------------------------------------------------

/// Read-only view of one row: the row's cells plus the column count.
///
/// Valid only while the parent grid is borrowed.
#[derive(Debug)]
pub struct RowProxy<'a, T> {
    cells: &'a [T],
}

impl<T> Clone for RowProxy<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowProxy<'_, T> {}

impl<'a, T> RowProxy<'a, T> {
    /// Number of columns in the row.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Element in column `x`, or `None` if out of range.
    #[inline]
    pub fn get(&self, x: usize) -> Option<&'a T> {
        self.cells.get(x)
    }

    /// The row as a slice borrowed from the grid.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.cells
    }

    /// Iterate over the row from left to right.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.cells.iter()
    }
}

impl<T> Index<usize> for RowProxy<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, x: usize) -> &T {
        &self.cells[x]
    }
}

impl<'a, T> IntoIterator for RowProxy<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Mutable view of one row.
#[derive(Debug)]
pub struct RowProxyMut<'a, T> {
    cells: &'a mut [T],
}

impl<T> RowProxyMut<'_, T> {
    /// Number of columns in the row.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Element in column `x`, or `None` if out of range.
    #[inline]
    pub fn get(&self, x: usize) -> Option<&T> {
        self.cells.get(x)
    }

    /// Mutable element in column `x`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, x: usize) -> Option<&mut T> {
        self.cells.get_mut(x)
    }

    /// The row as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.cells
    }

    /// The row as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.cells
    }

    /// Assign `value` to every cell of the row.
    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }
}

impl<T> Index<usize> for RowProxyMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, x: usize) -> &T {
        &self.cells[x]
    }
}

impl<T> IndexMut<usize> for RowProxyMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, x: usize) -> &mut T {
        &mut self.cells[x]
    }
}
