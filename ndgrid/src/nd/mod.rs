//! D-dimensional owning grid.
//!
//! `NdGrid<T, D>` stores the product of its `D` extents in one row-major
//! block. Grids of rank 2 and above slice by their leading coordinate into an
//! independent grid of rank `D - 1` (see [`Slice`]); rank 1 is the terminal
//! case and indexes elements directly with `grid[i]`.

mod slice;

pub use slice::Slice;

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use ndgrid_core::{advance_index, checked_linear_index, linear_index, unravel_index};
use ndgrid_core::{GridShape, RawStorage};

use crate::error::{GridError, Result};
use crate::grid2d::Grid;
use crate::lifecycle::{construct, construct_with, element_count};

/// Owning grid of rank `D` in row-major order.
///
/// `D` must be at least 1.
///
/// # Example
///
/// ```
/// use ndgrid::{NdGrid, Slice};
///
/// let g3 = NdGrid::<f32, 3>::filled([2, 3, 4], 1.0).unwrap();
/// assert_eq!(g3[[1, 1, 1]], 1.0);
///
/// let g2 = g3.slice(1);
/// assert_eq!(g2.extents(), [3, 4]);
/// assert_eq!(g2[[1, 1]], 1.0);
///
/// let g1 = g2.slice(2);
/// assert_eq!(g1[3], 1.0);
/// ```
pub struct NdGrid<T, const D: usize> {
    storage: RawStorage<T>,
    extents: [usize; D],
}

impl<T, const D: usize> NdGrid<T, D> {
    const RANK_CHECK: () = assert!(D > 0, "NdGrid rank must be at least 1");

    /// A grid with every element built by `T::default()`.
    ///
    /// # Errors
    /// `Core(CapacityOverflow)` or `Core(AllocFailed)` if the buffer cannot
    /// be allocated.
    pub fn new(extents: [usize; D]) -> Result<Self>
    where
        T: Default,
    {
        Self::from_fn(extents, |_| T::default())
    }

    /// A grid with every element cloned from `fill`.
    pub fn filled(extents: [usize; D], fill: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::from_fn(extents, |_| fill.clone())
    }

    /// A grid whose element at `index` is `f(index)`.
    ///
    /// Elements are built in row-major order.
    pub fn from_fn<F>(extents: [usize; D], mut f: F) -> Result<Self>
    where
        F: FnMut([usize; D]) -> T,
    {
        let len = element_count(&extents)?;
        let mut index = [0usize; D];
        let storage = construct_with(len, |_| {
            let value = f(index);
            advance_index(&extents, &mut index);
            value
        })?;
        Ok(Self::from_raw_parts(storage, extents))
    }

    /// A grid whose element construction may fail.
    ///
    /// On failure the elements built so far are dropped in reverse order and
    /// the buffer is freed before `f`'s error is returned.
    pub fn try_from_fn<E, F>(extents: [usize; D], mut f: F) -> std::result::Result<Self, E>
    where
        E: From<GridError>,
        F: FnMut([usize; D]) -> std::result::Result<T, E>,
    {
        let len = element_count(&extents)?;
        let mut index = [0usize; D];
        let storage = construct::<T, E, _>(len, |_| {
            let value = f(index)?;
            advance_index(&extents, &mut index);
            Ok(value)
        })?;
        Ok(Self::from_raw_parts(storage, extents))
    }

    /// Adopt a row-major buffer holding exactly one element per slot.
    ///
    /// # Errors
    /// `ShapeMismatch` if the buffer length differs from the product of the
    /// extents.
    pub fn from_vec(extents: [usize; D], values: Vec<T>) -> Result<Self> {
        let expected = element_count(&extents)?;
        if values.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self::from_raw_parts(RawStorage::from_vec(values), extents))
    }

    /// Assemble a grid from storage already laid out for `extents`.
    pub(crate) fn from_raw_parts(storage: RawStorage<T>, extents: [usize; D]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::RANK_CHECK;
        debug_assert_eq!(ndgrid_core::volume(&extents), Some(storage.len()));
        Self { storage, extents }
    }

    pub(crate) fn into_raw_parts(self) -> (RawStorage<T>, [usize; D]) {
        (self.storage, self.extents)
    }

    /// Extent of every axis.
    #[inline]
    pub fn extents(&self) -> [usize; D] {
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

    /// Element at `index`, or `None` if any coordinate is out of range.
    #[inline]
    pub fn get(&self, index: [usize; D]) -> Option<&T> {
        let offset = checked_linear_index(&self.extents, &index).ok()?;
        self.storage.as_slice().get(offset)
    }

    /// Mutable element at `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: [usize; D]) -> Option<&mut T> {
        let offset = checked_linear_index(&self.extents, &index).ok()?;
        self.storage.as_mut_slice().get_mut(offset)
    }

    /// Element at `index` without bounds checking.
    ///
    /// # Safety
    /// Every coordinate must be below the extent of its axis.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: [usize; D]) -> &T {
        let offset = linear_index(&self.extents, &index);
        self.storage.as_slice().get_unchecked(offset)
    }

    /// Mutable element at `index` without bounds checking.
    ///
    /// # Safety
    /// Every coordinate must be below the extent of its axis.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: [usize; D]) -> &mut T {
        let offset = linear_index(&self.extents, &index);
        self.storage.as_mut_slice().get_unchecked_mut(offset)
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

    /// Iterate over `(index, element)` pairs in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ([usize; D], &T)> + '_ {
        let extents = self.extents;
        self.iter()
            .enumerate()
            .map(move |(offset, value)| (unravel_index(&extents, offset), value))
    }

    /// Assign `value` to every element. The extents are unchanged.
    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.storage.as_mut_slice().fill(value);
    }

    /// Move the contents into a new grid, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            storage: self.storage.take(),
            extents: mem::replace(&mut self.extents, [0; D]),
        }
    }

    /// Drop every element and free the buffer, leaving `self` empty.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
        self.extents = [0; D];
    }

    /// Consume the grid and return its elements in row-major order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    #[inline]
    fn offset(&self, index: &[usize; D]) -> usize {
        match checked_linear_index(&self.extents, index) {
            Ok(offset) => offset,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const D: usize> GridShape for NdGrid<T, D> {
    #[inline]
    fn extents(&self) -> &[usize] {
        &self.extents
    }
}

impl<T, const D: usize> Default for NdGrid<T, D> {
    /// An empty grid with all extents zero and no buffer.
    fn default() -> Self {
        Self::from_raw_parts(RawStorage::empty(), [0; D])
    }
}

impl<T: Clone, const D: usize> Clone for NdGrid<T, D> {
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

impl<T: PartialEq, const D: usize> PartialEq for NdGrid<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.extents == other.extents && self.storage == other.storage
    }
}

impl<T: Eq, const D: usize> Eq for NdGrid<T, D> {}

impl<T: fmt::Debug, const D: usize> fmt::Debug for NdGrid<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NdGrid")
            .field("extents", &self.extents)
            .field("data", &self.storage)
            .finish()
    }
}

impl<T, const D: usize> Index<[usize; D]> for NdGrid<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, index: [usize; D]) -> &T {
        let offset = self.offset(&index);
        &self.storage.as_slice()[offset]
    }
}

impl<T, const D: usize> IndexMut<[usize; D]> for NdGrid<T, D> {
    #[inline]
    fn index_mut(&mut self, index: [usize; D]) -> &mut T {
        let offset = self.offset(&index);
        &mut self.storage.as_mut_slice()[offset]
    }
}

/// Terminal case: a rank-1 grid indexes elements directly.
impl<T> Index<usize> for NdGrid<T, 1> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        let offset = self.offset(&[i]);
        &self.storage.as_slice()[offset]
    }
}

impl<T> IndexMut<usize> for NdGrid<T, 1> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        let offset = self.offset(&[i]);
        &mut self.storage.as_mut_slice()[offset]
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a NdGrid<T, D> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a mut NdGrid<T, D> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> From<Grid<T>> for NdGrid<T, 2> {
    fn from(grid: Grid<T>) -> Self {
        let (storage, extents) = grid.into_raw_parts();
        Self::from_raw_parts(storage, extents)
    }
}
