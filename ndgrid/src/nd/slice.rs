//! Leading-axis slicing from rank `D` to rank `D - 1`.

use std::array;

use ndgrid_core::{trailing_volume, RawStorage};

use super::NdGrid;
use crate::error::{GridError, Result};

/// Slicing by the leading coordinate.
///
/// `grid.slice(i)` deep-copies the contiguous sub-block at leading coordinate
/// `i` into a new grid whose extents are the parent's trailing extents. The
/// result owns its elements, so mutating it never touches the parent.
///
/// Implemented for ranks 2 through 8. A rank-1 grid has nothing to slice:
///
/// ```compile_fail
/// use ndgrid::{NdGrid, Slice};
///
/// let line = NdGrid::<u8, 1>::new([4]).unwrap();
/// let _ = line.slice(0);
/// ```
pub trait Slice {
    /// Grid type one rank lower.
    type Output;

    /// Copy of the sub-grid at leading coordinate `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below the leading extent.
    fn slice(&self, index: usize) -> Self::Output {
        match self.try_slice(index) {
            Ok(sub) => sub,
            Err(err) => panic!("{}", err),
        }
    }

    /// Copy of the sub-grid at leading coordinate `index`.
    ///
    /// # Errors
    /// `Core(IndexOutOfBounds)` on axis 0 if `index` is out of range, or a
    /// storage error if the copy cannot be allocated.
    fn try_slice(&self, index: usize) -> Result<Self::Output>;
}

fn slice_into<T: Clone, const D: usize, const L: usize>(
    grid: &NdGrid<T, D>,
    index: usize,
) -> Result<NdGrid<T, L>> {
    debug_assert_eq!(L + 1, D);

    let extents = &grid.extents;
    if index >= extents[0] {
        return Err(GridError::out_of_bounds(0, index, extents[0]));
    }

    let trailing = trailing_volume(extents);
    let start = index * trailing;
    let storage = RawStorage::from_slice(&grid.storage.as_slice()[start..start + trailing])?;
    let sub_extents: [usize; L] = array::from_fn(|axis| extents[axis + 1]);

    log::trace!(
        "sliced {:?} at {} into {:?} ({} elements)",
        extents,
        index,
        sub_extents,
        trailing
    );
    Ok(NdGrid::from_raw_parts(storage, sub_extents))
}

macro_rules! impl_slice {
    ($($rank:literal => $lower:literal),+ $(,)?) => {
        $(
            impl<T: Clone> Slice for NdGrid<T, $rank> {
                type Output = NdGrid<T, $lower>;

                #[inline]
                fn try_slice(&self, index: usize) -> Result<Self::Output> {
                    slice_into(self, index)
                }
            }
        )+
    };
}

impl_slice!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);
