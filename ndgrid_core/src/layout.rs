//! Row-major layout arithmetic for dense N-dimensional grids.
//!
//! The last axis varies fastest. For extents `[d0, d1, ..., dn]` the linear
//! offset of `[i0, i1, ..., in]` is `((i0 * d1 + i1) * d2 + i2) ... + in`.

use crate::error::CoreError;

/// Total number of elements described by `extents`.
///
/// Returns `None` if the product overflows `usize`. An empty extent list
/// describes a single element.
///
/// # Example
/// ```
/// use ndgrid_core::layout::volume;
///
/// assert_eq!(volume(&[2, 3, 4]), Some(24));
/// assert_eq!(volume(&[5, 0, 7]), Some(0));
/// assert_eq!(volume(&[usize::MAX, 2]), None);
/// ```
#[inline]
pub fn volume(extents: &[usize]) -> Option<usize> {
    extents
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
}

/// Number of elements in one leading-axis slice: the product of every extent
/// after the first.
///
/// Extents are assumed to have already passed [`volume`], so the product
/// cannot overflow.
#[inline]
pub fn trailing_volume(extents: &[usize]) -> usize {
    extents.iter().skip(1).product()
}

/// Linear offset of `index` in a row-major buffer with the given `extents`.
///
/// No bounds checking is performed; an out-of-range coordinate yields an
/// offset that addresses the wrong element or lies past the buffer.
#[inline]
pub fn linear_index(extents: &[usize], index: &[usize]) -> usize {
    debug_assert_eq!(extents.len(), index.len());
    let mut offset = index.first().copied().unwrap_or(0);
    for axis in 1..extents.len() {
        offset = offset * extents[axis] + index[axis];
    }
    offset
}

/// Linear offset of `index`, checking that every coordinate lies inside its axis.
///
/// # Errors
/// - `RankMismatch` if `index` does not have one coordinate per axis
/// - `IndexOutOfBounds` for the first axis whose coordinate is out of range
#[inline]
pub fn checked_linear_index(extents: &[usize], index: &[usize]) -> Result<usize, CoreError> {
    if extents.len() != index.len() {
        return Err(CoreError::RankMismatch {
            expected: extents.len(),
            got: index.len(),
        });
    }
    for (axis, (&i, &extent)) in index.iter().zip(extents).enumerate() {
        if i >= extent {
            return Err(CoreError::IndexOutOfBounds {
                axis,
                index: i,
                extent,
            });
        }
    }
    Ok(linear_index(extents, index))
}

/// Row-major strides: the linear distance between neighbours along each axis.
///
/// # Example
/// ```
/// use ndgrid_core::layout::row_major_strides;
///
/// assert_eq!(row_major_strides(&[2, 3, 4]), [12, 4, 1]);
/// ```
#[inline]
pub fn row_major_strides<const D: usize>(extents: &[usize; D]) -> [usize; D] {
    let mut strides = [1usize; D];
    for axis in (0..D.saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * extents[axis + 1];
    }
    strides
}

/// Inverse of [`linear_index`]: recover the coordinates of a linear offset.
///
/// `linear` must be smaller than the volume of `extents`, and no extent may
/// be zero.
#[inline]
pub fn unravel_index<const D: usize>(extents: &[usize; D], mut linear: usize) -> [usize; D] {
    let mut index = [0usize; D];
    for axis in (0..D).rev() {
        let extent = extents[axis];
        index[axis] = linear % extent;
        linear /= extent;
    }
    index
}

/// Advance `index` to the next coordinate in row-major order.
///
/// Returns `false` once the last coordinate has been passed, leaving `index`
/// at all zeros.
#[inline]
pub fn advance_index(extents: &[usize], index: &mut [usize]) -> bool {
    for axis in (0..extents.len()).rev() {
        index[axis] += 1;
        if index[axis] < extents[axis] {
            return true;
        }
        index[axis] = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        assert_eq!(volume(&[]), Some(1));
        assert_eq!(volume(&[7]), Some(7));
        assert_eq!(volume(&[2, 3, 4]), Some(24));
        assert_eq!(volume(&[2, 0, 4]), Some(0));
        assert_eq!(volume(&[usize::MAX, 2]), None);
    }

    #[test]
    fn test_trailing_volume() {
        assert_eq!(trailing_volume(&[2, 3, 4]), 12);
        assert_eq!(trailing_volume(&[9]), 1);
        assert_eq!(trailing_volume(&[3, 0]), 0);
    }

    #[test]
    fn test_linear_index_matches_pattern() {
        let extents = [2, 3, 4];
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(linear_index(&extents, &[i, j, k]), i * 12 + j * 4 + k);
                }
            }
        }
    }

    #[test]
    fn test_checked_linear_index() {
        let extents = [2, 3];
        assert_eq!(checked_linear_index(&extents, &[1, 2]), Ok(5));
        assert_eq!(
            checked_linear_index(&extents, &[0, 3]),
            Err(CoreError::IndexOutOfBounds {
                axis: 1,
                index: 3,
                extent: 3
            })
        );
        assert_eq!(
            checked_linear_index(&extents, &[1]),
            Err(CoreError::RankMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_strides_and_unravel() {
        let extents = [2, 3, 4];
        let strides = row_major_strides(&extents);
        assert_eq!(strides, [12, 4, 1]);

        for linear in 0..24 {
            let index = unravel_index(&extents, linear);
            let folded: usize = index.iter().zip(strides.iter()).map(|(i, s)| i * s).sum();
            assert_eq!(folded, linear);
        }
    }

    #[test]
    fn test_advance_index_visits_in_order() {
        let extents = [2, 2];
        let mut index = [0, 0];
        let mut visited = 1;
        while advance_index(&extents, &mut index) {
            assert_eq!(linear_index(&extents, &index), visited);
            visited += 1;
        }
        assert_eq!(visited, 4);
        assert_eq!(index, [0, 0]);
    }
}
