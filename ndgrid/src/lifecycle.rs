//! Shared construct-all path for every grid type.
//!
//! Wraps [`RawStorage::try_from_fn`] so that allocation failures surface as
//! [`GridError`] and element failures surface as the caller's own error,
//! with a log record of how much work was rolled back.

use ndgrid_core::{CoreError, RawStorage};

use crate::error::{GridError, Result};

/// Why a construct-all stopped early.
enum Failure<E> {
    Storage(CoreError),
    Element { index: usize, error: E },
}

impl<E> From<CoreError> for Failure<E> {
    fn from(err: CoreError) -> Self {
        Failure::Storage(err)
    }
}

/// Element count for `extents`.
///
/// An overflowing product is reported as `CapacityOverflow` with
/// `requested: usize::MAX`; the extents go to the log record.
#[inline]
pub(crate) fn element_count(extents: &[usize]) -> Result<usize> {
    ndgrid_core::volume(extents).ok_or_else(|| {
        log::warn!("element count of extents {:?} overflows usize", extents);
        GridError::Core(CoreError::CapacityOverflow {
            requested: usize::MAX,
        })
    })
}

/// Allocate `len` slots and construct slot `i` from `f(i)`.
///
/// On failure every constructed element has already been dropped and the
/// block freed by the time this returns.
pub(crate) fn construct<T, E, F>(len: usize, mut f: F) -> std::result::Result<RawStorage<T>, E>
where
    E: From<GridError>,
    F: FnMut(usize) -> std::result::Result<T, E>,
{
    RawStorage::try_from_fn(len, |index| {
        f(index).map_err(|error| Failure::Element { index, error })
    })
    .map_err(|failure| match failure {
        Failure::Storage(err) => {
            log::warn!("storage for {} elements unavailable: {}", len, err);
            E::from(GridError::Core(err))
        }
        Failure::Element { index, error } => {
            log::warn!(
                "construction failed at element {} of {}; rolled back {} elements",
                index,
                len,
                index
            );
            error
        }
    })
}

/// Infallible-element variant of [`construct`].
#[inline]
pub(crate) fn construct_with<T, F>(len: usize, mut f: F) -> Result<RawStorage<T>>
where
    F: FnMut(usize) -> T,
{
    construct(len, |index| Ok::<T, GridError>(f(index)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum BuildError {
        Grid(GridError),
        Refused(usize),
    }

    impl From<GridError> for BuildError {
        fn from(err: GridError) -> Self {
            BuildError::Grid(err)
        }
    }

    #[test]
    fn test_construct_passes_element_error_through() {
        let result: std::result::Result<RawStorage<u8>, BuildError> =
            construct(5, |i| if i == 2 { Err(BuildError::Refused(i)) } else { Ok(1) });
        assert_eq!(result.err(), Some(BuildError::Refused(2)));
    }

    #[test]
    fn test_construct_maps_storage_error() {
        let result: std::result::Result<RawStorage<u64>, BuildError> =
            construct(usize::MAX, |_| Ok(0));
        assert!(matches!(
            result,
            Err(BuildError::Grid(GridError::Core(CoreError::CapacityOverflow { .. })))
        ));
    }

    #[test]
    fn test_element_count() {
        assert_eq!(element_count(&[3, 4]), Ok(12));
        assert_eq!(element_count(&[0, usize::MAX]), Ok(0));
    }

    #[test]
    fn test_overflowing_product_reports_sentinel() {
        assert_eq!(
            element_count(&[usize::MAX, usize::MAX]),
            Err(GridError::Core(CoreError::CapacityOverflow {
                requested: usize::MAX
            }))
        );
    }
}
