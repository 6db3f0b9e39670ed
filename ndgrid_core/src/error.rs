//! Error types for ndgrid_core operations.
//!
//! Provides a simple error enum with no external dependencies for no_std compatibility.

use core::fmt;

/// Error types that can occur during storage and layout operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// The element count or the byte size of the buffer does not fit in memory.
    CapacityOverflow {
        /// Number of elements that were requested, or `usize::MAX` when the
        /// product of the extents itself overflowed.
        requested: usize,
    },
    /// The global allocator returned null.
    AllocFailed {
        /// Size of the requested block in bytes.
        bytes: usize,
        /// Alignment of the requested block.
        align: usize,
    },
    /// A coordinate is outside the extent of its axis.
    IndexOutOfBounds {
        /// The axis whose coordinate was out of bounds.
        axis: usize,
        /// The offending coordinate.
        index: usize,
        /// The extent of that axis.
        extent: usize,
    },
    /// A coordinate tuple does not have one entry per axis.
    RankMismatch {
        /// Number of axes of the grid.
        expected: usize,
        /// Number of coordinates provided.
        got: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: cannot hold {} elements", requested)
            }
            CoreError::AllocFailed { bytes, align } => {
                write!(
                    f,
                    "allocation of {} bytes (align {}) failed",
                    bytes, align
                )
            }
            CoreError::IndexOutOfBounds {
                axis,
                index,
                extent,
            } => {
                write!(
                    f,
                    "index {} out of bounds for axis {} with extent {}",
                    index, axis, extent
                )
            }
            CoreError::RankMismatch { expected, got } => {
                write!(f, "rank mismatch: expected {} coordinates, got {}", expected, got)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
