//! Error types for ndgrid operations.
//!
//! Provides specific error variants for grid construction, slicing and
//! configuration failures.

use ndgrid_core::CoreError;
use thiserror::Error;

/// Errors that can occur during grid construction and access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Storage or layout failure (overflow, allocation, out-of-range index).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A buffer does not hold exactly one element per grid slot.
    #[error("shape mismatch: extents describe {expected} elements, got {got}")]
    ShapeMismatch {
        /// Element count implied by the extents.
        expected: usize,
        /// Element count supplied.
        got: usize,
    },

    /// The element count exceeds the configured limit.
    #[error("grid of {requested} elements exceeds the configured limit of {limit}")]
    ElementLimitExceeded {
        /// Element count implied by the extents.
        requested: usize,
        /// Configured `max_elements`.
        limit: usize,
    },

    /// An axis has extent zero and the configuration forbids it.
    #[error("axis {axis} has extent zero")]
    ZeroExtent {
        /// The axis with extent zero.
        axis: usize,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },
}

impl GridError {
    /// Shorthand for an out-of-range coordinate on `axis`.
    #[inline]
    pub fn out_of_bounds(axis: usize, index: usize, extent: usize) -> Self {
        GridError::Core(CoreError::IndexOutOfBounds {
            axis,
            index,
            extent,
        })
    }
}

/// Result type alias for ndgrid operations.
pub type Result<T> = std::result::Result<T, GridError>;
