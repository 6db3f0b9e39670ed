//! # ndgrid_core
//!
//! Storage and layout primitives for owning N-dimensional grids.
//!
//! This crate provides the allocation-level building blocks of the `ndgrid`
//! ecosystem. It knows nothing about ranks or indexing sugar; it only owns
//! slots and does row-major arithmetic.
//!
//! ## Features
//!
//! - **no_std compatible**: Only needs `alloc`
//! - **Explicit lifecycle**: construct-all with rollback, destroy-all, transfer
//! - **Zero dependencies**: Errors implement `Display` by hand
//!
//! ## Feature Flags
//!
//! - `std` (default): Implements `std::error::Error` for [`CoreError`]
//!
//! ## Modules
//!
//! - [`storage`]: [`RawStorage<T>`], an owned arena of `T` slots
//! - [`layout`]: Row-major linearization (volume, strides, linear index)
//! - [`traits`]: The [`GridShape`] trait shared by all grids
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```
//! use ndgrid_core::prelude::*;
//!
//! let extents = [2, 3, 4];
//! let len = volume(&extents).unwrap();
//! let storage = RawStorage::from_fn(len, |i| i as u32).unwrap();
//!
//! let offset = linear_index(&extents, &[1, 2, 3]);
//! assert_eq!(storage.as_slice()[offset], 23);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod error;
pub mod layout;
pub mod storage;
pub mod traits;

/// Prelude module for convenient imports.
///
/// Provides the most commonly used types and functions.
pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::layout::{
        advance_index, checked_linear_index, linear_index, row_major_strides, trailing_volume,
        unravel_index, volume,
    };
    pub use crate::storage::RawStorage;
    pub use crate::traits::GridShape;
}

// Re-export everything at crate root for convenience
pub use error::CoreError;
pub use layout::{
    advance_index, checked_linear_index, linear_index, row_major_strides, trailing_volume,
    unravel_index, volume,
};
pub use storage::RawStorage;
pub use traits::GridShape;
