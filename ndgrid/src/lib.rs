//! # ndgrid
//!
//! Owning, contiguous, row-major grids: a 2-D [`Grid<T>`] with row-proxy
//! indexing and a D-dimensional [`NdGrid<T, D>`] that slices by its leading
//! coordinate into independent grids one rank lower.
//!
//! Every grid owns exactly one block holding the product of its extents in
//! elements. Construction builds every element or none of them: if building
//! element `k` fails, the `k` elements already built are dropped and the
//! block is freed before the failure reaches the caller.
//!
//! ## Quick Start
//!
//! ```
//! use ndgrid::{Grid, NdGrid, Slice};
//!
//! // 2-D grid, three ways to reach the same element
//! let mut grid = Grid::filled(3, 4, 0u32)?;
//! grid[2][1] = 5;
//! assert_eq!(grid[(2, 1)], 5);
//! assert_eq!(grid.row(2)[1], 5);
//!
//! // 3-D grid sliced down to rank 2
//! let g3 = NdGrid::<f32, 3>::filled([2, 3, 4], 1.0)?;
//! let mut g2 = g3.slice(1);
//! g2[[1, 1]] = 2.0;
//! assert_eq!(g3[[1, 1, 1]], 1.0);
//! # Ok::<(), ndgrid::GridError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`ndgrid_core`] holds the allocation-level pieces: [`RawStorage<T>`]
//!   with construct-all, destroy-all and transfer, plus row-major layout
//!   arithmetic.
//! - This crate layers the typed grids, indexing, slicing, the
//!   [`GridBuilder`] and error reporting on top.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for grids and [`GridConfig`]
//!
//! ## Indexing and bounds
//!
//! Indexing operators (`grid[(y, x)]`, `grid[y]`, `grid[[i, j, k]]`) check
//! every axis and panic on an out-of-range coordinate. `get`, `get_mut` and
//! [`Slice::try_slice`] report the same condition without panicking, and
//! `get_unchecked` skips the check entirely.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod config;
mod error;
mod grid2d;
mod lifecycle;
mod nd;

#[cfg(feature = "serde")]
mod io;

pub use builder::GridBuilder;
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid2d::{Grid, RowProxy, RowProxyMut};
pub use nd::{NdGrid, Slice};

// Re-export ndgrid_core types for convenience
pub use ndgrid_core::{CoreError, GridShape, RawStorage};

/// Prelude module for convenient imports.
///
/// ```
/// use ndgrid::prelude::*;
///
/// let grid: NdGrid<u8, 2> = GridBuilder::new([2, 2]).build().unwrap();
/// assert_eq!(grid.slice(0).len(), 2);
/// ```
pub mod prelude {
    pub use crate::builder::GridBuilder;
    pub use crate::config::GridConfig;
    pub use crate::error::{GridError, Result};
    pub use crate::grid2d::{Grid, RowProxy, RowProxyMut};
    pub use crate::nd::{NdGrid, Slice};

    pub use ndgrid_core::GridShape;
}
