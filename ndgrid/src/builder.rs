//! GridBuilder pattern for constructing grids under configured limits.
//!
//! Provides a fluent API that validates extents against a [`GridConfig`]
//! before anything is allocated.

use crate::config::GridConfig;
use crate::error::Result;
use crate::grid2d::Grid;
use crate::nd::NdGrid;

/// Builder for constructing `NdGrid<T, D>` instances.
///
/// # Example
///
/// ```
/// use ndgrid::{GridBuilder, GridError};
///
/// let grid = GridBuilder::<u16, 3>::new([2, 3, 4])
///     .with_max_elements(64)
///     .fill(7)
///     .build()?;
/// assert_eq!(grid[[1, 2, 3]], 7);
///
/// let too_big = GridBuilder::<u16, 2>::new([10, 10])
///     .with_max_elements(64)
///     .build();
/// assert!(matches!(too_big, Err(GridError::ElementLimitExceeded { .. })));
/// # Ok::<(), GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder<T, const D: usize> {
    extents: [usize; D],
    config: GridConfig,
    fill: Option<T>,
}

impl<T, const D: usize> GridBuilder<T, D> {
    /// Create a new builder for a grid with the given extents.
    pub fn new(extents: [usize; D]) -> Self {
        Self {
            extents,
            config: GridConfig::default(),
            fill: None,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Cap the number of elements the built grid may hold.
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.config.max_elements = max_elements;
        self
    }

    /// Reject extents of zero on any axis.
    pub fn deny_zero_extents(mut self) -> Self {
        self.config.allow_zero_extents = false;
        self
    }

    /// Value every element of [`build`](Self::build) is cloned from.
    ///
    /// Without a fill value, `build` uses `T::default()`.
    pub fn fill(mut self, value: T) -> Self {
        self.fill = Some(value);
        self
    }

    /// Extents the builder will construct.
    pub fn extents(&self) -> [usize; D] {
        self.extents
    }

    /// Active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Build the grid from the fill value, or `T::default()` if none was set.
    ///
    /// # Errors
    /// - `InvalidConfig` if the configuration is invalid
    /// - `ZeroExtent` if an axis is zero and zero extents are denied
    /// - `ElementLimitExceeded` if the element count exceeds `max_elements`
    /// - `Core(..)` if storage cannot be allocated
    pub fn build(mut self) -> Result<NdGrid<T, D>>
    where
        T: Clone + Default,
    {
        match self.fill.take() {
            Some(value) => self.build_filled(value),
            None => self.build_with(|_| T::default()),
        }
    }

    /// Build the grid with every element cloned from `value`.
    pub fn build_filled(self, value: T) -> Result<NdGrid<T, D>>
    where
        T: Clone,
    {
        self.build_with(|_| value.clone())
    }

    /// Build the grid with the element at `index` set to `f(index)`.
    pub fn build_with<F>(self, f: F) -> Result<NdGrid<T, D>>
    where
        F: FnMut([usize; D]) -> T,
    {
        self.check()?;
        let grid = NdGrid::from_fn(self.extents, f)?;
        log::debug!(
            "built grid with extents {:?} ({} elements)",
            self.extents,
            grid.len()
        );
        Ok(grid)
    }

    fn check(&self) -> Result<usize> {
        let checked = self
            .config
            .validate()
            .and_then(|()| self.config.check_extents(&self.extents));
        if let Err(err) = &checked {
            log::warn!("rejected grid with extents {:?}: {}", self.extents, err);
        }
        checked
    }
}

impl<T> GridBuilder<T, 2> {
    /// Build a 2-D [`Grid`] instead of an `NdGrid<T, 2>`.
    pub fn build_grid(self) -> Result<Grid<T>>
    where
        T: Clone + Default,
    {
        self.build().map(Grid::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_build_default() {
        let grid = GridBuilder::<i64, 2>::new([3, 2]).build().unwrap();
        assert_eq!(grid.extents(), [3, 2]);
        assert!(grid.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_build_with_fill() {
        let grid = GridBuilder::<&str, 1>::new([3]).fill("a").build().unwrap();
        assert_eq!(grid.as_slice(), &["a", "a", "a"]);
    }

    #[test]
    fn test_build_with_generator() {
        let grid = GridBuilder::<usize, 2>::new([2, 2])
            .build_with(|[y, x]| y * 10 + x)
            .unwrap();
        assert_eq!(grid.as_slice(), &[0, 1, 10, 11]);
    }

    #[test]
    fn test_rejects_zero_extent() {
        let result = GridBuilder::<u8, 3>::new([2, 0, 2])
            .deny_zero_extents()
            .build();
        assert_eq!(result.unwrap_err(), GridError::ZeroExtent { axis: 1 });
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = GridBuilder::<u8, 1>::new([1])
            .with_config(GridConfig::new(0, true))
            .build();
        assert!(matches!(result, Err(GridError::InvalidConfig { .. })));
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(GridBuilder::<u8, 2>::new([4, 4])
            .with_max_elements(16)
            .build()
            .is_ok());
        assert_eq!(
            GridBuilder::<u8, 2>::new([4, 5])
                .with_max_elements(16)
                .build()
                .unwrap_err(),
            GridError::ElementLimitExceeded {
                requested: 20,
                limit: 16
            }
        );
    }

    #[test]
    fn test_build_grid() {
        let grid = GridBuilder::<char, 2>::new([2, 3]).fill('z').build_grid().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid[1][2], 'z');
    }
}
