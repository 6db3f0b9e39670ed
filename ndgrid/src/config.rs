//! Grid construction limits.

use crate::error::{GridError, Result};

/// Limits applied by [`GridBuilder`](crate::GridBuilder) before it allocates
/// (immutable after construction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Maximum number of elements a single grid may hold.
    pub max_elements: usize,
    /// Whether extents of zero are accepted.
    pub allow_zero_extents: bool,
}

impl GridConfig {
    /// Create a new grid configuration.
    ///
    /// # Arguments
    /// * `max_elements` - Maximum number of elements per grid
    /// * `allow_zero_extents` - Whether any axis may have extent zero
    #[inline]
    pub const fn new(max_elements: usize, allow_zero_extents: bool) -> Self {
        Self {
            max_elements,
            allow_zero_extents,
        }
    }

    /// Configuration that only caps the element count.
    #[inline]
    pub const fn with_max_elements(max_elements: usize) -> Self {
        Self {
            max_elements,
            allow_zero_extents: true,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_elements == 0 {
            return Err(GridError::InvalidConfig {
                message: "max_elements must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Check `extents` against these limits.
    ///
    /// Returns the element count on success.
    ///
    /// # Errors
    /// - `ZeroExtent` if an axis is zero and zero extents are disallowed
    /// - `Core(CapacityOverflow)` with `requested: usize::MAX` if the product
    ///   of the extents overflows
    /// - `ElementLimitExceeded` if the product exceeds `max_elements`
    pub fn check_extents(&self, extents: &[usize]) -> Result<usize> {
        if !self.allow_zero_extents {
            if let Some(axis) = extents.iter().position(|&extent| extent == 0) {
                return Err(GridError::ZeroExtent { axis });
            }
        }

        let requested = crate::lifecycle::element_count(extents)?;

        if requested > self.max_elements {
            return Err(GridError::ElementLimitExceeded {
                requested,
                limit: self.max_elements,
            });
        }
        Ok(requested)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_elements: isize::MAX as usize,
            allow_zero_extents: true,
        }
    }
}
