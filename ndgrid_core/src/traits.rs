//! Shape abstraction shared by every grid type.
//!
//! Downstream containers (the 2-D `Grid<T>` and the D-dimensional
//! `NdGrid<T, D>` in `ndgrid`) implement [`GridShape`] so generic code can
//! inspect their extents without knowing the concrete rank.

/// Trait for dense row-major containers with a fixed number of axes.
///
/// Only [`GridShape::extents`] is required; rank, element count and
/// emptiness are derived from it.
pub trait GridShape {
    /// Per-axis extents, leading axis first.
    fn extents(&self) -> &[usize];

    /// Number of axes.
    #[inline]
    fn rank(&self) -> usize {
        self.extents().len()
    }

    /// Total number of elements (the product of the extents).
    ///
    /// Implementors keep their extents within addressable memory, so the
    /// product cannot overflow.
    #[inline]
    fn len(&self) -> usize {
        self.extents().iter().product()
    }

    /// Whether any axis has extent zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.extents().iter().any(|&extent| extent == 0)
    }

    /// Extent of a single axis, or `None` if `axis >= rank`.
    #[inline]
    fn extent(&self, axis: usize) -> Option<usize> {
        self.extents().get(axis).copied()
    }
}
