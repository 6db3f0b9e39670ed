//! Boundary condition tests for ndgrid.
//!
//! Zero extents, the last valid coordinate on every axis, the first invalid
//! one, and the empty state left behind by `take` and `clear`.

use ndgrid::{CoreError, Grid, GridError, GridShape, NdGrid, Slice};

// =============================================================================
// Zero Extents
// =============================================================================

#[test]
fn zero_rows_and_zero_cols() {
    for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
        let grid = Grid::<u32>::new(rows, cols).unwrap();
        assert_eq!(grid.len(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
        assert_eq!(grid.extents(), [rows, cols]);
    }
}

#[test]
fn zero_extent_nd_grid_is_empty() {
    let grid = NdGrid::<String, 3>::filled([3, 0, 2], "x".into()).unwrap();
    assert!(grid.is_empty());
    assert!(GridShape::is_empty(&grid));
    assert_eq!(grid.get([0, 0, 0]), None);
}

#[test]
fn zero_size_type_grid() {
    let grid = NdGrid::<(), 2>::new([1000, 1000]).unwrap();
    assert_eq!(grid.len(), 1_000_000);
    assert_eq!(grid[[999, 999]], ());
}

// =============================================================================
// Last Valid / First Invalid Coordinate
// =============================================================================

#[test]
fn last_valid_coordinate() {
    let grid = NdGrid::from_fn([3, 4, 5], |[i, j, k]| i * 20 + j * 5 + k).unwrap();
    assert_eq!(grid[[2, 3, 4]], 59);
    assert_eq!(grid.get([2, 3, 4]), Some(&59));
}

#[test]
fn first_invalid_coordinate_on_each_axis() {
    let grid = NdGrid::<u8, 3>::new([3, 4, 5]).unwrap();
    assert_eq!(grid.get([3, 0, 0]), None);
    assert_eq!(grid.get([0, 4, 0]), None);
    assert_eq!(grid.get([0, 0, 5]), None);
}

#[test]
fn inner_overflow_does_not_alias_next_row() {
    // (0, 3) would land on (1, 0) without a per-axis check
    let mut grid = Grid::filled(2, 3, 0).unwrap();
    assert!(grid.get_mut(0, 3).is_none());
    assert_eq!(grid.get(1, 0), Some(&0));
}

#[test]
#[should_panic(expected = "index 3 out of bounds for axis 1 with extent 3")]
fn tuple_index_panics_past_last_column() {
    let grid = Grid::filled(2, 3, 0).unwrap();
    let _ = grid[(0, 3)];
}

#[test]
#[should_panic(expected = "out of bounds")]
fn chained_index_panics_past_last_column() {
    let grid = Grid::filled(2, 3, 0).unwrap();
    let _ = grid[1][3];
}

#[test]
#[should_panic(expected = "row index 2 out of bounds")]
fn row_proxy_panics_past_last_row() {
    let grid = Grid::filled(2, 3, 0).unwrap();
    let _ = grid.row(2);
}

#[test]
#[should_panic(expected = "index 4 out of bounds for axis 0 with extent 4")]
fn terminal_index_panics() {
    let grid = NdGrid::<u8, 1>::new([4]).unwrap();
    let _ = grid[4];
}

#[test]
fn try_slice_reports_axis_zero() {
    let grid = NdGrid::<u8, 2>::new([2, 2]).unwrap();
    assert_eq!(
        grid.try_slice(2),
        Err(GridError::Core(CoreError::IndexOutOfBounds {
            axis: 0,
            index: 2,
            extent: 2
        }))
    );
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn overflowing_extents_are_rejected() {
    let result = Grid::<u8>::new(usize::MAX, 2);
    assert!(matches!(
        result,
        Err(GridError::Core(CoreError::CapacityOverflow { .. }))
    ));

    let result = NdGrid::<u64, 2>::new([usize::MAX / 4, 2]);
    assert!(matches!(
        result,
        Err(GridError::Core(CoreError::CapacityOverflow { .. }))
    ));
}

#[test]
fn from_vec_length_must_match() {
    assert_eq!(
        NdGrid::from_vec([2, 2, 2], vec![0u8; 7]),
        Err(GridError::ShapeMismatch {
            expected: 8,
            got: 7
        })
    );
    assert!(NdGrid::from_vec([2, 2, 2], vec![0u8; 8]).is_ok());
}

// =============================================================================
// Moved-From and Cleared State
// =============================================================================

#[test]
fn take_leaves_zero_extents() {
    let mut grid = NdGrid::<Vec<u8>, 3>::filled([2, 2, 2], vec![1, 2]).unwrap();
    let moved = grid.take();
    assert_eq!(moved.len(), 8);
    assert_eq!(grid.extents(), [0, 0, 0]);
    assert!(grid.is_empty());
    assert_eq!(grid.get([0, 0, 0]), None);
    drop(grid);
    assert_eq!(moved[[1, 1, 1]], vec![1, 2]);
}

#[test]
fn take_from_empty_is_empty() {
    let mut grid = Grid::<u8>::default();
    let moved = grid.take();
    assert!(moved.is_empty());
    assert!(grid.is_empty());
}

#[test]
fn clear_is_idempotent() {
    let mut grid = Grid::filled(3, 3, String::from("x")).unwrap();
    grid.clear();
    grid.clear();
    assert_eq!(grid.extents(), [0, 0]);
    assert_eq!(grid, Grid::default());
}

#[test]
fn reuse_after_take() {
    let mut grid = Grid::filled(2, 2, 1).unwrap();
    let _ = grid.take();
    grid = Grid::filled(1, 3, 2).unwrap();
    assert_eq!(grid.as_slice(), &[2, 2, 2]);
}
