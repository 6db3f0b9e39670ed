//! Property-based tests for layout, indexing, slicing and copy semantics.

use ndgrid::{Grid, NdGrid, Slice};
use proptest::prelude::*;

fn extents_3d() -> impl Strategy<Value = [usize; 3]> {
    [1usize..6, 1usize..6, 1usize..6]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Offset of `(i, j, k)` is `(i * d1 + j) * d2 + k`
    #[test]
    fn row_major_linearization(extents in extents_3d()) {
        let [_, d1, d2] = extents;
        let grid = NdGrid::from_fn(extents, |[i, j, k]| (i * d1 + j) * d2 + k).unwrap();
        for (offset, value) in grid.iter().enumerate() {
            prop_assert_eq!(*value, offset);
        }
    }

    /// `grid[y][x]`, `grid[(y, x)]` and `grid.row(y)[x]` reach the same element
    #[test]
    fn chained_index_matches_tuple_index(rows in 1usize..10, cols in 1usize..10) {
        let grid = Grid::from_fn(rows, cols, |y, x| y * 1000 + x).unwrap();
        for y in 0..rows {
            let row = grid.row(y);
            for x in 0..cols {
                prop_assert_eq!(grid[y][x], grid[(y, x)]);
                prop_assert_eq!(row[x], grid[(y, x)]);
            }
        }
    }

    /// A slice holds exactly the parent's sub-block at the leading coordinate
    #[test]
    fn slice_matches_parent(extents in extents_3d(), pick in 0usize..6) {
        let i = pick % extents[0];
        let grid = NdGrid::from_fn(extents, |[a, b, c]| (a, b, c)).unwrap();
        let sub = grid.slice(i);
        prop_assert_eq!(sub.extents(), [extents[1], extents[2]]);
        for ([j, k], value) in sub.indexed_iter() {
            prop_assert_eq!(*value, (i, j, k));
            prop_assert_eq!(value, &grid[[i, j, k]]);
        }
    }

    /// Mutating a clone never changes the original
    #[test]
    fn clone_is_independent(extents in extents_3d(), value in any::<i32>()) {
        let original = NdGrid::<i32, 3>::filled(extents, value).unwrap();
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        copy.fill(value.wrapping_add(1));
        prop_assert!(original.iter().all(|&v| v == value));
    }

    /// `clone_from` adopts the source's extents and elements whatever the target held
    #[test]
    fn clone_from_any_shape(
        (rows_a, cols_a) in (0usize..6, 0usize..6),
        (rows_b, cols_b) in (0usize..6, 0usize..6),
    ) {
        let source = Grid::from_fn(rows_a, cols_a, |y, x| format!("{}:{}", y, x)).unwrap();
        let mut target = Grid::filled(rows_b, cols_b, String::from("old")).unwrap();
        target.clone_from(&source);
        prop_assert_eq!(target.extents(), [rows_a, cols_a]);
        prop_assert_eq!(&target, &source);
    }

    /// `fill` sets every element and keeps the extents
    #[test]
    fn fill_broadcasts(rows in 0usize..8, cols in 0usize..8, value in any::<u16>()) {
        let mut grid = Grid::<u16>::new(rows, cols).unwrap();
        grid.fill(value);
        prop_assert_eq!(grid.extents(), [rows, cols]);
        prop_assert!(grid.iter().all(|&v| v == value));
    }
}

#[test]
fn construction_yields_product_of_extents() {
    let grid = NdGrid::<u8, 4>::filled([2, 3, 4, 5], 9).unwrap();
    assert_eq!(grid.len(), 120);
    assert!(grid.iter().all(|&v| v == 9));

    let grid = Grid::<String>::new(4, 5).unwrap();
    assert_eq!(grid.len(), 20);
    assert!(grid.iter().all(String::is_empty));
}

#[test]
fn pattern_2_3_4() {
    let grid = NdGrid::from_fn([2, 3, 4], |[i, j, k]| i * 12 + j * 4 + k).unwrap();
    assert_eq!(grid[[0, 0, 0]], 0);
    assert_eq!(grid[[0, 2, 3]], 11);
    assert_eq!(grid[[1, 0, 0]], 12);
    assert_eq!(grid[[1, 2, 3]], 23);
}

#[test]
fn slice_of_filled_3d() {
    let g3 = NdGrid::<f32, 3>::filled([2, 3, 4], 1.0).unwrap();
    assert_eq!(g3[[1, 1, 1]], 1.0);

    let mut g2 = g3.slice(1);
    assert_eq!(g2[[1, 1]], 1.0);
    g2[[1, 1]] = 3.0;
    assert_eq!(g3[[1, 1, 1]], 1.0);
}

#[test]
fn slicing_reaches_every_rank() {
    let grid = NdGrid::<u8, 8>::filled([2; 8], 1).unwrap();
    let g7 = grid.slice(1);
    let g6 = g7.slice(1);
    let g5 = g6.slice(1);
    let g4 = g5.slice(1);
    let g3 = g4.slice(1);
    let g2 = g3.slice(1);
    let g1 = g2.slice(1);
    assert_eq!(g7.len(), 128);
    assert_eq!(g1.extents(), [2]);
    assert_eq!(g1[1], 1);
}
