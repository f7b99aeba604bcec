//! Grid contract compliance test helpers.
//!
//! These assertions verify that a backend satisfies the invariants of the
//! `Grid`/`GridMut` contract. Reused across all backend test modules
//! (DenseGrid, FixedGrid, MappedGrid, FixedTiledGrid).

use crate::grid::{Grid, GridMut};
use crate::traverse::{Points, Traversal};
use planar_core::{Bounds, Indices};

/// Deterministic per-point marker value.
fn marker(p: Indices) -> i32 {
    p.x * 1000 + p.y + 1
}

/// Writing a value at each point and reading it back yields that value,
/// without disturbing any other cell.
pub(crate) fn assert_write_read_round_trip<G: GridMut<Cell = i32>>(grid: &mut G) {
    for p in Points::new(grid.extents(), Traversal::RowMajor) {
        *grid.get_mut(p) = marker(p);
    }
    for (p, &v) in grid.indexed_cells(Traversal::RowMajor) {
        assert_eq!(v, marker(p), "cell at ({p}) lost its written value");
    }
}

/// `within` accepts exactly the half-open local index space.
pub(crate) fn assert_within_boundaries<G: Grid>(grid: &G) {
    let e = grid.extents();
    assert!(!grid.within(Indices::new(-1, 0)));
    assert!(!grid.within(Indices::new(0, -1)));
    assert!(!grid.within(Indices::new(e.x, 0)));
    assert!(!grid.within(Indices::new(0, e.y)));
    assert!(!grid.within(e));
    for p in Points::new(e, Traversal::RowMajor) {
        assert!(grid.within(p), "interior point ({p}) reported out of bounds");
    }
    assert!(grid.try_get(e).is_err());
}

/// A second `fill` with the same value changes nothing.
pub(crate) fn assert_fill_idempotent<G: GridMut<Cell = i32>>(grid: &mut G) {
    grid.fill(11);
    let once = grid.to_dense();
    grid.fill(11);
    assert!(grid.eq_grid(&once), "repeated fill changed the grid");
}

/// `V[q]` aliases `G[origin + q]`: writes through either side are visible
/// through the other.
pub(crate) fn assert_view_transparency<G: GridMut<Cell = i32>>(grid: &mut G) {
    let extents = grid.extents();
    if !extents.all_ge(Indices::new(2, 2)) {
        return;
    }
    let origin = Indices::new(1, 1);
    let bounds = Bounds::new_unchecked(origin, extents - origin);

    grid.fill(0);
    {
        let mut view = grid.view_mut(bounds).unwrap();
        for p in Points::new(view.extents(), Traversal::RowMajor) {
            *view.get_mut(p) = marker(p);
        }
    }
    for p in Points::new(extents - origin, Traversal::RowMajor) {
        assert_eq!(
            *grid.get(p + origin),
            marker(p),
            "write through view not visible in parent at ({p})"
        );
    }

    *grid.get_mut(origin) = -77;
    let view = grid.view(bounds).unwrap();
    assert_eq!(
        *view.get(Indices::ZERO),
        -77,
        "write through parent not visible in view"
    );
}

/// `assign_from` then `eq_grid` round-trips against any source.
pub(crate) fn assert_assign_round_trip<G: GridMut<Cell = i32>>(grid: &mut G) {
    let mut source = crate::DenseGrid::filled(grid.extents(), 0).unwrap();
    for p in Points::new(source.extents(), Traversal::RowMajor) {
        *source.get_mut(p) = marker(p) * 3;
    }
    grid.assign_from(&source).unwrap();
    assert!(grid.eq_grid(&source), "assignment round trip failed");
    assert!(source.eq_grid(grid), "equality is not symmetric");
}

/// Run the full compliance suite against a freshly constructed backend.
pub(crate) fn run_grid_compliance<G: GridMut<Cell = i32>>(mut grid: G) {
    assert_within_boundaries(&grid);
    assert_write_read_round_trip(&mut grid);
    assert_fill_idempotent(&mut grid);
    assert_view_transparency(&mut grid);
    assert_assign_round_trip(&mut grid);
}
