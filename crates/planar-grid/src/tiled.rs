//! Sparse tiled storage: a lattice of lazily-materialized fixed-size tiles.

use crate::dense::DenseGrid;
use crate::fixed::FixedGrid;
use crate::grid::{Grid, GridMut};
use planar_core::{Extents, GridError, Indices};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One cell of the tile lattice: an optional backing sub-grid plus its
/// tile-aligned origin in the parent index space.
///
/// An empty tile has no storage; every cell in its region logically holds
/// the parent grid's default value. Materialization happens at most once,
/// on the first mutable access to any cell the tile covers, and is never
/// undone.
#[derive(Clone, Debug)]
pub struct Tile<T, const TW: usize, const TH: usize> {
    cells: Option<Box<FixedGrid<T, TW, TH>>>,
    origin: Indices,
}

impl<T, const TW: usize, const TH: usize> Tile<T, TW, TH> {
    /// `true` once backing storage has been allocated.
    pub fn is_materialized(&self) -> bool {
        self.cells.is_some()
    }

    /// The tile-aligned origin of this tile's region in the parent grid.
    pub fn origin(&self) -> Indices {
        self.origin
    }

    /// The backing sub-grid, if materialized.
    pub fn grid(&self) -> Option<&FixedGrid<T, TW, TH>> {
        self.cells.as_deref()
    }
}

impl<T: fmt::Display, const TW: usize, const TH: usize> fmt::Display for Tile<T, TW, TH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cells {
            Some(grid) => {
                writeln!(f, "origin: {}", self.origin)?;
                write!(f, "tile:\n{}", grid.display())
            }
            None => write!(f, "tile: <not expanded>"),
        }
    }
}

/// A `W x H` grid partitioned into a dense lattice of `TW x TH` tiles,
/// each materialized on first write.
///
/// Reads through unmaterialized tiles return the shared default value in
/// O(1) without allocating; only mutable access allocates, so whole-grid
/// traversal of a sparse grid stays sparse while [`GridMut::fill`] or a
/// cell-wise copy materializes every touched tile. Storage growth is
/// monotonic: resetting every cell of a tile back to the default does not
/// release it.
///
/// Tile extents must be nonzero and evenly divide the grid extents; this
/// is validated at construction.
///
/// # Examples
///
/// ```
/// use planar_core::Indices;
/// use planar_grid::{FixedTiledGrid, Grid, GridMut};
///
/// let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(5).unwrap();
/// assert_eq!(grid.active(), 0);
///
/// *grid.get_mut(Indices::new(5, 5)) = 6;
/// assert_eq!(grid.active(), 1);
/// assert_eq!(grid[Indices::new(5, 5)], 6);
/// // The rest of the touched tile, and all untouched tiles, read the default.
/// assert_eq!(grid[Indices::new(6, 5)], 5);
/// assert_eq!(grid[Indices::new(0, 0)], 5);
/// ```
pub struct FixedTiledGrid<T, const W: usize, const H: usize, const TW: usize, const TH: usize> {
    default: T,
    tiles: DenseGrid<Tile<T, TW, TH>>,
}

impl<T, const W: usize, const H: usize, const TW: usize, const TH: usize>
    FixedTiledGrid<T, W, H, TW, TH>
{
    /// The compile-time grid extents.
    pub const EXTENTS: Extents = Extents::new(W as i32, H as i32);

    /// The compile-time tile extents.
    pub const TILE_EXTENTS: Extents = Extents::new(TW as i32, TH as i32);

    /// A fully-empty grid whose every cell reads `default`.
    ///
    /// Returns [`GridError::TileMisaligned`] if the tile extents are zero
    /// or do not evenly divide the grid extents.
    pub fn new(default: T) -> Result<Self, GridError> {
        if TW == 0 || TH == 0 || W % TW != 0 || H % TH != 0 {
            return Err(GridError::TileMisaligned {
                grid: Self::EXTENTS,
                tile: Self::TILE_EXTENTS,
            });
        }
        let lattice = Extents::new((W / TW) as i32, (H / TH) as i32);
        let tiles = DenseGrid::from_fn(lattice, |tile_pt| Tile {
            cells: None,
            origin: Indices::new(tile_pt.x * TW as i32, tile_pt.y * TH as i32),
        });
        Ok(Self { default, tiles })
    }

    /// Extents of the tile lattice: tiles per row by tiles per column.
    pub fn lattice_extents(&self) -> Extents {
        self.tiles.extents()
    }

    /// Total number of tiles, materialized or not.
    pub fn tile_count(&self) -> usize {
        self.tiles.extents().area() as usize
    }

    /// Number of materialized tiles.
    pub fn active(&self) -> usize {
        self.tiles
            .as_slice()
            .iter()
            .filter(|t| t.is_materialized())
            .count()
    }

    /// One flag per tile, `true` iff that tile is materialized.
    ///
    /// The mask has [`lattice_extents`](Self::lattice_extents) extents and
    /// is indexed by tile-index, not cell-index.
    pub fn mask(&self) -> DenseGrid<bool> {
        DenseGrid::from_fn(self.tiles.extents(), |p| {
            self.tiles.get(p).is_materialized()
        })
    }

    /// The tile at a tile-index, for inspection.
    pub fn tile(&self, tile_pt: Indices) -> Option<&Tile<T, TW, TH>> {
        self.tiles.try_get(tile_pt).ok()
    }

    /// The value observed in every unmaterialized region.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Tile-index of the tile covering a cell-index.
    fn tile_point(pt: Indices) -> Indices {
        Indices::new(pt.x / TW as i32, pt.y / TH as i32)
    }
}

impl<T, const W: usize, const H: usize, const TW: usize, const TH: usize> Grid
    for FixedTiledGrid<T, W, H, TW, TH>
{
    type Cell = T;

    fn extents(&self) -> Extents {
        Self::EXTENTS
    }

    fn get(&self, pt: Indices) -> &T {
        debug_assert!(self.within(pt));
        let tile = self.tiles.get(Self::tile_point(pt));
        match &tile.cells {
            Some(grid) => grid.get(pt - tile.origin),
            None => &self.default,
        }
    }
}

impl<T: Clone, const W: usize, const H: usize, const TW: usize, const TH: usize> GridMut
    for FixedTiledGrid<T, W, H, TW, TH>
{
    /// Mutable access materializes the covering tile on first touch: the
    /// tile's sub-grid is allocated and initialized to the default value
    /// before the requested cell is borrowed.
    fn get_mut(&mut self, pt: Indices) -> &mut T {
        debug_assert!(self.within(pt));
        let default = &self.default;
        let tile = self.tiles.get_mut(Self::tile_point(pt));
        let grid = tile
            .cells
            .get_or_insert_with(|| Box::new(FixedGrid::filled(default.clone())));
        grid.get_mut(pt - tile.origin)
    }
}

impl<T, const W: usize, const H: usize, const TW: usize, const TH: usize> Index<Indices>
    for FixedTiledGrid<T, W, H, TW, TH>
{
    type Output = T;

    fn index(&self, pt: Indices) -> &T {
        match self.try_get(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Clone, const W: usize, const H: usize, const TW: usize, const TH: usize> IndexMut<Indices>
    for FixedTiledGrid<T, W, H, TW, TH>
{
    fn index_mut(&mut self, pt: Indices) -> &mut T {
        match self.try_get_mut(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::traverse::Traversal;
    use crate::FixedGrid;
    use planar_core::Bounds;
    use proptest::prelude::*;

    fn pt(x: i32, y: i32) -> Indices {
        Indices::new(x, y)
    }

    #[test]
    fn untouched_grid_reads_default_everywhere() {
        let grid = FixedTiledGrid::<i32, 20, 20, 10, 10>::new(5).unwrap();
        assert_eq!(grid.active(), 0);
        assert!(grid.cells(Traversal::RowMajor).all(|&v| v == 5));
        // Reading every cell allocated nothing.
        assert_eq!(grid.active(), 0);
    }

    #[test]
    fn misaligned_tile_extents_are_rejected() {
        assert!(matches!(
            FixedTiledGrid::<i32, 20, 20, 6, 5>::new(0),
            Err(GridError::TileMisaligned { .. })
        ));
        assert!(matches!(
            FixedTiledGrid::<i32, 20, 20, 0, 5>::new(0),
            Err(GridError::TileMisaligned { .. })
        ));
        assert!(FixedTiledGrid::<i32, 20, 20, 4, 5>::new(0).is_ok());
    }

    #[test]
    fn single_tile_grid_assign() {
        let mut grid = FixedTiledGrid::<i32, 20, 20, 20, 20>::new(5).unwrap();
        *grid.get_mut(pt(5, 5)) = 6;
        assert_eq!(grid[pt(5, 5)], 6);
        assert_eq!(grid.active(), 1);
        assert_eq!(grid.tile_count(), 1);
    }

    #[test]
    fn writes_materialize_exactly_the_covering_tiles() {
        let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(5).unwrap();

        *grid.get_mut(pt(5, 5)) = 6;
        *grid.get_mut(pt(18, 19)) = 9;

        assert!(grid.mask()[pt(1, 1)]);
        assert!(grid.mask()[pt(3, 3)]);
        assert_eq!(grid.active(), 2);

        assert_eq!(grid[pt(5, 5)], 6);
        assert_eq!(grid[pt(18, 19)], 9);
        assert_eq!(grid[pt(0, 0)], 5);
    }

    #[test]
    fn first_write_leaves_rest_of_tile_at_default() {
        let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(5).unwrap();
        *grid.get_mut(pt(6, 7)) = 1;

        assert_eq!(grid.active(), 1);
        let defaults = grid
            .indexed_cells(Traversal::RowMajor)
            .filter(|&(q, _)| q != pt(6, 7))
            .all(|(_, &v)| v == 5);
        assert!(defaults);
    }

    #[test]
    fn rewriting_the_default_does_not_demote() {
        let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(5).unwrap();
        *grid.get_mut(pt(2, 2)) = 8;
        *grid.get_mut(pt(2, 2)) = 5;
        // Monotonic growth: the tile stays materialized.
        assert_eq!(grid.active(), 1);
        assert!(grid.cells(Traversal::RowMajor).all(|&v| v == 5));
    }

    #[test]
    fn tile_lookup_reports_origin_and_storage() {
        let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(0).unwrap();
        *grid.get_mut(pt(12, 3)) = 4;

        let tile = grid.tile(pt(2, 0)).unwrap();
        assert!(tile.is_materialized());
        assert_eq!(tile.origin(), pt(10, 0));
        let sub = tile.grid().unwrap();
        assert_eq!(sub[pt(2, 3)], 4);

        let empty = grid.tile(pt(0, 0)).unwrap();
        assert!(!empty.is_materialized());
        assert!(empty.grid().is_none());

        assert!(grid.tile(pt(4, 4)).is_none());
    }

    #[test]
    fn fill_materializes_every_tile() {
        let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(1).unwrap();
        grid.fill(2);
        assert_eq!(grid.active(), grid.tile_count());
        assert!(grid.cells(Traversal::RowMajor).all(|&v| v == 2));
    }

    #[test]
    fn view_assign_into_tiled_grid() {
        let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(1).unwrap();

        grid.view_mut(Bounds::fixed::<1, 1, 2, 2>())
            .unwrap()
            .assign_from(&FixedGrid::<i32, 2, 2>::filled(5))
            .unwrap();

        assert_eq!(grid[pt(0, 0)], 1);
        assert_eq!(grid[pt(1, 1)], 5);
        assert_eq!(grid[pt(2, 2)], 5);
        assert_eq!(grid[pt(3, 3)], 1);
        // The write region lies inside tile (0, 0) only.
        assert_eq!(grid.active(), 1);
    }

    #[test]
    fn lattice_extents_and_mask_shape_agree() {
        let grid = FixedTiledGrid::<i32, 20, 20, 5, 4>::new(0).unwrap();
        assert_eq!(grid.lattice_extents(), Extents::new(4, 5));
        assert_eq!(grid.mask().extents(), Extents::new(4, 5));
        assert_eq!(grid.tile_count(), 20);
    }

    #[test]
    fn equality_sees_through_materialization() {
        let mut a = FixedTiledGrid::<i32, 10, 10, 5, 5>::new(3).unwrap();
        let b = FixedTiledGrid::<i32, 10, 10, 5, 5>::new(3).unwrap();
        // Materialize a tile without changing observable values.
        *a.get_mut(pt(0, 0)) = 3;
        assert_eq!(a.active(), 1);
        assert_eq!(b.active(), 0);
        assert!(a.eq_grid(&b));
    }

    #[test]
    fn contract_compliance() {
        let grid = FixedTiledGrid::<i32, 8, 6, 4, 3>::new(0).unwrap();
        compliance::run_grid_compliance(grid);
    }

    proptest! {
        #[test]
        fn laziness_invariant(writes in proptest::collection::vec((0i32..20, 0i32..20), 0..12)) {
            let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(7).unwrap();
            let mut touched = std::collections::HashSet::new();
            for &(x, y) in &writes {
                *grid.get_mut(pt(x, y)) = 9;
                touched.insert((x / 5, y / 5));
            }
            // Exactly the covering tiles are materialized.
            prop_assert_eq!(grid.active(), touched.len());
            let mask = grid.mask();
            for tx in 0..4 {
                for ty in 0..4 {
                    prop_assert_eq!(mask[pt(tx, ty)], touched.contains(&(tx, ty)));
                }
            }
            // Unwritten cells still read the default.
            let written: std::collections::HashSet<_> = writes.iter().copied().collect();
            for (q, &v) in grid.indexed_cells(Traversal::RowMajor) {
                if !written.contains(&(q.x, q.y)) {
                    prop_assert_eq!(v, 7);
                }
            }
        }
    }
}
