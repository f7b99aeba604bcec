//! Generic 2D indexed grids with interchangeable storage strategies.
//!
//! `planar` re-exports the full public surface of the workspace:
//!
//! - Coordinate vocabulary and errors from `planar-core`:
//!   [`Coordinates`], [`Indices`], [`Extents`], [`Bounds`], [`GridError`]
//! - The access contract and backends from `planar-grid`:
//!   [`Grid`], [`GridMut`], [`DenseGrid`], [`FixedGrid`], [`MappedGrid`],
//!   [`FixedTiledGrid`], [`View`], [`ViewMut`], [`Traversal`]
//!
//! # Quick start
//!
//! ```
//! use planar::{Bounds, DenseGrid, Extents, Grid, GridMut, Indices};
//!
//! let mut grid = DenseGrid::filled(Extents::new(8, 8), 0).unwrap();
//! grid.view_mut(Bounds::fixed::<2, 2, 3, 3>()).unwrap().fill(9);
//!
//! assert_eq!(grid[Indices::new(3, 3)], 9);
//! assert_eq!(grid[Indices::new(1, 1)], 0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use planar_core::{Bounds, Coordinates, Extents, GridError, Indices};
pub use planar_grid::{
    Cells, DenseGrid, FixedGrid, FixedTiledGrid, Grid, GridDisplay, GridMut, IndexedCells,
    MappedGrid, Points, Tile, Traversal, View, ViewMut,
};
