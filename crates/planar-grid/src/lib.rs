//! Grid storage backends, views, and iteration for the planar toolkit.
//!
//! This crate defines the [`Grid`] and [`GridMut`] traits — the shared
//! access contract every storage strategy implements — along with the
//! concrete backends and the zero-copy [`View`] adapter.
//!
//! # Backends
//!
//! - [`DenseGrid`]: heap-owned contiguous buffer, runtime extents
//! - [`FixedGrid`]: inline fixed-capacity array, compile-time extents
//! - [`MappedGrid`]: caller-supplied memory, never owned
//! - [`FixedTiledGrid`]: sparse lattice of lazily-materialized [`Tile`]s
//!
//! # Views
//!
//! [`Grid::view`] carves a bounded sub-region out of any backend (or out of
//! another view) without copying; every access translates through the view's
//! origin down to the root storage. View bounds are validated against the
//! parent at construction, and the borrow ties the view to the parent's
//! lifetime, so a dangling view is a compile error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod display;
pub mod fixed;
pub mod grid;
pub mod mapped;
pub mod tiled;
pub mod traverse;
pub mod view;

#[cfg(test)]
pub(crate) mod compliance;

pub use dense::DenseGrid;
pub use display::GridDisplay;
pub use fixed::FixedGrid;
pub use grid::{Cells, Grid, GridMut, IndexedCells};
pub use mapped::MappedGrid;
pub use tiled::{FixedTiledGrid, Tile};
pub use traverse::{Points, Traversal};
pub use view::{View, ViewMut};
