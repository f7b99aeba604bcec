//! Zero-copy bounded sub-regions over any grid.

use crate::grid::{Grid, GridMut};
use planar_core::{Bounds, Extents, Indices};
use std::ops::{Index, IndexMut};

/// A non-owning window exposing a sub-region of a parent grid.
///
/// The view's local index space is `[0, extents)`; every access adds the
/// view's origin before forwarding to the parent, so a view of a view
/// resolves by repeated translation down to the root storage. Views carry
/// no storage of their own and borrow the parent for their whole lifetime —
/// the borrow checker rejects any use after the parent is moved, resized,
/// or dropped.
///
/// Construct through [`Grid::view`] or [`Grid::as_view`], which validate
/// the bounds against the parent.
///
/// # Examples
///
/// ```
/// use planar_core::{Bounds, Extents, Indices};
/// use planar_grid::{DenseGrid, Grid};
///
/// let grid = DenseGrid::filled(Extents::new(4, 4), 7).unwrap();
/// let window = grid.view(Bounds::fixed::<1, 1, 2, 2>()).unwrap();
/// assert_eq!(window.extents(), Extents::new(2, 2));
/// assert_eq!(window[Indices::new(0, 0)], grid[Indices::new(1, 1)]);
/// ```
#[derive(Debug)]
pub struct View<'a, G: Grid> {
    parent: &'a G,
    bounds: Bounds,
}

impl<'a, G: Grid> View<'a, G> {
    /// Bounds are validated by the `Grid::view` factory before this runs.
    pub(crate) fn new(parent: &'a G, bounds: Bounds) -> Self {
        Self { parent, bounds }
    }
}

impl<G: Grid> Grid for View<'_, G> {
    type Cell = G::Cell;

    fn extents(&self) -> Extents {
        self.bounds.extents()
    }

    fn origin(&self) -> Indices {
        self.bounds.origin()
    }

    fn get(&self, pt: Indices) -> &Self::Cell {
        debug_assert!(self.within(pt));
        self.parent.get(pt + self.bounds.origin())
    }
}

impl<G: Grid> Index<Indices> for View<'_, G> {
    type Output = G::Cell;

    fn index(&self, pt: Indices) -> &Self::Output {
        match self.try_get(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

/// The mutable counterpart of [`View`].
///
/// Holds an exclusive borrow of the parent, so the parent cannot be read,
/// written, or resized while the view is alive. Construct through
/// [`GridMut::view_mut`] or [`GridMut::as_view_mut`].
pub struct ViewMut<'a, G: GridMut> {
    parent: &'a mut G,
    bounds: Bounds,
}

impl<'a, G: GridMut> ViewMut<'a, G> {
    /// Bounds are validated by the `GridMut::view_mut` factory before this runs.
    pub(crate) fn new(parent: &'a mut G, bounds: Bounds) -> Self {
        Self { parent, bounds }
    }
}

impl<G: GridMut> Grid for ViewMut<'_, G> {
    type Cell = G::Cell;

    fn extents(&self) -> Extents {
        self.bounds.extents()
    }

    fn origin(&self) -> Indices {
        self.bounds.origin()
    }

    fn get(&self, pt: Indices) -> &Self::Cell {
        debug_assert!(self.within(pt));
        self.parent.get(pt + self.bounds.origin())
    }
}

impl<G: GridMut> GridMut for ViewMut<'_, G> {
    fn get_mut(&mut self, pt: Indices) -> &mut Self::Cell {
        debug_assert!(self.within(pt));
        self.parent.get_mut(pt + self.bounds.origin())
    }
}

impl<G: GridMut> Index<Indices> for ViewMut<'_, G> {
    type Output = G::Cell;

    fn index(&self, pt: Indices) -> &Self::Output {
        match self.try_get(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<G: GridMut> IndexMut<Indices> for ViewMut<'_, G> {
    fn index_mut(&mut self, pt: Indices) -> &mut Self::Output {
        match self.try_get_mut(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}
