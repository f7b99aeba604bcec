//! The shared access contract implemented by every storage strategy.
//!
//! [`Grid`] and [`GridMut`] replace the original's self-referencing base
//! class: each backend supplies the per-strategy hooks (`extents`, `get`,
//! `get_mut`), and the generic machinery — checked access, iteration,
//! equality, whole-grid arithmetic, view creation — is written once as
//! provided methods.

use crate::display::GridDisplay;
use crate::traverse::{Points, Traversal};
use crate::view::{View, ViewMut};
use planar_core::{Bounds, Extents, GridError, Indices};
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Validate extents at a construction boundary and widen to a cell count.
pub(crate) fn checked_area(extents: Extents) -> Result<usize, GridError> {
    if !extents.all_ge(Extents::ZERO) {
        return Err(GridError::NegativeExtents { extents });
    }
    Ok(extents.area() as usize)
}

/// Validate that view bounds lie inside a parent of the given extents.
pub(crate) fn checked_view_bounds(bounds: Bounds, parent: Extents) -> Result<(), GridError> {
    if !Bounds::new_unchecked(Indices::ZERO, parent).contains(bounds) {
        return Err(GridError::BoundsOutOfRange {
            bounds,
            extents: parent,
        });
    }
    Ok(())
}

/// Validate that two grids agree on extents before pairwise iteration.
pub(crate) fn checked_same_extents(left: Extents, right: Extents) -> Result<(), GridError> {
    if left != right {
        return Err(GridError::ExtentsMismatch { left, right });
    }
    Ok(())
}

/// Read access to a logically dense 2D cell space.
///
/// Implementors provide [`extents`](Grid::extents) and the unchecked
/// [`get`](Grid::get) hook; everything else is derived. A grid's local
/// index space is always `[0, extents)` — [`origin`](Grid::origin) reports
/// where that space sits relative to a parent, which is only nonzero for
/// views.
pub trait Grid {
    /// The cell value type.
    type Cell;

    /// Size of the addressable index space.
    fn extents(&self) -> Extents;

    /// Borrow the cell at `pt`.
    ///
    /// Callers must ensure `self.within(pt)`; this is debug-asserted by
    /// backends but not checked on the release path. Use
    /// [`try_get`](Grid::try_get) for the checked entry point.
    fn get(&self, pt: Indices) -> &Self::Cell;

    /// Placement of this grid's index space relative to its parent.
    ///
    /// Storage grids own their index space and sit at the origin; views
    /// report the offset they translate accesses by.
    fn origin(&self) -> Indices {
        Indices::ZERO
    }

    /// Origin and extents as a single [`Bounds`] value.
    fn bounds(&self) -> Bounds {
        Bounds::new_unchecked(self.origin(), self.extents())
    }

    /// `true` if the grid holds no cells.
    fn is_empty(&self) -> bool {
        self.extents().area() == 0
    }

    /// `true` if `pt` falls inside the local index space `[0, extents)`.
    fn within(&self, pt: Indices) -> bool {
        pt.all_ge(Indices::ZERO) && pt.all_lt(self.extents())
    }

    /// Checked cell access.
    ///
    /// Returns [`GridError::OutOfBounds`] instead of touching storage when
    /// `pt` is outside the grid.
    fn try_get(&self, pt: Indices) -> Result<&Self::Cell, GridError> {
        if self.within(pt) {
            Ok(self.get(pt))
        } else {
            Err(GridError::OutOfBounds {
                point: pt,
                extents: self.extents(),
            })
        }
    }

    /// Iterate cell values in the given traversal order.
    fn cells(&self, order: Traversal) -> Cells<'_, Self>
    where
        Self: Sized,
    {
        Cells {
            grid: self,
            points: Points::new(self.extents(), order),
        }
    }

    /// Iterate `(point, cell)` pairs in the given traversal order.
    fn indexed_cells(&self, order: Traversal) -> IndexedCells<'_, Self>
    where
        Self: Sized,
    {
        IndexedCells {
            grid: self,
            points: Points::new(self.extents(), order),
        }
    }

    /// Cell-wise equality against any other grid.
    ///
    /// `true` iff the extents match and every corresponding cell pair
    /// compares equal; short-circuits on the first mismatch.
    fn eq_grid<G>(&self, other: &G) -> bool
    where
        Self: Sized,
        G: Grid<Cell = Self::Cell>,
        Self::Cell: PartialEq,
    {
        self.extents() == other.extents()
            && Points::new(self.extents(), Traversal::RowMajor).all(|p| self.get(p) == other.get(p))
    }

    /// A non-owning view over the sub-region `bounds`, relative to this grid.
    ///
    /// Returns [`GridError::BoundsOutOfRange`] if the bounds do not lie
    /// entirely inside this grid; an over-sized or mis-origined view is
    /// rejected here rather than becoming a latent out-of-range access.
    fn view(&self, bounds: Bounds) -> Result<View<'_, Self>, GridError>
    where
        Self: Sized,
    {
        checked_view_bounds(bounds, self.extents())?;
        Ok(View::new(self, bounds))
    }

    /// A view spanning the whole grid.
    fn as_view(&self) -> View<'_, Self>
    where
        Self: Sized,
    {
        View::new(self, Bounds::new_unchecked(Indices::ZERO, self.extents()))
    }

    /// Copy every cell into a freshly allocated [`DenseGrid`].
    ///
    /// [`DenseGrid`]: crate::DenseGrid
    fn to_dense(&self) -> crate::DenseGrid<Self::Cell>
    where
        Self: Sized,
        Self::Cell: Clone,
    {
        crate::DenseGrid::from_fn(self.extents(), |p| self.get(p).clone())
    }

    /// Row-wrapped textual dump adapter.
    fn display(&self) -> GridDisplay<'_, Self>
    where
        Self: Sized,
        Self::Cell: fmt::Display,
    {
        GridDisplay::new(self)
    }
}

/// Write access on top of [`Grid`].
///
/// Whole-grid mutation iterates coordinates and resolves each cell through
/// [`get_mut`](GridMut::get_mut); exclusive borrows rule out a general
/// `&mut` cell iterator, and the coordinate loop preserves per-cell access
/// semantics (which is what drives tile materialization in the sparse
/// backend).
pub trait GridMut: Grid {
    /// Borrow the cell at `pt` mutably.
    ///
    /// Callers must ensure `self.within(pt)`. On the sparse tiled backend
    /// this is the access that materializes the covering tile.
    fn get_mut(&mut self, pt: Indices) -> &mut Self::Cell;

    /// Checked mutable cell access.
    fn try_get_mut(&mut self, pt: Indices) -> Result<&mut Self::Cell, GridError> {
        if self.within(pt) {
            Ok(self.get_mut(pt))
        } else {
            Err(GridError::OutOfBounds {
                point: pt,
                extents: self.extents(),
            })
        }
    }

    /// Assign `value` to the cell at `pt`, bounds-checked.
    fn set(&mut self, pt: Indices, value: Self::Cell) -> Result<(), GridError> {
        *self.try_get_mut(pt)? = value;
        Ok(())
    }

    /// Assign `value` to every cell, in row-major order.
    fn fill(&mut self, value: Self::Cell)
    where
        Self: Sized,
        Self::Cell: Clone,
    {
        for p in Points::new(self.extents(), Traversal::RowMajor) {
            *self.get_mut(p) = value.clone();
        }
    }

    /// Copy every cell of `src` into this grid.
    ///
    /// Extents must match exactly; returns [`GridError::ExtentsMismatch`]
    /// before any cell is written otherwise.
    fn assign_from<G>(&mut self, src: &G) -> Result<(), GridError>
    where
        Self: Sized,
        G: Grid<Cell = Self::Cell>,
        Self::Cell: Clone,
    {
        checked_same_extents(self.extents(), src.extents())?;
        for p in Points::new(self.extents(), Traversal::RowMajor) {
            *self.get_mut(p) = src.get(p).clone();
        }
        Ok(())
    }

    /// Cell-wise `+=` from a grid of equal extents.
    fn add_assign_from<G>(&mut self, src: &G) -> Result<(), GridError>
    where
        Self: Sized,
        G: Grid<Cell = Self::Cell>,
        Self::Cell: Clone + AddAssign,
    {
        checked_same_extents(self.extents(), src.extents())?;
        for p in Points::new(self.extents(), Traversal::RowMajor) {
            *self.get_mut(p) += src.get(p).clone();
        }
        Ok(())
    }

    /// Cell-wise `-=` from a grid of equal extents.
    fn sub_assign_from<G>(&mut self, src: &G) -> Result<(), GridError>
    where
        Self: Sized,
        G: Grid<Cell = Self::Cell>,
        Self::Cell: Clone + SubAssign,
    {
        checked_same_extents(self.extents(), src.extents())?;
        for p in Points::new(self.extents(), Traversal::RowMajor) {
            *self.get_mut(p) -= src.get(p).clone();
        }
        Ok(())
    }

    /// Scale every cell by `factor` (`*=`).
    fn scale<S>(&mut self, factor: S)
    where
        Self: Sized,
        S: Copy,
        Self::Cell: MulAssign<S>,
    {
        for p in Points::new(self.extents(), Traversal::RowMajor) {
            *self.get_mut(p) *= factor;
        }
    }

    /// Divide every cell by `divisor` (`/=`).
    fn scale_div<S>(&mut self, divisor: S)
    where
        Self: Sized,
        S: Copy,
        Self::Cell: DivAssign<S>,
    {
        for p in Points::new(self.extents(), Traversal::RowMajor) {
            *self.get_mut(p) /= divisor;
        }
    }

    /// A mutable view over the sub-region `bounds`, validated like
    /// [`Grid::view`].
    fn view_mut(&mut self, bounds: Bounds) -> Result<ViewMut<'_, Self>, GridError>
    where
        Self: Sized,
    {
        checked_view_bounds(bounds, self.extents())?;
        Ok(ViewMut::new(self, bounds))
    }

    /// A mutable view spanning the whole grid.
    fn as_view_mut(&mut self) -> ViewMut<'_, Self>
    where
        Self: Sized,
    {
        let bounds = Bounds::new_unchecked(Indices::ZERO, self.extents());
        ViewMut::new(self, bounds)
    }
}

/// Iterator over cell references in a chosen traversal order.
///
/// Created by [`Grid::cells`].
pub struct Cells<'a, G: Grid> {
    grid: &'a G,
    points: Points,
}

impl<'a, G: Grid> Iterator for Cells<'a, G> {
    type Item = &'a G::Cell;

    fn next(&mut self) -> Option<Self::Item> {
        self.points.next().map(|p| self.grid.get(p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl<G: Grid> ExactSizeIterator for Cells<'_, G> {}
impl<G: Grid> FusedIterator for Cells<'_, G> {}

/// Iterator over `(point, cell)` pairs in a chosen traversal order.
///
/// Created by [`Grid::indexed_cells`].
pub struct IndexedCells<'a, G: Grid> {
    grid: &'a G,
    points: Points,
}

impl<'a, G: Grid> Iterator for IndexedCells<'a, G> {
    type Item = (Indices, &'a G::Cell);

    fn next(&mut self) -> Option<Self::Item> {
        self.points.next().map(|p| (p, self.grid.get(p)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl<G: Grid> ExactSizeIterator for IndexedCells<'_, G> {}
impl<G: Grid> FusedIterator for IndexedCells<'_, G> {}
