//! Heap-owned dense storage with runtime extents.

use crate::grid::{checked_area, Grid, GridMut};
use crate::traverse::{Points, Traversal};
use planar_core::{Extents, GridError, Indices};
use std::ops::{Index, IndexMut};

/// A grid backed by a contiguous heap buffer sized `extents.area()`.
///
/// Cells are laid out row-major (`y * extents.x + x`). Construction and
/// resizing validate extents and allocate fallibly, so an unsatisfiable
/// request surfaces as [`GridError::AllocationFailed`] rather than an
/// abort.
///
/// # Examples
///
/// ```
/// use planar_core::{Extents, Indices};
/// use planar_grid::{DenseGrid, Grid, GridMut};
///
/// let mut grid = DenseGrid::filled(Extents::new(20, 10), 1).unwrap();
/// *grid.get_mut(Indices::new(3, 2)) = 7;
/// assert_eq!(grid[Indices::new(3, 2)], 7);
/// assert!(grid.within(Indices::new(1, 1)));
/// assert!(!grid.within(Indices::new(21, 11)));
/// ```
#[derive(Clone, Debug)]
pub struct DenseGrid<T> {
    extents: Extents,
    cells: Vec<T>,
}

impl<T> DenseGrid<T> {
    /// A grid of default-valued cells.
    pub fn new(extents: Extents) -> Result<Self, GridError>
    where
        T: Default + Clone,
    {
        Self::filled(extents, T::default())
    }

    /// A grid with every cell set to `value`.
    ///
    /// Returns [`GridError::NegativeExtents`] for invalid extents and
    /// [`GridError::AllocationFailed`] if the buffer cannot be allocated.
    pub fn filled(extents: Extents, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let area = checked_area(extents)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(area)
            .map_err(|_| GridError::AllocationFailed { cells: area })?;
        cells.resize(area, value);
        Ok(Self { extents, cells })
    }

    /// A grid whose cells are produced per-point, in row-major order.
    ///
    /// Callers guarantee non-negative extents; used internally where the
    /// extents come from an already-validated grid.
    pub(crate) fn from_fn(extents: Extents, mut f: impl FnMut(Indices) -> T) -> Self {
        debug_assert!(extents.all_ge(Extents::ZERO));
        let mut cells = Vec::with_capacity(extents.area().max(0) as usize);
        for p in Points::new(extents, Traversal::RowMajor) {
            cells.push(f(p));
        }
        Self { extents, cells }
    }

    /// Discard the current contents and rebuild at new extents.
    ///
    /// The replacement buffer is fully allocated and constructed before the
    /// old storage is released; on failure the grid is left untouched.
    pub fn resize(&mut self, extents: Extents, value: T) -> Result<(), GridError>
    where
        T: Clone,
    {
        *self = Self::filled(extents, value)?;
        Ok(())
    }

    /// The backing buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    fn linear(&self, pt: Indices) -> usize {
        pt.y as usize * self.extents.x as usize + pt.x as usize
    }
}

impl<T> Default for DenseGrid<T> {
    /// An empty grid with zero extents and no allocation.
    fn default() -> Self {
        Self {
            extents: Extents::ZERO,
            cells: Vec::new(),
        }
    }
}

impl<T> Grid for DenseGrid<T> {
    type Cell = T;

    fn extents(&self) -> Extents {
        self.extents
    }

    fn get(&self, pt: Indices) -> &T {
        debug_assert!(self.within(pt));
        &self.cells[self.linear(pt)]
    }
}

impl<T> GridMut for DenseGrid<T> {
    fn get_mut(&mut self, pt: Indices) -> &mut T {
        debug_assert!(self.within(pt));
        let i = self.linear(pt);
        &mut self.cells[i]
    }
}

impl<T: PartialEq> PartialEq for DenseGrid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.extents == other.extents && self.cells == other.cells
    }
}

impl<T: Eq> Eq for DenseGrid<T> {}

impl<T> Index<Indices> for DenseGrid<T> {
    type Output = T;

    fn index(&self, pt: Indices) -> &T {
        match self.try_get(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<Indices> for DenseGrid<T> {
    fn index_mut(&mut self, pt: Indices) -> &mut T {
        match self.try_get_mut(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}
