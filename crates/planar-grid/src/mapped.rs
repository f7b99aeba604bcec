//! Grids over externally owned memory.

use crate::grid::{checked_area, Grid, GridMut};
use planar_core::{Extents, GridError, Indices};
use std::ops::{Index, IndexMut};

/// A grid mapped onto a caller-supplied buffer.
///
/// The grid never owns the memory: it borrows a mutable slice for its
/// lifetime and interprets the first `extents.area()` cells of it, row-major.
/// Construction and every resize check that the buffer is large enough, so
/// an undersized mapping is rejected up front
/// ([`GridError::InsufficientCapacity`]) instead of reading past the end.
///
/// # Examples
///
/// ```
/// use planar_core::{Extents, Indices};
/// use planar_grid::{Grid, MappedGrid};
///
/// let mut segment = [1i32; 200];
/// let grid = MappedGrid::new(Extents::new(20, 10), &mut segment).unwrap();
/// assert_eq!(grid[Indices::new(3, 3)], 1);
/// ```
#[derive(Debug)]
pub struct MappedGrid<'m, T> {
    extents: Extents,
    cells: &'m mut [T],
}

impl<'m, T> MappedGrid<'m, T> {
    /// Map `extents` onto `cells`.
    ///
    /// Returns [`GridError::NegativeExtents`] for invalid extents, or
    /// [`GridError::InsufficientCapacity`] if the slice holds fewer than
    /// `extents.area()` cells.
    pub fn new(extents: Extents, cells: &'m mut [T]) -> Result<Self, GridError> {
        let required = checked_area(extents)?;
        if cells.len() < required {
            return Err(GridError::InsufficientCapacity {
                required,
                available: cells.len(),
            });
        }
        Ok(Self { extents, cells })
    }

    /// Change the logical extents over the same backing buffer.
    ///
    /// Existing cell values are reinterpreted under the new layout.
    pub fn resize(&mut self, extents: Extents) -> Result<(), GridError> {
        let required = checked_area(extents)?;
        if self.cells.len() < required {
            return Err(GridError::InsufficientCapacity {
                required,
                available: self.cells.len(),
            });
        }
        self.extents = extents;
        Ok(())
    }

    /// Resize and reset every logical cell to `value`.
    pub fn resize_filled(&mut self, extents: Extents, value: T) -> Result<(), GridError>
    where
        T: Clone,
    {
        self.resize(extents)?;
        self.fill(value);
        Ok(())
    }

    /// Total capacity of the backing buffer, in cells.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn linear(&self, pt: Indices) -> usize {
        pt.y as usize * self.extents.x as usize + pt.x as usize
    }
}

impl<T> Grid for MappedGrid<'_, T> {
    type Cell = T;

    fn extents(&self) -> Extents {
        self.extents
    }

    fn get(&self, pt: Indices) -> &T {
        debug_assert!(self.within(pt));
        &self.cells[self.linear(pt)]
    }
}

impl<T> GridMut for MappedGrid<'_, T> {
    fn get_mut(&mut self, pt: Indices) -> &mut T {
        debug_assert!(self.within(pt));
        let i = self.linear(pt);
        &mut self.cells[i]
    }
}

impl<T> Index<Indices> for MappedGrid<'_, T> {
    type Output = T;

    fn index(&self, pt: Indices) -> &T {
        match self.try_get(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<Indices> for MappedGrid<'_, T> {
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
    use crate::{FixedGrid, GridMut};
    use planar_core::Bounds;

    fn pt(x: i32, y: i32) -> Indices {
        Indices::new(x, y)
    }

    #[test]
    fn maps_existing_contents() {
        let mut segment = [1i32; 200];
        let mut grid = MappedGrid::new(Extents::new(20, 10), &mut segment).unwrap();

        grid.view_mut(Bounds::sized::<2, 2>(pt(1, 1)))
            .unwrap()
            .assign_from(&FixedGrid::<i32, 2, 2>::filled(5))
            .unwrap();

        assert_eq!(grid[pt(0, 0)], 1);
        assert_eq!(grid[pt(1, 1)], 5);
        assert_eq!(grid[pt(2, 2)], 5);
        assert_eq!(grid[pt(3, 3)], 1);
    }

    #[test]
    fn writes_land_in_the_backing_buffer() {
        let mut segment = [0i32; 6];
        {
            let mut grid = MappedGrid::new(Extents::new(3, 2), &mut segment).unwrap();
            *grid.get_mut(pt(1, 1)) = 9;
        }
        // Row-major: (1, 1) is linear index 4.
        assert_eq!(segment, [0, 0, 0, 0, 9, 0]);
    }

    #[test]
    fn undersized_buffer_is_rejected() {
        let mut segment = [0i32; 100];
        let err = MappedGrid::new(Extents::new(20, 10), &mut segment).unwrap_err();
        assert_eq!(
            err,
            GridError::InsufficientCapacity {
                required: 200,
                available: 100,
            }
        );
    }

    #[test]
    fn resize_checks_capacity() {
        let mut segment = [7i32; 100];
        let mut grid = MappedGrid::new(Extents::new(10, 10), &mut segment).unwrap();

        assert!(grid.resize(Extents::new(20, 10)).is_err());
        // Failed resize leaves the mapping unchanged.
        assert_eq!(grid.extents(), Extents::new(10, 10));

        grid.resize(Extents::new(5, 5)).unwrap();
        assert_eq!(grid.extents(), Extents::new(5, 5));
        assert_eq!(grid.capacity(), 100);
    }

    #[test]
    fn resize_filled_resets_logical_cells_only() {
        let mut segment = [7i32; 100];
        {
            let mut grid = MappedGrid::new(Extents::new(10, 10), &mut segment).unwrap();
            grid.resize_filled(Extents::new(2, 2), 0).unwrap();
        }
        // The four logical cells (linear 0..4 under the new layout) are
        // cleared, the rest untouched.
        assert_eq!(&segment[..6], &[0, 0, 0, 0, 7, 7]);
    }

    #[test]
    fn contract_compliance() {
        let mut segment = [0i32; 64];
        let grid = MappedGrid::new(Extents::new(7, 5), &mut segment).unwrap();
        compliance::run_grid_compliance(grid);
    }
}
