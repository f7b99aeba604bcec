//! Inline fixed-capacity storage with compile-time extents.

use crate::grid::{Grid, GridMut};
use planar_core::{Extents, Indices};
use std::array;
use std::ops::{Index, IndexMut};

/// A grid backed by an inline `[[T; W]; H]` array; no heap allocation.
///
/// Extents are compile-time constants, so mismatched fixed extents are type
/// errors rather than runtime failures, and construction cannot fail.
///
/// # Examples
///
/// ```
/// use planar_core::{Extents, Indices};
/// use planar_grid::{FixedGrid, Grid};
///
/// let grid = FixedGrid::<i32, 20, 10>::filled(1);
/// assert_eq!(grid.extents(), Extents::new(20, 10));
/// assert_eq!(grid[Indices::new(4, 4)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedGrid<T, const W: usize, const H: usize> {
    rows: [[T; W]; H],
}

impl<T, const W: usize, const H: usize> FixedGrid<T, W, H> {
    /// The compile-time extents, width `W` by height `H`.
    pub const EXTENTS: Extents = Extents::new(W as i32, H as i32);

    /// A grid of default-valued cells.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self {
            rows: array::from_fn(|_| array::from_fn(|_| T::default())),
        }
    }

    /// A grid with every cell set to `value`.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows: array::from_fn(|_| array::from_fn(|_| value.clone())),
        }
    }

    /// Adopt an existing row array (`rows[y][x]` layout).
    pub fn from_rows(rows: [[T; W]; H]) -> Self {
        Self { rows }
    }
}

impl<T: Default, const W: usize, const H: usize> Default for FixedGrid<T, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize, const H: usize> Grid for FixedGrid<T, W, H> {
    type Cell = T;

    fn extents(&self) -> Extents {
        Self::EXTENTS
    }

    fn get(&self, pt: Indices) -> &T {
        debug_assert!(self.within(pt));
        &self.rows[pt.y as usize][pt.x as usize]
    }
}

impl<T, const W: usize, const H: usize> GridMut for FixedGrid<T, W, H> {
    fn get_mut(&mut self, pt: Indices) -> &mut T {
        debug_assert!(self.within(pt));
        &mut self.rows[pt.y as usize][pt.x as usize]
    }
}

impl<T, const W: usize, const H: usize> Index<Indices> for FixedGrid<T, W, H> {
    type Output = T;

    fn index(&self, pt: Indices) -> &T {
        match self.try_get(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const W: usize, const H: usize> IndexMut<Indices> for FixedGrid<T, W, H> {
    fn index_mut(&mut self, pt: Indices) -> &mut T {
        match self.try_get_mut(pt) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}
