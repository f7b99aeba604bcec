//! Traversal orders and the coordinate iterator they drive.

use planar_core::{Extents, Indices};
use std::iter::FusedIterator;

/// Order in which a grid's index space is walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// `x` varies fastest: `(0,0), (1,0), ..., (0,1), ...`
    ///
    /// Matches the linear buffer layout `y * extents.x + x`, so this is the
    /// cache-friendly order for dense storage and the default everywhere.
    #[default]
    RowMajor,
    /// `y` varies fastest: `(0,0), (0,1), ..., (1,0), ...`
    ColMajor,
}

/// Iterator over every point of a rectangular index space.
///
/// Yields each `Indices` in `[0, extents)` exactly once, in the requested
/// [`Traversal`] order.
///
/// # Examples
///
/// ```
/// use planar_core::{Extents, Indices};
/// use planar_grid::{Points, Traversal};
///
/// let pts: Vec<_> = Points::new(Extents::new(2, 2), Traversal::RowMajor).collect();
/// assert_eq!(pts, vec![
///     Indices::new(0, 0),
///     Indices::new(1, 0),
///     Indices::new(0, 1),
///     Indices::new(1, 1),
/// ]);
/// ```
#[derive(Clone, Debug)]
pub struct Points {
    extents: Extents,
    order: Traversal,
    next: Indices,
    remaining: usize,
}

impl Points {
    /// Iterate the index space of `extents` in the given order.
    ///
    /// Non-positive extents yield an empty iterator.
    pub fn new(extents: Extents, order: Traversal) -> Self {
        let remaining = if extents.all_gt(Extents::ZERO) {
            extents.area() as usize
        } else {
            0
        };
        Self {
            extents,
            order,
            next: Indices::ZERO,
            remaining,
        }
    }
}

impl Iterator for Points {
    type Item = Indices;

    fn next(&mut self) -> Option<Indices> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        match self.order {
            Traversal::RowMajor => {
                self.next.x += 1;
                if self.next.x == self.extents.x {
                    self.next.x = 0;
                    self.next.y += 1;
                }
            }
            Traversal::ColMajor => {
                self.next.y += 1;
                if self.next.y == self.extents.y {
                    self.next.y = 0;
                    self.next.x += 1;
                }
            }
        }
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Points {}
impl FusedIterator for Points {}
