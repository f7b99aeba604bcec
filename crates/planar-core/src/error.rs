//! Error types for grid construction and access.

use crate::{Bounds, Extents, Indices};
use std::fmt;

/// Errors arising from grid construction, resizing, views, or checked access.
///
/// Validation happens once, at construction / resize / view-creation
/// boundaries and in the checked access entry points; the unchecked access
/// paths stay branch-free in release builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A region was specified with a negative extent on some axis.
    NegativeExtents {
        /// The offending extents.
        extents: Extents,
    },
    /// Whole-grid assignment or arithmetic between grids of different sizes.
    ExtentsMismatch {
        /// Extents of the destination grid.
        left: Extents,
        /// Extents of the source grid.
        right: Extents,
    },
    /// Tile extents that are zero or do not evenly divide the grid extents.
    TileMisaligned {
        /// Extents of the full grid.
        grid: Extents,
        /// The rejected tile extents.
        tile: Extents,
    },
    /// A point falls outside the addressed grid.
    OutOfBounds {
        /// The offending point, in the grid's local coordinates.
        point: Indices,
        /// Extents of the addressed grid.
        extents: Extents,
    },
    /// A view's bounds fall outside the parent grid.
    BoundsOutOfRange {
        /// The rejected view bounds, relative to the parent.
        bounds: Bounds,
        /// Extents of the parent grid.
        extents: Extents,
    },
    /// Externally supplied memory is smaller than the extents mapped onto it.
    InsufficientCapacity {
        /// Cells required by the requested extents.
        required: usize,
        /// Cells available in the supplied buffer.
        available: usize,
    },
    /// The backing allocator could not satisfy a storage request.
    AllocationFailed {
        /// Number of cells requested.
        cells: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeExtents { extents } => {
                write!(f, "negative extents ({extents})")
            }
            Self::ExtentsMismatch { left, right } => {
                write!(f, "extents mismatch: ({left}) vs ({right})")
            }
            Self::TileMisaligned { grid, tile } => {
                write!(
                    f,
                    "tile extents ({tile}) do not evenly divide grid extents ({grid})"
                )
            }
            Self::OutOfBounds { point, extents } => {
                write!(f, "point ({point}) outside extents ({extents})")
            }
            Self::BoundsOutOfRange { bounds, extents } => {
                write!(f, "view bounds {bounds} exceed parent extents ({extents})")
            }
            Self::InsufficientCapacity {
                required,
                available,
            } => {
                write!(
                    f,
                    "mapped buffer holds {available} cells, {required} required"
                )
            }
            Self::AllocationFailed { cells } => {
                write!(f, "allocation of {cells} cells failed")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = GridError::OutOfBounds {
            point: Indices::new(21, 11),
            extents: Extents::new(20, 10),
        };
        assert_eq!(err.to_string(), "point (21, 11) outside extents (20, 10)");

        let err = GridError::InsufficientCapacity {
            required: 200,
            available: 100,
        };
        assert_eq!(err.to_string(), "mapped buffer holds 100 cells, 200 required");
    }
}
