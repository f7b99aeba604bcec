//! Row-wrapped textual dumps of any grid.

use crate::grid::Grid;
use crate::traverse::Traversal;
use std::fmt;

/// Adapter implementing [`fmt::Display`] for any grid whose cells are
/// displayable.
///
/// Cells are written in row-major order, right-aligned in a fixed-width
/// column, with a newline after every `extents().x` cells. The column
/// width defaults to 4 and honors an explicit formatter width:
///
/// ```
/// use planar_core::Extents;
/// use planar_grid::{DenseGrid, Grid};
///
/// let grid = DenseGrid::filled(Extents::new(3, 2), 7).unwrap();
/// assert_eq!(grid.display().to_string(), "   7   7   7\n   7   7   7\n");
/// assert_eq!(format!("{:2}", grid.display()), " 7 7 7\n 7 7 7\n");
/// ```
pub struct GridDisplay<'a, G: Grid> {
    grid: &'a G,
}

impl<'a, G: Grid> GridDisplay<'a, G> {
    pub(crate) fn new(grid: &'a G) -> Self {
        Self { grid }
    }
}

impl<G> fmt::Display for GridDisplay<'_, G>
where
    G: Grid,
    G::Cell: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(4);
        let wrap = self.grid.extents().x;
        let mut column = 0;
        for cell in self.grid.cells(Traversal::RowMajor) {
            // Render first so the padding applies to cell types whose own
            // Display ignores formatter width.
            let rendered = cell.to_string();
            write!(f, "{rendered:>width$}")?;
            column += 1;
            if column == wrap {
                writeln!(f)?;
                column = 0;
            }
        }
        Ok(())
    }
}
