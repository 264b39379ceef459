//! Water generators - fixed cells periodically stamped to full volume
//!
//! Generators model external inflow: stamping overwrites whatever the cell
//! held. How often to stamp is the driver loop's decision, not the
//! injector's.

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::types::CELL_CAPACITY;

/// Maximum number of generator cells
pub const MAX_SOURCES: usize = 8;

/// A fixed set of generator positions
#[derive(Debug, Clone)]
pub struct SourceInjector {
    cells: ArrayVec<(usize, usize), MAX_SOURCES>,
}

impl SourceInjector {
    /// Create an injector from explicit positions (extras beyond
    /// [`MAX_SOURCES`] are dropped)
    pub fn new(positions: &[(usize, usize)]) -> Self {
        let mut cells = ArrayVec::new();
        for &pos in positions.iter().take(MAX_SOURCES) {
            cells.push(pos);
        }
        Self { cells }
    }

    /// The reference layout: three adjacent generators centered on (x, y)
    pub fn centered_row(x: usize, y: usize) -> Self {
        let mut cells = ArrayVec::new();
        cells.push((x, y));
        cells.push((x + 1, y));
        if x > 0 {
            cells.push((x - 1, y));
        }
        Self { cells }
    }

    /// The configured generator positions
    pub fn positions(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Stamp every generator cell to full volume.
    ///
    /// Positions outside the grid are skipped by the bounds check in
    /// [`Grid::set_volume`].
    pub fn stamp(&self, grid: &mut Grid) {
        for &(x, y) in &self.cells {
            grid.set_volume(x, y, CELL_CAPACITY);
        }
    }
}
