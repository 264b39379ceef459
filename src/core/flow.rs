//! Flow engine - computes the next grid state from the current one
//!
//! Gravity first, then rate-limited lateral spread once the column below is
//! blocked. All volume moves through [`Grid::transfer`], which caps per-tick
//! flow and gives the simulation its settling-over-several-ticks look.

use crate::core::grid::Grid;
use crate::types::{
    BLOCKED_BELOW_THRESHOLD, CELL_CAPACITY, DOWN_FLOW_RATE, SPREAD_FACTOR, SPREAD_REACH,
};

/// Advance the simulation by one tick, returning the next grid state.
///
/// The next state starts as a copy of `current`, and every per-cell update
/// reads *and* writes that one evolving buffer; only the occupancy skip
/// below reads the frozen pre-tick grid. Transfers therefore compound down a
/// column within a single tick. Splitting this into two independent
/// snapshots looks cleaner but changes the cascades - keep the single shared
/// buffer.
pub fn step(current: &Grid) -> Grid {
    let mut next = current.clone();

    // Bottom to top so a cell drains before the cells above it are visited,
    // left to right within a row. The bottom row has no cell below it and is
    // never simulated for outflow.
    for y in (0..current.height().saturating_sub(1)).rev() {
        for x in 0..current.width() {
            // Only process cells that held water before this tick
            if current.volume(x, y).unwrap_or(0.0) > 0.0 {
                update_cell(x, y, &mut next);
            }
        }
    }

    next
}

/// Apply the flow rules to one cell of the shared next buffer.
///
/// The caller guarantees the cell held water pre-tick and has a row below.
fn update_cell(x: usize, y: usize, next: &mut Grid) {
    // Try to flow downwards, as if by gravity
    next.transfer((x, y), (x, y + 1), CELL_CAPACITY, DOWN_FLOW_RATE);

    // If all water flowed down, no need to continue
    if next.volume(x, y) == Some(0.0) {
        return;
    }

    // If water can still flow down, don't try other directions yet
    if can_flow_down(x, y, next) {
        return;
    }

    // Water spreads sideways when blocked below
    spread_horizontally(x, y, next);
}

/// True while the cell below exists and still has room to receive water
fn can_flow_down(x: usize, y: usize, grid: &Grid) -> bool {
    match grid.volume(x, y + 1) {
        Some(below) => below < CELL_CAPACITY,
        None => false,
    }
}

/// Distribute volume sideways into up to [`SPREAD_REACH`] cells per
/// direction.
///
/// Spreading is gated on the cell below being substantially blocked, not
/// merely non-empty; a column that is still draining keeps falling straight.
/// Right runs before left, and the current cell is re-read after every
/// transfer, so nearer cells claim volume first and later offsets see the
/// smaller residual. That ordering (and its slight rightward bias) is part
/// of the simulation's observable behavior.
fn spread_horizontally(x: usize, y: usize, grid: &mut Grid) {
    let below = grid.volume(x, y + 1).unwrap_or(0.0);
    if below <= BLOCKED_BELOW_THRESHOLD {
        return;
    }

    // Cascade right - distribute to multiple cells
    for offset in 1..=SPREAD_REACH {
        if x + offset >= grid.width() {
            break;
        }
        spread_into(grid, x, y, x + offset, offset);
    }

    // Cascade left - distribute to multiple cells
    for offset in 1..=SPREAD_REACH {
        if offset > x {
            break;
        }
        spread_into(grid, x, y, x - offset, offset);
    }
}

/// One lateral transfer from (x, y) into the target column `tx`.
fn spread_into(grid: &mut Grid, x: usize, y: usize, tx: usize, offset: usize) {
    let current = grid.volume(x, y).unwrap_or(0.0);
    let target = grid.volume(tx, y).unwrap_or(0.0);
    if target < current {
        // Farther cells receive proportionally less per tick
        let rate = (current - target) * SPREAD_FACTOR / offset as f32;
        grid.transfer((x, y), (tx, y), CELL_CAPACITY, rate);
    }
}
