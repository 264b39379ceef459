//! Core types and tuning constants shared across the application
//! This module contains pure data types with no external dependencies

/// Reference canvas geometry in pixels
pub const CANVAS_WIDTH: usize = 800;
pub const CANVAS_HEIGHT: usize = 400;

/// Edge length of one grid tile in pixels
pub const TILE_SIZE: usize = 10;

/// Grid dimensions derived from the canvas
pub const GRID_WIDTH: usize = CANVAS_WIDTH / TILE_SIZE;
pub const GRID_HEIGHT: usize = CANVAS_HEIGHT / TILE_SIZE;

/// Simulation pacing: one tick every 50 ms (20 ticks per second)
pub const TICK_MS: u64 = 50;

/// Generator cells are stamped to full volume every Nth tick
pub const INJECT_PERIOD: u64 = 5;

/// Volume ceiling a cell is designed not to exceed
pub const CELL_CAPACITY: f32 = 1.0;

/// Maximum volume one downward transfer moves per tick
pub const DOWN_FLOW_RATE: f32 = 0.5;

/// Lateral spread strength; scales the volume difference between cells
pub const SPREAD_FACTOR: f32 = 0.1;

/// How far sideways a cell distributes in one tick, in cells
pub const SPREAD_REACH: usize = 3;

/// A cell spreads sideways only once the cell below holds more than this
pub const BLOCKED_BELOW_THRESHOLD: f32 = 0.5;

/// Generator placement, 100 px in from the canvas origin
pub const SOURCE_X: usize = 100 / TILE_SIZE;
pub const SOURCE_Y: usize = 100 / TILE_SIZE;

/// Control actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimAction {
    TogglePause,
    Restart,
}
