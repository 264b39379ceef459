//! WaterView: maps the water grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each grid cell becomes one terminal cell. A cell with no water above it
//! fills from the bottom using the lower-block glyph ramp; a cell inside a
//! connected column draws its *air* share as a lower block with inverted
//! colors, which reads as water filling from the top.

use crate::core::Grid;
use crate::term::fb::{FrameBuffer, Glyph, Rgb, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Lower-block glyphs from one-eighth filled to full.
const FILL_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const WATER: Rgb = Rgb::new(60, 130, 240);
const BASIN: Rgb = Rgb::new(25, 25, 35);

/// A lightweight terminal view for the water grid.
#[derive(Debug, Default)]
pub struct WaterView;

impl WaterView {
    /// Render the current grid state into a framebuffer.
    pub fn render(&self, grid: &Grid, tick: u64, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let grid_w = grid.width() as u16;
        let grid_h = grid.height() as u16;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // Basin background, then the border around it.
        let basin = Style::new(Rgb::new(70, 70, 85), BASIN);
        fb.fill_rect(start_x + 1, start_y + 1, grid_w, grid_h, ' ', basin);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        let water = Style::new(WATER, BASIN);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let volume = grid.volume(x, y).unwrap_or(0.0);
                if volume <= 0.0 {
                    continue;
                }
                let glyph = if grid.has_water_above(x, y) {
                    Glyph::new(column_fill_glyph(volume), water.inverted())
                } else {
                    Glyph::new(bottom_fill_glyph(volume), water)
                };
                fb.set(start_x + 1 + x as u16, start_y + 1 + y as u16, glyph);
            }
        }

        self.draw_status(&mut fb, grid, tick, start_x, start_y + frame_h);

        if paused {
            let label = " PAUSED ";
            let lx = start_x + frame_w.saturating_sub(label.len() as u16) / 2;
            let ly = start_y + frame_h / 2;
            let style = Style::new(Rgb::new(240, 240, 240), Rgb::new(90, 40, 40));
            fb.put_str(lx, ly, label, style);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, grid: &Grid, tick: u64, x: u16, y: u16) {
        let style = Style::new(Rgb::new(140, 140, 150), Rgb::new(0, 0, 0));
        let line = format!(
            "tick {tick}   water {:.1}   [space] pause  [r] reset  [q] quit",
            grid.total_volume(),
        );
        fb.put_str(x, y, &line, style);
    }
}

/// Glyph for a cell filling from the bottom.
fn bottom_fill_glyph(volume: f32) -> char {
    let level = (volume * 8.0).ceil() as usize;
    FILL_LEVELS[level.clamp(1, 8) - 1]
}

/// Glyph for a cell inside a connected column.
///
/// The air share above the water is drawn as a lower block; combined with an
/// inverted style the cell reads as filled from the top.
fn column_fill_glyph(volume: f32) -> char {
    let air = ((1.0 - volume) * 8.0).floor() as usize;
    if air == 0 {
        ' '
    } else {
        FILL_LEVELS[air.min(8) - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_fill_glyph_levels() {
        assert_eq!(bottom_fill_glyph(0.01), '▁');
        assert_eq!(bottom_fill_glyph(0.13), '▂');
        assert_eq!(bottom_fill_glyph(0.5), '▄');
        assert_eq!(bottom_fill_glyph(1.0), '█');
        // Out-of-range volumes clamp instead of indexing out of bounds
        assert_eq!(bottom_fill_glyph(1.5), '█');
    }

    #[test]
    fn test_column_fill_glyph_levels() {
        // A full cell inside a column is solid water: blank over inverted bg
        assert_eq!(column_fill_glyph(1.0), ' ');
        assert_eq!(column_fill_glyph(0.5), '▄');
        // Nearly full rounds down to solid
        assert_eq!(column_fill_glyph(0.95), ' ');
        assert_eq!(column_fill_glyph(0.1), '▇');
    }

    #[test]
    fn test_render_places_water_glyph() {
        let mut grid = Grid::new(4, 3);
        grid.set_volume(1, 2, 0.5);

        let fb = WaterView::default().render(&grid, 0, false, Viewport::new(20, 10));

        // frame is 6x5, centered: start at (7, 2); cell (1, 2) lands at
        // (7 + 1 + 1, 2 + 1 + 2)
        let glyph = fb.get(9, 5).unwrap();
        assert_eq!(glyph.ch, '▄');
        assert_eq!(glyph.style.fg, WATER);
    }

    #[test]
    fn test_connected_column_renders_inverted() {
        let mut grid = Grid::new(4, 3);
        grid.set_volume(1, 1, 1.0);
        grid.set_volume(1, 2, 1.0);

        let fb = WaterView::default().render(&grid, 0, false, Viewport::new(20, 10));

        // Top of the column fills from the bottom as usual
        assert_eq!(fb.get(9, 4).unwrap().ch, '█');
        // The cell under it has water above: inverted, water as background
        let lower = fb.get(9, 5).unwrap();
        assert_eq!(lower.ch, ' ');
        assert_eq!(lower.style.bg, WATER);
    }

    #[test]
    fn test_render_draws_border_and_status() {
        let grid = Grid::new(4, 3);
        let fb = WaterView::default().render(&grid, 7, false, Viewport::new(20, 10));

        assert_eq!(fb.get(7, 2).unwrap().ch, '┌');
        assert_eq!(fb.get(12, 2).unwrap().ch, '┐');
        assert_eq!(fb.get(7, 6).unwrap().ch, '└');
        assert_eq!(fb.get(12, 6).unwrap().ch, '┘');

        let status: String = (7..20).filter_map(|x| fb.get(x, 7)).map(|g| g.ch).collect();
        assert!(status.starts_with("tick 7"));
    }

    #[test]
    fn test_paused_overlay() {
        let grid = Grid::new(12, 3);
        let fb = WaterView::default().render(&grid, 0, true, Viewport::new(30, 10));

        // frame is 14x5 starting at (8, 2); overlay is centered on row 4
        let row: String = (0..30).filter_map(|x| fb.get(x, 4)).map(|g| g.ch).collect();
        assert!(row.contains("PAUSED"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let mut grid = Grid::new(8, 6);
        grid.set_volume(3, 3, 1.0);
        let fb = WaterView::default().render(&grid, 1, false, Viewport::new(4, 2));
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 2);
    }
}
