//! Terminal presentation layer: framebuffer, renderer, and the water view.

pub mod fb;
pub mod renderer;
pub mod water_view;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::TerminalRenderer;
pub use water_view::{Viewport, WaterView};
