//! Core module - pure simulation logic with no external dependencies
//!
//! This module contains the water grid, the flow rules, and the generator
//! injector. It has zero dependencies on UI, timing, or I/O.

pub mod flow;
pub mod grid;
pub mod source;

// Re-export commonly used types
pub use grid::Grid;
pub use source::SourceInjector;
