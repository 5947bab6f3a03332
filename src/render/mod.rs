//! Rendering of output maps back into colored tile views

/// Symbol display colors
pub mod colors;
/// Map loading and tile rendering
pub mod viewer;

pub use colors::SymbolColors;
pub use viewer::{MapViewer, SurfaceSize, ViewOutcome, render_map};
