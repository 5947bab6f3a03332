//! Color classification and per-tile voting
//!
//! This module contains the core of map extraction:
//! - RGB samples and the Euclidean distance between them
//! - Palettes mapping reference colors to terrain symbols
//! - Neighborhood voting for the dominant symbol of a tile

/// RGB samples and color distance
pub mod color;
/// Terrain palettes and nearest-color classification
pub mod palette;
/// Majority voting over a pixel neighborhood
pub mod voter;

pub use color::RgbSample;
pub use palette::{Palette, PaletteEntry, PaletteKind, Tolerance};
pub use voter::{PixelRead, PixelSource, SampleWindow, SamplingMode, TileVoter};
