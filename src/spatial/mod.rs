//! Spatial data structures for maps and source images
//!
//! This module contains spatial-related functionality including:
//! - Grid dimensions and tile geometry
//! - Output maps of terrain symbols
//! - Pixel sources over decoded and in-memory images

/// Grid dimensions and tile center computation
pub mod geometry;
/// Output map grid and its text form
pub mod grid;
/// Pixel source implementations
pub mod raster;

pub use geometry::{GridDimensions, TileGeometry};
pub use grid::OutputMap;
pub use raster::PixelGrid;
