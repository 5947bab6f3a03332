//! Conversion of raster map images into fixed-grid terrain character maps
//!
//! Each cell of the output grid is classified by sampling a small pixel
//! neighborhood around the cell's center, matching every sample to the nearest
//! palette color within a tolerance, and taking a majority vote. Generated maps
//! are stored as plain text and can be rendered back into colored tile images.

#![forbid(unsafe_code)]

/// Color classification and neighborhood voting
pub mod classify;
/// Image-to-map extraction and batch regeneration
pub mod extract;
/// Input/output operations, configuration and error handling
pub mod io;
/// Colored tile rendering of output maps
pub mod render;
/// Grid geometry, output maps and pixel sources
pub mod spatial;

pub use io::error::{MapError, Result};
