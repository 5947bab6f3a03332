//! Output grid dimensions and the mapping from grid cells to source pixels

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Shape of an output map as `(rows, cols)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    rows: usize,
    cols: usize,
}

impl GridDimensions {
    /// Validate and create grid dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds [`MAX_GRID_DIMENSION`]
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::check("rows", rows)?;
        Self::check("cols", cols)?;
        Ok(Self { rows, cols })
    }

    fn check(parameter: &'static str, value: usize) -> Result<()> {
        if value == 0 {
            return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
        }
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(())
    }

    /// Number of rows
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(self) -> usize {
        self.cols
    }
}

/// Tile sizes of a source image split into a grid
///
/// Tile sizes are fractional; centers are truncated to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    tile_w: f64,
    tile_h: f64,
}

impl TileGeometry {
    /// Split an image of `width` × `height` pixels into `dimensions`
    pub fn new(width: u32, height: u32, dimensions: GridDimensions) -> Self {
        Self {
            tile_w: f64::from(width) / dimensions.cols() as f64,
            tile_h: f64::from(height) / dimensions.rows() as f64,
        }
    }

    /// Tile width in pixels
    pub const fn tile_width(&self) -> f64 {
        self.tile_w
    }

    /// Tile height in pixels
    pub const fn tile_height(&self) -> f64 {
        self.tile_h
    }

    /// Source pixel at the center of cell `(row, col)` as `[x, y]`
    // Separate multiply and add keep truncation identical to unfused arithmetic
    #[allow(clippy::suboptimal_flops)]
    pub fn center(&self, row: usize, col: usize) -> [i64; 2] {
        let x = col as f64 * self.tile_w + self.tile_w / 2.0;
        let y = row as f64 * self.tile_h + self.tile_h / 2.0;
        [x as i64, y as i64]
    }
}
