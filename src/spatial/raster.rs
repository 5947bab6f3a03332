//! Pixel sources backed by decoded images and in-memory grids

use crate::classify::color::RgbSample;
use crate::classify::voter::{PixelRead, PixelSource};
use image::RgbImage;
use ndarray::Array2;

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn read(&self, x: i64, y: i64) -> PixelRead {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => self
                .get_pixel_checked(x, y)
                .map_or(PixelRead::OutOfBounds, |pixel| {
                    PixelRead::Color(RgbSample::from(*pixel))
                }),
            _ => PixelRead::OutOfBounds,
        }
    }
}

/// In-memory pixel grid indexed by `(y, x)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<RgbSample>,
}

impl PixelGrid {
    /// Wrap an array of samples (indexed by `y`, `x`)
    pub const fn new(pixels: Array2<RgbSample>) -> Self {
        Self { pixels }
    }

    /// A `width` × `height` grid filled with one color
    pub fn filled(width: usize, height: usize, color: RgbSample) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), color),
        }
    }

    /// Overwrite the pixel at `(x, y)`; ignored outside the grid
    pub fn set(&mut self, x: usize, y: usize, color: RgbSample) {
        if let Some(pixel) = self.pixels.get_mut([y, x]) {
            *pixel = color;
        }
    }

    /// Underlying sample array
    pub const fn pixels(&self) -> &Array2<RgbSample> {
        &self.pixels
    }
}

impl PixelSource for PixelGrid {
    fn dimensions(&self) -> (u32, u32) {
        let (height, width) = self.pixels.dim();
        (width as u32, height as u32)
    }

    fn read(&self, x: i64, y: i64) -> PixelRead {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self
                .pixels
                .get([y, x])
                .map_or(PixelRead::OutOfBounds, |&sample| PixelRead::Color(sample)),
            _ => PixelRead::OutOfBounds,
        }
    }
}
