//! Conversion of a whole source image into an output map

use crate::classify::palette::{Palette, Tolerance};
use crate::classify::voter::{PixelSource, SamplingMode, TileVoter};
use crate::io::artifact::write_map;
use crate::io::error::Result;
use crate::io::image::load_rgb_image;
use crate::spatial::{GridDimensions, OutputMap, TileGeometry};
use ndarray::Array2;
use std::path::Path;

/// Everything needed to convert one image
#[derive(Debug, Clone)]
pub struct ExtractionSettings {
    /// Output grid shape
    pub dimensions: GridDimensions,
    /// Palette used for classification
    pub palette: Palette,
    /// Maximum accepted color distance
    pub tolerance: Tolerance,
    /// Per-tile sampling strategy
    pub mode: SamplingMode,
}

/// Walks the output grid and classifies every tile
pub struct Extractor {
    settings: ExtractionSettings,
}

impl Extractor {
    /// Create an extractor for the given settings
    pub const fn new(settings: ExtractionSettings) -> Self {
        Self { settings }
    }

    /// Settings this extractor runs with
    pub const fn settings(&self) -> &ExtractionSettings {
        &self.settings
    }

    /// Convert `source` into a map of the configured shape
    pub fn extract<S: PixelSource + ?Sized>(&self, source: &S) -> OutputMap {
        self.extract_with_progress(source, |_| {})
    }

    /// Convert `source`, calling `on_row` with the number of completed rows
    pub fn extract_with_progress<S, F>(&self, source: &S, mut on_row: F) -> OutputMap
    where
        S: PixelSource + ?Sized,
        F: FnMut(usize),
    {
        let dimensions = self.settings.dimensions;
        let (width, height) = source.dimensions();
        let geometry = TileGeometry::new(width, height, dimensions);
        let voter = TileVoter::new(
            &self.settings.palette,
            self.settings.tolerance,
            self.settings.mode,
        );

        let mut cells = Array2::from_elem((dimensions.rows(), dimensions.cols()), ' ');
        for (row, mut cells_row) in cells.rows_mut().into_iter().enumerate() {
            for (col, cell) in cells_row.iter_mut().enumerate() {
                *cell = voter.dominant_symbol(source, geometry.center(row, col));
            }
            on_row(row + 1);
        }

        OutputMap::from_array(cells)
    }
}

/// Decode `image_path`, convert it and write the artifact to `output_path`
///
/// Any previous artifact at `output_path` is replaced.
///
/// # Errors
///
/// Returns an error if:
/// - The image is missing or cannot be decoded
/// - The artifact cannot be written
pub fn extract_image_file<F: FnMut(usize)>(
    image_path: &Path,
    output_path: &Path,
    settings: ExtractionSettings,
    on_row: F,
) -> Result<OutputMap> {
    let image = load_rgb_image(image_path)?;
    let map = Extractor::new(settings).extract_with_progress(&image, on_row);
    write_map(&map, output_path)?;
    Ok(map)
}
