//! Rendering of output maps as colored tile images

use crate::io::artifact::read_map;
use crate::io::configuration::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::io::image::export_png;
use crate::render::colors::{BACKGROUND_COLOR, SymbolColors};
use crate::spatial::OutputMap;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    /// Validate and create a surface size
    ///
    /// # Errors
    ///
    /// Returns an error if either side is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be at least 1"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be at least 1"));
        }
        Ok(Self { width, height })
    }

    /// Width in pixels
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(self) -> u32 {
        self.height
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

// Cell `index` of `count` spans [start, end) on a side of `length` pixels
fn cell_span(index: usize, count: usize, length: u32) -> (u32, u32) {
    let tile = f64::from(length) / count as f64;
    let start = (index as f64 * tile).round() as u32;
    let end = ((index + 1) as f64 * tile).round() as u32;
    (start.min(length), end.min(length))
}

/// Draw `map` onto a surface, one filled rectangle per symbol
///
/// Tile sizes are fractional so the grid always spans the whole surface. An
/// empty map leaves the background untouched.
pub fn render_map(map: &OutputMap, surface: SurfaceSize, colors: &SymbolColors) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(surface.width(), surface.height(), Rgba(BACKGROUND_COLOR));
    if map.is_empty() {
        return img;
    }

    for ((row, col), &symbol) in map.cells().indexed_iter() {
        let (x0, x1) = cell_span(col, map.cols(), surface.width());
        let (y0, y1) = cell_span(row, map.rows(), surface.height());
        let color = Rgba(colors.lookup(symbol));
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, color);
            }
        }
    }

    img
}

/// Result of a view request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    /// The map was rendered and saved
    Rendered {
        /// Artifact that was read
        map_path: PathBuf,
        /// Image that was written
        image_path: PathBuf,
        /// Rows in the map
        rows: usize,
        /// Columns in the map
        cols: usize,
    },
    /// No artifact exists yet; maps need to be regenerated
    NotFound {
        /// Location that was checked
        map_path: PathBuf,
    },
}

/// Loads named artifacts from the output folder and renders them
pub struct MapViewer {
    output_dir: PathBuf,
    surface: SurfaceSize,
    colors: SymbolColors,
}

impl MapViewer {
    /// Create a viewer over `output_dir`
    pub const fn new(output_dir: PathBuf, surface: SurfaceSize, colors: SymbolColors) -> Self {
        Self {
            output_dir,
            surface,
            colors,
        }
    }

    /// Location of the artifact called `name`
    pub fn map_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    /// Default image location for the artifact called `name`
    pub fn default_image_path(&self, name: &str) -> PathBuf {
        self.map_path(name).with_extension("png")
    }

    /// Load the artifact called `name` and render it
    ///
    /// A missing artifact is reported as [`ViewOutcome::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact is unreadable or malformed, or the
    /// rendered image cannot be saved
    pub fn view(&self, name: &str, image_path: &Path) -> Result<ViewOutcome> {
        let map_path = self.map_path(name);
        let map = match read_map(&map_path) {
            Ok(map) => map,
            Err(MapError::MapNotFound { path }) => {
                return Ok(ViewOutcome::NotFound { map_path: path });
            }
            Err(e) => return Err(e),
        };

        let img = render_map(&map, self.surface, &self.colors);
        export_png(&img, image_path)?;

        Ok(ViewOutcome::Rendered {
            map_path,
            image_path: image_path.to_path_buf(),
            rows: map.rows(),
            cols: map.cols(),
        })
    }
}
