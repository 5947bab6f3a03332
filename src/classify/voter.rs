//! Neighborhood voting for the dominant symbol of one output tile
//!
//! Each tile is classified from a small square window of pixels centered on the
//! tile's center. Every in-bounds pixel is classified on its own; unknown
//! results are dropped and the most frequent remaining symbol wins. Ties go to
//! the symbol seen first while scanning the window row by row.

use crate::classify::color::RgbSample;
use crate::classify::palette::{Palette, Tolerance};
use crate::io::configuration::{DEFAULT_SAMPLE_SIZE, UNKNOWN_SYMBOL};
use crate::io::error::{Result, invalid_parameter};

/// Outcome of reading one pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelRead {
    /// The coordinate lies inside the image
    Color(RgbSample),
    /// The coordinate lies outside the image
    OutOfBounds,
}

/// Read-only access to a decoded source image
pub trait PixelSource {
    /// Image size as `(width, height)` in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Read the pixel at `(x, y)`, reporting coordinates outside the image
    fn read(&self, x: i64, y: i64) -> PixelRead;
}

/// Square sampling window with an odd side length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    size: usize,
}

impl SampleWindow {
    /// Create a window of `size` × `size` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or even
    pub fn new(size: usize) -> Result<Self> {
        if size % 2 == 1 {
            Ok(Self { size })
        } else {
            Err(invalid_parameter(
                "sample_size",
                &size,
                &"must be an odd number of pixels",
            ))
        }
    }

    /// Side length in pixels
    pub const fn size(self) -> usize {
        self.size
    }

    /// Distance from the center to the window edge
    pub const fn half(self) -> i64 {
        (self.size / 2) as i64
    }

    /// Window offsets in scan order: `dy` outer, `dx` inner
    pub fn offsets(self) -> impl Iterator<Item = (i64, i64)> {
        let half = self.half();
        (-half..=half).flat_map(move |dy| (-half..=half).map(move |dx| (dx, dy)))
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self {
            size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

/// How a tile's symbol is derived from the source pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Majority vote over a window around the tile center
    Vote(SampleWindow),
    /// Classify the center pixel only (legacy fast path)
    CenterPixel,
}

impl Default for SamplingMode {
    fn default() -> Self {
        Self::Vote(SampleWindow::default())
    }
}

/// Pick the most frequent known symbol
///
/// Unknown symbols are ignored. Ties resolve to the symbol that appears first in
/// `symbols`. Returns [`UNKNOWN_SYMBOL`] when no known symbol is present.
pub fn majority_vote(symbols: impl IntoIterator<Item = char>) -> char {
    // (symbol, votes) in first-seen order
    let mut tallies: Vec<(char, usize)> = Vec::new();

    for symbol in symbols {
        if symbol == UNKNOWN_SYMBOL {
            continue;
        }
        match tallies.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, votes)) => *votes += 1,
            None => tallies.push((symbol, 1)),
        }
    }

    let mut winner = UNKNOWN_SYMBOL;
    let mut best = 0;
    for (symbol, votes) in tallies {
        if votes > best {
            best = votes;
            winner = symbol;
        }
    }
    winner
}

/// Classifies tiles of a source image against one palette
#[derive(Debug, Clone, Copy)]
pub struct TileVoter<'a> {
    palette: &'a Palette,
    tolerance: Tolerance,
    mode: SamplingMode,
}

impl<'a> TileVoter<'a> {
    /// Create a voter for the given palette, tolerance and sampling mode
    pub const fn new(palette: &'a Palette, tolerance: Tolerance, mode: SamplingMode) -> Self {
        Self {
            palette,
            tolerance,
            mode,
        }
    }

    /// Dominant symbol of the tile centered at `center` (`[x, y]`)
    pub fn dominant_symbol<S: PixelSource + ?Sized>(&self, source: &S, center: [i64; 2]) -> char {
        let [x, y] = center;
        match self.mode {
            SamplingMode::CenterPixel => self.classify_at(source, x, y),
            SamplingMode::Vote(window) => majority_vote(
                window
                    .offsets()
                    .map(|(dx, dy)| self.classify_at(source, x + dx, y + dy)),
            ),
        }
    }

    // Out-of-bounds reads count as unknown, which the vote discards
    fn classify_at<S: PixelSource + ?Sized>(&self, source: &S, x: i64, y: i64) -> char {
        match source.read(x, y) {
            PixelRead::Color(sample) => self.palette.classify(sample, self.tolerance),
            PixelRead::OutOfBounds => UNKNOWN_SYMBOL,
        }
    }
}
