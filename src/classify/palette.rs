//! Terrain palettes and nearest-color classification
//!
//! A palette is an ordered table of reference colors. Classification walks the
//! table in insertion order and keeps the first strictly smaller distance, so
//! equidistant entries resolve to whichever was declared first.

use crate::classify::color::RgbSample;
use crate::io::configuration::UNKNOWN_SYMBOL;
use crate::io::error::{Result, invalid_parameter};
use serde::Deserialize;

/// A reference color and the symbol it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Reference color
    pub color: RgbSample,
    /// Symbol emitted when a sample matches this color
    pub symbol: char,
}

impl PaletteEntry {
    /// Create an entry from raw channels
    pub const fn new(rgb: [u8; 3], symbol: char) -> Self {
        let [r, g, b] = rgb;
        Self {
            color: RgbSample::new(r, g, b),
            symbol,
        }
    }
}

const TERRAIN_ENTRIES: [PaletteEntry; 6] = [
    PaletteEntry::new([34, 177, 76], 'G'),   // dark grass
    PaletteEntry::new([127, 211, 118], 'g'), // light grass
    PaletteEntry::new([99, 155, 255], 'A'),  // water
    PaletteEntry::new([185, 122, 87], 'M'),  // mountain
    PaletteEntry::new([234, 210, 163], 'S'), // sand
    PaletteEntry::new([0, 100, 0], 'F'),     // forest
];

const DUNGEON_ENTRIES: [PaletteEntry; 2] = [
    PaletteEntry::new([230, 230, 230], 'C'), // floor
    PaletteEntry::new([177, 177, 177], '#'), // wall
];

/// Built-in palettes selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Overworld terrain: grass, water, mountain, sand, forest
    Terrain,
    /// Dungeon interiors: floor and wall
    Dungeon,
}

impl PaletteKind {
    /// Build the palette this kind refers to
    pub fn palette(self) -> Palette {
        match self {
            Self::Terrain => Palette::terrain(),
            Self::Dungeon => Palette::dungeon(),
        }
    }

    /// Lowercase name as used in manifests
    pub const fn name(self) -> &'static str {
        match self {
            Self::Terrain => "terrain",
            Self::Dungeon => "dungeon",
        }
    }
}

/// Ordered mapping from reference colors to terrain symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Build a palette, preserving the given order for tie-breaking
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two entries share the same reference color
    /// - An entry uses the reserved unknown symbol
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.symbol == UNKNOWN_SYMBOL {
                return Err(invalid_parameter(
                    "palette",
                    &entry.symbol,
                    &"the unknown symbol is reserved",
                ));
            }
            let duplicated = entries
                .get(..index)
                .is_some_and(|earlier| earlier.iter().any(|e| e.color == entry.color));
            if duplicated {
                return Err(invalid_parameter(
                    "palette",
                    &format!("{:?}", entry.color.channels()),
                    &"reference colors must be unique",
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Overworld terrain palette with two grass shades
    pub fn terrain() -> Self {
        Self {
            entries: TERRAIN_ENTRIES.to_vec(),
        }
    }

    /// Dungeon palette with floor and wall
    pub fn dungeon() -> Self {
        Self {
            entries: DUNGEON_ENTRIES.to_vec(),
        }
    }

    /// Entries in classification order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Whether `symbol` is one of this palette's values
    pub fn contains_symbol(&self, symbol: char) -> bool {
        self.entries.iter().any(|e| e.symbol == symbol)
    }

    /// Classify a sample against the palette
    ///
    /// Returns the symbol of the nearest reference color when its distance is
    /// within `tolerance` (inclusive), otherwise [`UNKNOWN_SYMBOL`].
    pub fn classify(&self, sample: RgbSample, tolerance: Tolerance) -> char {
        let mut min_distance = f64::INFINITY;
        let mut closest = UNKNOWN_SYMBOL;

        for entry in &self.entries {
            let distance = sample.distance(entry.color);
            if distance < min_distance {
                min_distance = distance;
                closest = entry.symbol;
            }
        }

        if min_distance <= tolerance.value() {
            closest
        } else {
            UNKNOWN_SYMBOL
        }
    }
}

/// Maximum RGB distance accepted as a match
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Validate and wrap a tolerance
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, NaN or infinite
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(invalid_parameter(
                "tolerance",
                &value,
                &"must be a finite, non-negative distance",
            ))
        }
    }

    /// Raw distance value
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(crate::io::configuration::DEFAULT_TOLERANCE)
    }
}
