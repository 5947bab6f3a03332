//! Map job manifests describing what a regeneration run produces
//!
//! A manifest is a TOML file with one `[[maps]]` table per job:
//!
//! ```toml
//! [[maps]]
//! image = "mapa_hyrule.png"
//! rows = 42
//! cols = 42
//! palette = "terrain"
//! tolerance = 75.0
//! output = "hyrule.txt"
//! ```
//!
//! `tolerance` is optional and defaults to [`DEFAULT_TOLERANCE`].

use crate::classify::palette::{PaletteKind, Tolerance};
use crate::io::configuration::DEFAULT_TOLERANCE;
use crate::io::error::{MapError, Result, file_system, invalid_parameter};
use crate::spatial::GridDimensions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    maps: Vec<RawMapJob>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMapJob {
    image: PathBuf,
    rows: usize,
    cols: usize,
    palette: PaletteKind,
    tolerance: Option<f64>,
    output: PathBuf,
}

/// One image to convert and where to store the result
#[derive(Debug, Clone, PartialEq)]
pub struct MapJob {
    /// Image file, relative to the input folder
    pub image: PathBuf,
    /// Output grid shape
    pub dimensions: GridDimensions,
    /// Palette used for classification
    pub palette: PaletteKind,
    /// Maximum accepted color distance
    pub tolerance: Tolerance,
    /// Artifact file, relative to the output folder
    pub output: PathBuf,
}

impl MapJob {
    /// Create a job from already validated parts
    pub fn new(
        image: impl Into<PathBuf>,
        dimensions: GridDimensions,
        palette: PaletteKind,
        tolerance: Tolerance,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image: image.into(),
            dimensions,
            palette,
            tolerance,
            output: output.into(),
        }
    }

    fn from_raw(raw: RawMapJob) -> Result<Self> {
        if raw.output.as_os_str().is_empty() {
            return Err(invalid_parameter(
                "output",
                &raw.output.display(),
                &"output name must not be empty",
            ));
        }
        Ok(Self {
            dimensions: GridDimensions::new(raw.rows, raw.cols)?,
            tolerance: Tolerance::new(raw.tolerance.unwrap_or(DEFAULT_TOLERANCE))?,
            image: raw.image,
            palette: raw.palette,
            output: raw.output,
        })
    }
}

/// Ordered list of map jobs
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    jobs: Vec<MapJob>,
}

impl Manifest {
    /// Wrap a list of jobs
    pub const fn new(jobs: Vec<MapJob>) -> Self {
        Self { jobs }
    }

    /// Built-in batch: one overworld map and three dungeons
    ///
    /// # Errors
    ///
    /// Never fails in practice; the built-in values are within all limits
    pub fn builtin() -> Result<Self> {
        let overworld = GridDimensions::new(42, 42)?;
        let dungeon = GridDimensions::new(28, 28)?;
        let overworld_tolerance = Tolerance::new(75.0)?;
        let dungeon_tolerance = Tolerance::new(50.0)?;

        let mut jobs = vec![MapJob::new(
            "mapa_hyrule.png",
            overworld,
            PaletteKind::Terrain,
            overworld_tolerance,
            "hyrule.txt",
        )];
        for level in 1..=3 {
            jobs.push(MapJob::new(
                format!("masmorra_{level}.png"),
                dungeon,
                PaletteKind::Dungeon,
                dungeon_tolerance,
                format!("masmorra{level}.txt"),
            ));
        }
        Ok(Self { jobs })
    }

    /// Parse a manifest from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a job fails validation
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let file: ManifestFile = toml::from_str(text).map_err(|e| MapError::Manifest {
            path: origin.to_path_buf(),
            source: e,
        })?;
        let jobs = file
            .maps
            .into_iter()
            .map(MapJob::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { jobs })
    }

    /// Load a manifest file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| file_system(path, "read manifest", e))?;
        Self::from_toml_str(&text, path)
    }

    /// Jobs in processing order
    pub fn jobs(&self) -> &[MapJob] {
        &self.jobs
    }

    /// Number of jobs
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the manifest has no jobs
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
