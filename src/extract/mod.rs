//! Extraction of output maps from source images

/// Regeneration of every map in a manifest
pub mod batch;
/// Row-major conversion of one image
pub mod driver;

pub use batch::{BatchOptions, BatchReport, MapOutcome, regenerate_all};
pub use driver::{ExtractionSettings, Extractor, extract_image_file};
