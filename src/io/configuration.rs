//! Extraction constants and runtime configuration defaults

/// Symbol written for tiles whose colors match no palette entry
pub const UNKNOWN_SYMBOL: char = '?';

/// Default maximum RGB distance accepted as a palette match
pub const DEFAULT_TOLERANCE: f64 = 40.0;

/// Side length of the voting window (must be odd for center-based sampling)
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Folder holding the raw map images
pub const DEFAULT_INPUT_DIR: &str = "raw_maps";

/// Folder receiving the generated map artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "processed_maps";

/// Extension of generated map artifacts
pub const MAP_EXTENSION: &str = "txt";

// Rendering surface used by the viewer
/// Default surface width in pixels
pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
/// Default surface height in pixels
pub const DEFAULT_SURFACE_HEIGHT: u32 = 650;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
