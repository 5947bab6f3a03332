//! Input/output operations, configuration and error handling

/// Plain text persistence of output maps
pub mod artifact;
/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// TOML manifests of map jobs
pub mod manifest;
/// Progress bars for regeneration runs
pub mod progress;
