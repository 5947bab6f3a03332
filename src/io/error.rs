//! Error types for map extraction, persistence and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all map operations
#[derive(Debug)]
pub enum MapError {
    /// Failed to load or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered map image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// The folder holding the raw map images does not exist
    ///
    /// Fatal for a whole regeneration run: no map is processed.
    MissingInputFolder {
        /// Folder that was expected to exist
        path: PathBuf,
    },

    /// A map artifact was requested but has never been generated
    MapNotFound {
        /// Expected location of the artifact
        path: PathBuf,
    },

    /// A map artifact could not be parsed back into a rectangular grid
    MalformedMap {
        /// One-based line number where the problem was detected
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The map manifest could not be parsed
    Manifest {
        /// Path of the manifest file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::MissingInputFolder { path } => {
                write!(f, "Input folder '{}' was not found", path.display())
            }
            Self::MapNotFound { path } => {
                write!(
                    f,
                    "Map '{}' not found, run the extract command to generate it",
                    path.display()
                )
            }
            Self::MalformedMap { line, reason } => {
                write!(f, "Malformed map at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Manifest { path, source } => {
                write!(f, "Invalid manifest '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Manifest { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for map results
pub type Result<T> = std::result::Result<T, MapError>;

impl From<image::ImageError> for MapError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on `path`
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MapError {
    MapError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
