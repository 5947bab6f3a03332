//! Persistence of output maps as plain text artifacts
//!
//! Writes go to a temporary file beside the target and are renamed over it once
//! complete, so a reader never observes a half-written map.

use crate::io::error::{MapError, Result, file_system};
use crate::spatial::OutputMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `map` to `path`, replacing any previous artifact
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or
/// moved into place
pub fn write_map(map: &OutputMap, path: &Path) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(directory)
        .map_err(|e| file_system(directory, "create temporary file", e))?;
    staging
        .write_all(map.to_text().as_bytes())
        .map_err(|e| file_system(staging.path(), "write map", e))?;
    staging
        .as_file()
        .sync_all()
        .map_err(|e| file_system(staging.path(), "flush map", e))?;
    staging
        .persist(path)
        .map_err(|e| file_system(path, "replace map", e.error))?;

    Ok(())
}

/// Read a map artifact back into a grid
///
/// # Errors
///
/// Returns an error if:
/// - No artifact exists at `path` ([`MapError::MapNotFound`])
/// - The file cannot be read
/// - The rows are not all the same length
pub fn read_map(path: &Path) -> Result<OutputMap> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MapError::MapNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(file_system(path, "read map", e)),
    };
    OutputMap::from_text(&text)
}
