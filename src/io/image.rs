//! Source image decoding and PNG export of rendered maps

use crate::io::error::{MapError, Result, file_system};
use image::{RgbImage, RgbaImage};
use std::path::Path;

/// Decode an image file into RGB pixels
///
/// Alpha is discarded; palettes are matched on color only.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable image
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MapError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Save a rendered surface as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| MapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
