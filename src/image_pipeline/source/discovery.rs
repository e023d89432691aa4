use std::path::{Path, PathBuf};

use tracing::debug;

use crate::image_pipeline::common::error::{CollageError, Result};

/// Raster extensions picked up from the input directory, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Lists the supported images in `dir`, sorted by file name.
///
/// # Errors
///
/// A missing `dir` (or one that is not a directory) is a
/// [`CollageError::ConfigurationError`]; failures while listing it are I/O errors.
pub fn discover_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CollageError::ConfigurationError(format!(
            "'{}' folder not found",
            dir.display()
        )));
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-image entry");
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}
