//! Source image reader implementation using the `image` crate.
//!
//! JPEG and PNG are decoded through `image::ImageReader`. The container format
//! is sniffed from the file contents first, so a PNG saved with a `.jpg`
//! extension still decodes; the extension is only the fallback.

use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage, RgbaImage};
use tracing::debug;

use crate::image_pipeline::common::error::{CollageError, Result};
use crate::image_pipeline::source::reader::ImageSourceReader;

/// Reader backed by the `image` crate's decoders.
pub struct ImageCrateReader;

impl ImageCrateReader {
    /// Opens and decodes `path`.
    ///
    /// The file handle lives only inside this call, so it is released whether
    /// decoding succeeds or fails.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::DecodeError`] naming `path` when the file cannot
    /// be opened or is not a decodable raster image.
    fn decode(path: &Path) -> Result<DynamicImage> {
        let decode_error =
            |reason: String| CollageError::DecodeError(format!("{}: {}", path.display(), reason));

        let decoded = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(e.to_string()))?
            .decode()
            .map_err(|e| decode_error(e.to_string()))?;

        debug!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            color = ?decoded.color(),
            "Decoded image"
        );

        Ok(decoded)
    }
}

impl ImageSourceReader for ImageCrateReader {
    fn read_rgb(&self, path: &Path) -> Result<RgbImage> {
        Ok(Self::decode(path)?.to_rgb8())
    }

    fn read_rgba(&self, path: &Path) -> Result<RgbaImage> {
        Ok(Self::decode(path)?.to_rgba8())
    }
}
