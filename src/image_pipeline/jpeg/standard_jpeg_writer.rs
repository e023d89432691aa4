use std::io::Write;

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder, SamplingFactor};
use tracing::debug;

use crate::image_pipeline::collage::CollageConfig;
use crate::image_pipeline::common::error::{CollageError, Result};
use crate::image_pipeline::jpeg::writer::CollageWriter;

/// Baseline JPEG writer backed by `jpeg-encoder`. Chroma keeps full
/// resolution (4:4:4) and Huffman tables are built from the image statistics.
pub struct StandardJpegWriter;

impl CollageWriter for StandardJpegWriter {
    fn write_jpeg(&self, image: &RgbImage, output: &mut dyn Write, config: &CollageConfig) -> Result<()> {
        debug!(
            width = image.width(),
            height = image.height(),
            quality = config.jpeg_quality,
            "Encoding JPEG image"
        );

        let (width, height) = match (u16::try_from(image.width()), u16::try_from(image.height())) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return Err(CollageError::EncodeError(format!(
                    "{}x{} exceeds the JPEG limit of 65535 pixels per side",
                    image.width(),
                    image.height()
                )));
            }
        };

        let mut buffer = Vec::new();
        let mut encoder = Encoder::new(&mut buffer, config.jpeg_quality);
        encoder.set_sampling_factor(SamplingFactor::R_4_4_4);
        encoder.set_optimized_huffman_tables(true);
        encoder
            .encode(image.as_raw(), width, height, ColorType::Rgb)
            .map_err(|e| CollageError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!(bytes = buffer.len(), "JPEG encoding complete");
        Ok(())
    }
}
