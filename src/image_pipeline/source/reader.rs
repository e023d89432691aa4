use std::path::Path;

use image::{RgbImage, RgbaImage};

use crate::image_pipeline::common::error::Result;

pub trait ImageSourceReader {
    /// Decodes a photo as opaque RGB.
    fn read_rgb(&self, path: &Path) -> Result<RgbImage>;

    /// Decodes an image keeping its alpha channel (used for logos).
    fn read_rgba(&self, path: &Path) -> Result<RgbaImage>;
}
