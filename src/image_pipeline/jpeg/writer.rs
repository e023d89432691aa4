use std::io::Write;

use image::RgbImage;

use crate::image_pipeline::collage::CollageConfig;
use crate::image_pipeline::common::error::Result;

pub trait CollageWriter {
    fn write_jpeg(&self, image: &RgbImage, output: &mut dyn Write, config: &CollageConfig) -> Result<()>;
}
