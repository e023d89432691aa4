//! Source image module
//!
//! This module discovers input photos on disk and decodes them into bitmaps.

mod reader;
mod image_crate_reader;
mod discovery;

pub use reader::ImageSourceReader;
pub use image_crate_reader::ImageCrateReader;
pub use discovery::{discover_images, is_supported_image, SUPPORTED_EXTENSIONS};
