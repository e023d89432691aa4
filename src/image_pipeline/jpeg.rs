//! JPEG writing module
//!
//! This module encodes finished collages for output.

mod writer;
mod standard_jpeg_writer;

pub use writer::CollageWriter;
pub use standard_jpeg_writer::StandardJpegWriter;
