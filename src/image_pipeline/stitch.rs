//! Row stitching
//!
//! Concatenates equal-height frames left to right on a fresh canvas.

use image::imageops;
use image::{Rgb, RgbImage};
use tracing::{debug, warn};

use crate::image_pipeline::common::error::{CollageError, Result};

/// Pastes `frames` side by side, leftmost first, with no gap.
///
/// The canvas is as wide as all frames together and as tall as the first
/// frame. It starts filled with `background`, which only remains visible if
/// a frame is shorter than the first one. Frames are copied, never resampled
/// or borrowed mutably, so the caller's frame set stays intact.
pub fn stitch_row(frames: &[RgbImage], background: Rgb<u8>) -> Result<RgbImage> {
    let first = frames.first().ok_or(CollageError::EmptyFrameSet)?;
    let height = first.height();
    let total_width: u32 = frames.iter().map(RgbImage::width).sum();

    if frames.iter().any(|frame| frame.height() != height) {
        warn!(height, "Stitching frames of unequal height, background will show");
    }

    let mut canvas = RgbImage::from_pixel(total_width, height, background);
    let mut x = 0i64;
    for frame in frames {
        imageops::replace(&mut canvas, frame, x, 0);
        x += i64::from(frame.width());
    }

    debug!(width = total_width, height, frames = frames.len(), "Stitched row");
    Ok(canvas)
}
