//! Height normalization for frame sets
//!
//! Frames go through two passes: anything taller than the target height is
//! scaled down to it, then every frame is brought to the smallest height in the
//! set so the stitched row has no ragged edge. Both passes preserve each
//! frame's aspect ratio.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Width that keeps the `width:height` ratio at `new_height`, rounded to the
/// nearest pixel and never zero.
pub fn scaled_width(width: u32, height: u32, new_height: u32) -> u32 {
    let scaled = (u64::from(width) * u64::from(new_height) + u64::from(height) / 2) / u64::from(height);
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

/// Resizes `frame` to `new_height` keeping its aspect ratio.
pub fn resize_to_height(frame: &RgbImage, new_height: u32, filter: FilterType) -> RgbImage {
    let width = scaled_width(frame.width(), frame.height(), new_height);
    imageops::resize(frame, width, new_height, filter)
}

/// Scales `frame` down to `target_height` if it is taller; shorter frames are
/// returned untouched.
pub fn downscale_to_target(frame: RgbImage, target_height: u32, filter: FilterType) -> RgbImage {
    if frame.height() <= target_height {
        return frame;
    }
    debug!(
        width = frame.width(),
        height = frame.height(),
        target_height,
        "Downscaling frame to target height"
    );
    resize_to_height(&frame, target_height, filter)
}

/// Rescales every frame to the minimum height of the set.
///
/// A set that already shares one height (including a single frame) is
/// returned as-is.
pub fn equalize_heights(frames: Vec<RgbImage>, filter: FilterType) -> Vec<RgbImage> {
    let Some(min_height) = frames.iter().map(RgbImage::height).min() else {
        return frames;
    };

    if frames.iter().all(|frame| frame.height() == min_height) {
        return frames;
    }

    debug!(min_height, frames = frames.len(), "Equalizing frame heights");
    frames
        .into_iter()
        .map(|frame| {
            if frame.height() == min_height {
                frame
            } else {
                resize_to_height(&frame, min_height, filter)
            }
        })
        .collect()
}

/// Runs both normalization passes over `frames`, preserving their order.
pub fn normalize_frames(frames: Vec<RgbImage>, target_height: u32, filter: FilterType) -> Vec<RgbImage> {
    let downscaled = frames
        .into_iter()
        .map(|frame| downscale_to_target(frame, target_height, filter))
        .collect();
    equalize_heights(downscaled, filter)
}
