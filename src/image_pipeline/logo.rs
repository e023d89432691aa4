//! Logo stamping
//!
//! The logo is scaled to fit within a fraction of the collage width and
//! blended into the bottom-left corner using its own alpha channel. A missing
//! logo file is an expected condition: the collage is left as it is.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tracing::{debug, info};

use crate::image_pipeline::collage::CollageConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::source::ImageSourceReader;

/// Places a logo in the bottom-left corner of a collage.
#[derive(Debug, Clone, Copy)]
pub struct LogoStamper {
    /// Widest the logo may be, as a fraction of the collage width
    pub max_width_fraction: f64,
    /// Margin between the logo and the left and bottom edges, in pixels
    pub padding: u32,
    /// Filter used when the logo has to shrink
    pub filter: FilterType,
}

impl LogoStamper {
    pub fn from_config(config: &CollageConfig) -> Self {
        Self {
            max_width_fraction: config.logo_max_width_fraction,
            padding: config.logo_padding,
            filter: config.resize_filter,
        }
    }

    /// Loads the logo at `path`, or `None` if there is no file there.
    pub fn load_logo<R: ImageSourceReader>(reader: &R, path: &Path) -> Result<Option<RgbaImage>> {
        if !path.exists() {
            info!(path = %path.display(), "No logo found, collages will not be stamped");
            return Ok(None);
        }
        let logo = reader.read_rgba(path)?;
        debug!(width = logo.width(), height = logo.height(), "Loaded logo");
        Ok(Some(logo))
    }

    /// Largest logo width allowed on a collage `collage_width` pixels wide.
    pub fn max_logo_width(&self, collage_width: u32) -> u32 {
        ((f64::from(collage_width) * self.max_width_fraction).floor() as u32).max(1)
    }

    /// Shrinks `logo` to the allowed width for `collage_width`. Logos that
    /// already fit are returned unchanged; they are never enlarged.
    pub fn fit_logo(&self, logo: &RgbaImage, collage_width: u32) -> RgbaImage {
        let max_width = self.max_logo_width(collage_width);
        if logo.width() <= max_width {
            return logo.clone();
        }

        let new_height = (u64::from(logo.height()) * u64::from(max_width) / u64::from(logo.width())).max(1);
        let new_height = u32::try_from(new_height).unwrap_or(u32::MAX);
        debug!(
            from_width = logo.width(),
            from_height = logo.height(),
            width = max_width,
            height = new_height,
            "Scaling logo down"
        );
        imageops::resize(logo, max_width, new_height, self.filter)
    }

    /// Top-left corner of a logo `logo_height` pixels tall on a collage
    /// `collage_height` pixels tall. `y` goes negative when the logo does not
    /// fit vertically.
    pub fn position(&self, collage_height: u32, logo_height: u32) -> (i64, i64) {
        let padding = i64::from(self.padding);
        (padding, i64::from(collage_height) - i64::from(logo_height) - padding)
    }

    /// Scales `logo` for this collage and blends it in place. Logo pixels that
    /// land outside the collage are clipped.
    pub fn stamp(&self, collage: &mut RgbImage, logo: &RgbaImage) {
        let logo = self.fit_logo(logo, collage.width());
        let (x0, y0) = self.position(collage.height(), logo.height());

        for (lx, ly, pixel) in logo.enumerate_pixels() {
            let x = x0 + i64::from(lx);
            let y = y0 + i64::from(ly);
            if x < 0 || y < 0 || x >= i64::from(collage.width()) || y >= i64::from(collage.height()) {
                continue;
            }
            blend_pixel(collage.get_pixel_mut(x as u32, y as u32), pixel);
        }

        debug!(x = x0, y = y0, width = logo.width(), height = logo.height(), "Stamped logo");
    }

    /// Loads the logo at `logo_path` and stamps it onto `collage`. Without a
    /// logo file the collage comes back untouched.
    pub fn add_logo<R: ImageSourceReader>(
        &self,
        reader: &R,
        mut collage: RgbImage,
        logo_path: &Path,
    ) -> Result<RgbImage> {
        if let Some(logo) = Self::load_logo(reader, logo_path)? {
            self.stamp(&mut collage, &logo);
        }
        Ok(collage)
    }
}

/// Blends `overlay` onto `base` using the overlay's alpha as the mask.
fn blend_pixel(base: &mut Rgb<u8>, overlay: &Rgba<u8>) {
    let alpha = u32::from(overlay[3]);
    match alpha {
        0 => {}
        255 => *base = Rgb([overlay[0], overlay[1], overlay[2]]),
        _ => {
            let inv_alpha = 255 - alpha;
            for channel in 0..3 {
                let src = u32::from(overlay[channel]);
                let dst = u32::from(base[channel]);
                base[channel] = ((src * alpha + dst * inv_alpha + 127) / 255) as u8;
            }
        }
    }
}
