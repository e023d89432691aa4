use std::fs::File;
use std::path::{Path, PathBuf};

use image::{RgbImage, RgbaImage};
use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    collage::types::{CollageConfig, CollageReport},
    common::error::{CollageError, Result},
    jpeg::{CollageWriter, StandardJpegWriter},
    logo::LogoStamper,
    normalize::normalize_frames,
    source::{ImageCrateReader, ImageSourceReader, discover_images},
    stitch::stitch_row,
};

pub struct CollagePipeline<R: ImageSourceReader, W: CollageWriter> {
    reader: R,
    writer: W,
    config: CollageConfig,
}

impl CollagePipeline<ImageCrateReader, StandardJpegWriter> {
    pub fn new(config: CollageConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardJpegWriter,
            config,
        }
    }
}

impl<R: ImageSourceReader, W: CollageWriter> CollagePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CollageConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Discovers the input photos, normalizes them once and writes one collage
    /// per configured subset size. Subset sizes of zero or larger than the
    /// number of photos are skipped.
    pub fn run(&self) -> Result<CollageReport> {
        self.run_with(|_| {})
    }

    /// Same as [`run`](Self::run), calling `on_written` right after each
    /// collage lands on disk, so files written before a later failure are
    /// still reported.
    #[instrument(skip(self, on_written), fields(input = %self.config.input_dir.display()))]
    pub fn run_with<F: FnMut(&Path)>(&self, mut on_written: F) -> Result<CollageReport> {
        let photos = {
            let _span = tracing::info_span!("discover_images").entered();
            discover_images(&self.config.input_dir)?
        };

        if photos.len() < self.config.min_images {
            return Err(CollageError::ConfigurationError(format!(
                "need at least {} images in '{}', found {}",
                self.config.min_images,
                self.config.input_dir.display(),
                photos.len()
            )));
        }
        info!(count = photos.len(), "Found source images");

        let frames = self.load_frames(&photos)?;

        let logo = {
            let _span = tracing::info_span!("load_logo").entered();
            match &self.config.logo_path {
                Some(path) => LogoStamper::load_logo(&self.reader, path)?,
                None => None,
            }
        };

        let mut report = CollageReport {
            source_count: photos.len(),
            written: Vec::new(),
        };

        for &size in &self.config.subset_sizes {
            if size == 0 {
                debug!("Empty subset size configured, skipping");
                continue;
            }
            if size > frames.len() {
                debug!(size, available = frames.len(), "Not enough photos for collage, skipping");
                continue;
            }

            let _span = tracing::info_span!("collage", size).entered();
            let collage = self.compose(&frames[..size], logo.as_ref())?;
            let path = self.save(&collage, &format!("collage_{size}"))?;
            on_written(&path);
            report.written.push(path);
        }

        info!(written = report.written.len(), "Collage run complete");
        Ok(report)
    }

    /// Decodes every path in order and normalizes the set to one height.
    pub fn load_frames(&self, paths: &[PathBuf]) -> Result<Vec<RgbImage>> {
        let frames = {
            let _span = tracing::info_span!("decode_images", count = paths.len()).entered();
            paths
                .iter()
                .map(|path| self.reader.read_rgb(path))
                .collect::<Result<Vec<_>>>()?
        };

        let _span = tracing::info_span!("normalize_frames", target_height = self.config.target_height).entered();
        Ok(normalize_frames(frames, self.config.target_height, self.config.resize_filter))
    }

    /// Stitches `frames` into a new canvas and stamps `logo` on it if given.
    pub fn compose(&self, frames: &[RgbImage], logo: Option<&RgbaImage>) -> Result<RgbImage> {
        let mut collage = {
            let _span = tracing::info_span!("stitch_row", frames = frames.len()).entered();
            stitch_row(frames, self.config.background)?
        };

        if let Some(logo) = logo {
            let _span = tracing::info_span!("stamp_logo").entered();
            LogoStamper::from_config(&self.config).stamp(&mut collage, logo);
        }

        Ok(collage)
    }

    /// Writes `collage` to `<output_dir>/<name>.jpg`, creating the directory
    /// if needed and replacing any existing file.
    pub fn save(&self, collage: &RgbImage, name: &str) -> Result<PathBuf> {
        let output_path = self.output_path(name);

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::create_dir_all(&self.config.output_dir).map_err(|e| {
                CollageError::OutputWriteError(format!("{}: {}", self.config.output_dir.display(), e))
            })?;
            File::create(&output_path).map_err(|e| {
                CollageError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        {
            let _span = tracing::info_span!("encode_jpeg").entered();
            self.writer.write_jpeg(collage, &mut output_file, &self.config)?;
        }

        info!(
            output = %output_path.display(),
            width = collage.width(),
            height = collage.height(),
            "Wrote collage"
        );
        Ok(output_path)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(format!("{name}.jpg"))
    }

    pub fn config(&self) -> &CollageConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CollageConfig) {
        self.config = config;
    }
}
