//! Collage configuration and run report types

use std::path::PathBuf;

use image::Rgb;
use image::imageops::FilterType;

/// Configuration for a collage run
#[derive(Debug, Clone)]
pub struct CollageConfig {
    /// Directory scanned for source photos
    pub input_dir: PathBuf,
    /// Directory collages are written to, created on first write
    pub output_dir: PathBuf,
    /// Logo to stamp bottom-left. `None` disables stamping; a path with no
    /// file behind it is skipped the same way
    pub logo_path: Option<PathBuf>,
    /// Photos taller than this are scaled down before heights are equalized
    pub target_height: u32,
    /// Widest the logo may be, as a fraction of the collage width
    pub logo_max_width_fraction: f64,
    /// Logo margin from the left and bottom edges, in pixels
    pub logo_padding: u32,
    /// Canvas fill behind the frames
    pub background: Rgb<u8>,
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
    /// Resampling filter for every resize
    pub resize_filter: FilterType,
    /// Fewer qualifying photos than this aborts the run
    pub min_images: usize,
    /// Number of leading photos in each collage variant
    pub subset_sizes: Vec<usize>,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("images"),
            output_dir: PathBuf::from("output"),
            logo_path: Some(PathBuf::from("logo.png")),
            target_height: 1200,
            logo_max_width_fraction: 0.15,
            logo_padding: 12,
            background: Rgb([255, 255, 255]),
            jpeg_quality: 92,
            resize_filter: FilterType::Lanczos3,
            min_images: 2,
            subset_sizes: vec![2, 3, 4],
        }
    }
}

impl CollageConfig {
    pub fn builder() -> CollageConfigBuilder {
        CollageConfigBuilder::default()
    }
}

/// Builder for CollageConfig
#[derive(Default)]
pub struct CollageConfigBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    logo_path: Option<Option<PathBuf>>,
    target_height: Option<u32>,
    logo_max_width_fraction: Option<f64>,
    logo_padding: Option<u32>,
    background: Option<Rgb<u8>>,
    jpeg_quality: Option<u8>,
    resize_filter: Option<FilterType>,
    min_images: Option<usize>,
    subset_sizes: Option<Vec<usize>>,
}

impl CollageConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn logo_path(mut self, path: Option<PathBuf>) -> Self {
        self.logo_path = Some(path);
        self
    }

    pub fn target_height(mut self, height: u32) -> Self {
        self.target_height = Some(height);
        self
    }

    pub fn logo_max_width_fraction(mut self, fraction: f64) -> Self {
        self.logo_max_width_fraction = Some(fraction);
        self
    }

    pub fn logo_padding(mut self, padding: u32) -> Self {
        self.logo_padding = Some(padding);
        self
    }

    pub fn background(mut self, color: Rgb<u8>) -> Self {
        self.background = Some(color);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality);
        self
    }

    pub fn resize_filter(mut self, filter: FilterType) -> Self {
        self.resize_filter = Some(filter);
        self
    }

    pub fn min_images(mut self, count: usize) -> Self {
        self.min_images = Some(count);
        self
    }

    pub fn subset_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.subset_sizes = Some(sizes);
        self
    }

    pub fn build(self) -> CollageConfig {
        let default = CollageConfig::default();
        CollageConfig {
            input_dir: self.input_dir.unwrap_or(default.input_dir),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            logo_path: self.logo_path.unwrap_or(default.logo_path),
            target_height: self.target_height.unwrap_or(default.target_height),
            logo_max_width_fraction: self
                .logo_max_width_fraction
                .unwrap_or(default.logo_max_width_fraction),
            logo_padding: self.logo_padding.unwrap_or(default.logo_padding),
            background: self.background.unwrap_or(default.background),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            resize_filter: self.resize_filter.unwrap_or(default.resize_filter),
            min_images: self.min_images.unwrap_or(default.min_images),
            subset_sizes: self.subset_sizes.unwrap_or(default.subset_sizes),
        }
    }
}

/// What a collage run produced
#[derive(Debug, Clone, Default)]
pub struct CollageReport {
    /// Qualifying photos found in the input directory
    pub source_count: usize,
    /// Collages written, in subset order
    pub written: Vec<PathBuf>,
}
