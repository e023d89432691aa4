//! Collage pipeline module
//!
//! Photos are decoded, brought to a common height, stitched into a single
//! row, stamped with a logo and written out as JPEG. Each stage lives in its
//! own module; `collage` ties them together.

pub mod source;
pub mod normalize;
pub mod stitch;
pub mod logo;
pub mod jpeg;
pub mod collage;
pub mod common;

pub use common::{
    CollageError,
    Result,
};

pub use source::{
    ImageSourceReader,
    ImageCrateReader,
    discover_images,
};

pub use normalize::normalize_frames;

pub use stitch::stitch_row;

pub use logo::LogoStamper;

pub use jpeg::{
    CollageWriter,
    StandardJpegWriter,
};

pub use collage::{
    CollageConfig,
    CollageConfigBuilder,
    CollagePipeline,
    CollageReport,
};
