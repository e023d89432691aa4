//! Collage orchestration module
//!
//! Drives discovery, normalization, stitching, logo stamping and JPEG output
//! for each collage variant.

mod types;
mod pipeline;


pub use types::{CollageConfig, CollageConfigBuilder, CollageReport};
pub use pipeline::CollagePipeline;
