//! Common utilities module
//!
//! This module contains the error type shared by every collage stage.

pub mod error;

pub use error::{CollageError, Result};
