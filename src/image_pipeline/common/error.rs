use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollageError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode JPEG image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Cannot stitch an empty frame set")]
    EmptyFrameSet,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CollageError>;
