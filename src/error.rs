//! Error types for the screenshot generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a screenshot
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas dimensions were zero or too large to allocate
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Failed to render content
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode the canvas as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Filesystem error (missing output directory, permissions, ...)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}
