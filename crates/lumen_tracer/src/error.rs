//! Error types for the tracer.

use thiserror::Error;

/// Errors reported by scene construction and the pixel sink.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TracerError {
    #[error("Pixel ({x}, {y}) is out of bounds for a {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(f64),

    #[error("Invalid sphere radius: {0} (must be finite and positive)")]
    InvalidRadius(f64),

    #[error("Invalid room layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, TracerError>;
