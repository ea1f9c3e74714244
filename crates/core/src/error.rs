//! Error types for the image-crop-core library.
//!
//! The crop engine itself never fails: pointer input is clamped, not rejected.
//! Errors only surface at the boundaries where the host hands us data, that is
//! configuration and the dimensions of the displayed image.

use thiserror::Error;

/// Errors that can occur when setting up a crop engine.
#[derive(Error, Debug)]
pub enum CropError {
    /// Configuration-related errors (unparsable or out-of-range values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host reported an image with a zero dimension.
    #[error(
        "Invalid image dimensions: displayed {width}x{height}, natural {natural_width}x{natural_height}"
    )]
    InvalidImage {
        width: u32,
        height: u32,
        natural_width: u32,
        natural_height: u32,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CropError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// A convenient alias for Result with [`CropError`].
pub type Result<T> = std::result::Result<T, CropError>;
