//! Image lookup error types

use thiserror::Error;

/// Errors that can occur while looking up an image
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No images found for '{0}'")]
    NoResults(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
