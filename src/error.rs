//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile image could not be loaded
    #[error("Image error: {0}")]
    Image(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create an image error with message
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }
}
