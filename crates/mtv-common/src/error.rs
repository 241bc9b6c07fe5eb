//! Error types for MORONS.TV

use thiserror::Error;

/// Result type alias for MORONS.TV operations
pub type Result<T> = std::result::Result<T, MtvError>;

/// Main error type shared across workspace members
#[derive(Error, Debug)]
pub enum MtvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Video not found: {0}")]
    VideoNotFound(i32),

    #[error("Creator not found: {0}")]
    CreatorNotFound(i32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
