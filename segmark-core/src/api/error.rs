//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown segmentation mode
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    /// Input that cannot be segmented (e.g. not valid UTF-8)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
