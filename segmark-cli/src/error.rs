//! Error handling for the CLI application

use std::fmt;

/// Errors raised by the CLI itself rather than the segmentation library
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    NoInputFiles(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration file could not be parsed or validated
    ConfigError(String),
    /// The library rejected the input or settings
    SegmentationError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching the provided patterns: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SegmentationError(msg) => write!(f, "Segmentation error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<segmark_core::Error> for CliError {
    fn from(err: segmark_core::Error) -> Self {
        CliError::SegmentationError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
