//! segmark CLI library
//!
//! Command-line front end for the segmark content-aware segmentation
//! library: input resolution, configuration files, output formatting and
//! progress reporting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
