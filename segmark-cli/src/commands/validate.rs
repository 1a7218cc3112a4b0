//! Validate command implementation

use crate::commands::OutputFormat;
use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match self.check() {
            Ok(summary) => {
                println!("✓ Configuration is valid!");
                print!("{summary}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }

    /// Load and validate the file, returning a summary of its settings
    fn check(&self) -> Result<String> {
        let file_config = CliConfig::load(&self.config)?;
        let config = file_config.to_segmenter_config()?;

        let format_name = &file_config.output.default_format;
        if OutputFormat::from_str(format_name, true).is_err() {
            return Err(CliError::ConfigError(format!(
                "default_format must be one of: text, json, markdown (got '{format_name}')"
            ))
            .into());
        }

        Ok(format!(
            "  Mode: {}\n  Chunk size: {}..={} characters\n  Output format: {}\n",
            config.mode(),
            config.min_chunk_size(),
            config.max_chunk_size(),
            format_name
        ))
    }
}
