//! Configuration file support
//!
//! A TOML file with `[segmentation]`, `[output]` and `[performance]` tables.
//! Every key is optional; command-line flags take precedence over the file.

use crate::error::CliError;
use anyhow::{Context, Result};
use segmark_core::api::defaults;
use segmark_core::{Config, ListItemPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Segmentation settings
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Settings forwarded to the segmentation library
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentationConfig {
    /// Mode name (`smart`, `line`, `symbol`, `subtitle_srt`)
    pub mode: String,

    /// Merge threshold in characters
    pub min_chunk_size: usize,

    /// Split threshold in characters
    pub max_chunk_size: usize,

    /// Separators for `symbol` mode
    pub separators: Vec<String>,

    /// List-item override thresholds
    pub list_items: ListItemPolicy,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            mode: "smart".to_string(),
            min_chunk_size: defaults::MIN_CHUNK_SIZE,
            max_chunk_size: defaults::MAX_CHUNK_SIZE,
            separators: vec![defaults::SEPARATOR.to_string()],
            list_items: ListItemPolicy::default(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Segment files in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = one per CPU)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker threads to use, resolving 0 to the CPU count
    pub fn effective_threads(&self) -> usize {
        if self.worker_threads == 0 {
            num_cpus::get()
        } else {
            self.worker_threads
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Build a validated library configuration from the `[segmentation]` table
    pub fn to_segmenter_config(&self) -> Result<Config> {
        let seg = &self.segmentation;
        let config = Config::builder()
            .mode_name(seg.mode.as_str())
            .min_chunk_size(seg.min_chunk_size)
            .max_chunk_size(seg.max_chunk_size)
            .separators(seg.separators.iter().cloned())
            .list_items(seg.list_items.clone())
            .build()
            .map_err(CliError::from)?;
        Ok(config)
    }
}
