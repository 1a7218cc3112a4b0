//! Configuration API for segmentation

use crate::api::Error;
use crate::domain::ListItemPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Smallest chunk the merge pass aims for, in characters
    pub const MIN_CHUNK_SIZE: usize = 50;

    /// Largest prose chunk in `smart` mode, in characters
    pub const MAX_CHUNK_SIZE: usize = 500;

    /// Separator used by `symbol` mode when none is configured
    pub const SEPARATOR: &str = ".";
}

/// Segmentation algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Structure-aware segmentation of Markdown/HTML text
    #[default]
    Smart,
    /// One chunk per non-blank line
    Line,
    /// Split on literal separators
    Symbol,
    /// SubRip subtitle entries
    #[serde(alias = "srt")]
    SubtitleSrt,
}

impl Mode {
    /// All modes in display order
    pub const ALL: [Mode; 4] = [Mode::Smart, Mode::Line, Mode::Symbol, Mode::SubtitleSrt];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Smart => "smart",
            Mode::Line => "line",
            Mode::Symbol => "symbol",
            Mode::SubtitleSrt => "subtitle_srt",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Smart => "code, images, links and footnotes kept atomic; prose sized and merged",
            Mode::Line => "one chunk per non-blank line",
            Mode::Symbol => "split on literal separators, applied in order",
            Mode::SubtitleSrt => "SubRip entries: timing headers atomic, content translatable",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "smart" => Ok(Mode::Smart),
            "line" => Ok(Mode::Line),
            "symbol" => Ok(Mode::Symbol),
            "subtitle_srt" | "srt" => Ok(Mode::SubtitleSrt),
            _ => Err(Error::InvalidMode(format!(
                "mode must be one of: smart, line, symbol, subtitle_srt (got '{s}')"
            ))),
        }
    }
}

/// Segmentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub(crate) mode: Mode,
    pub(crate) min_chunk_size: usize,
    pub(crate) max_chunk_size: usize,
    pub(crate) separators: Vec<String>,
    pub(crate) list_items: ListItemPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            min_chunk_size: defaults::MIN_CHUNK_SIZE,
            max_chunk_size: defaults::MAX_CHUNK_SIZE,
            separators: vec![defaults::SEPARATOR.to_string()],
            list_items: ListItemPolicy::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    ///
    /// Keys mirror the builder: `mode`, `min_chunk_size`, `max_chunk_size`,
    /// `separators` and a `[list_items]` table.
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        let builder: ConfigBuilder = toml::from_str(source)
            .map_err(|e| Error::Configuration(format!("invalid configuration: {e}")))?;
        builder.build()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn min_chunk_size(&self) -> usize {
        self.min_chunk_size
    }

    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    pub fn list_items(&self) -> &ListItemPolicy {
        &self.list_items
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.min_chunk_size == 0 {
            return Err(Error::Configuration(
                "min_chunk_size must be a positive integer".into(),
            ));
        }

        if self.max_chunk_size < self.min_chunk_size {
            return Err(Error::Configuration(
                "max_chunk_size must be an integer greater than or equal to min_chunk_size".into(),
            ));
        }

        if self.separators.is_empty() {
            return Err(Error::Configuration("separators list cannot be empty".into()));
        }

        if self.separators.iter().any(String::is_empty) {
            return Err(Error::Configuration(
                "separators must not contain empty strings".into(),
            ));
        }

        if self.list_items.max_line_len == Some(0) {
            return Err(Error::Configuration(
                "list_items.max_line_len must be a positive integer".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigBuilder {
    mode: Option<String>,
    min_chunk_size: Option<usize>,
    max_chunk_size: Option<usize>,
    separators: Option<Vec<String>>,
    list_items: Option<ListItemPolicy>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segmentation mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode.as_str().to_string());
        self
    }

    /// Set the mode by name; parsed when the configuration is built
    pub fn mode_name(mut self, name: impl Into<String>) -> Self {
        self.mode = Some(name.into());
        self
    }

    /// Set the merge threshold in characters
    pub fn min_chunk_size(mut self, chars: usize) -> Self {
        self.min_chunk_size = Some(chars);
        self
    }

    /// Set the split threshold in characters
    pub fn max_chunk_size(mut self, chars: usize) -> Self {
        self.max_chunk_size = Some(chars);
        self
    }

    /// Set the separators for `symbol` mode, applied in order
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = Some(separators.into_iter().map(Into::into).collect());
        self
    }

    /// Set the list-item policy for `smart` mode
    pub fn list_items(mut self, policy: ListItemPolicy) -> Self {
        self.list_items = Some(policy);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(name) = self.mode {
            config.mode = Mode::from_str(&name)?;
        }

        if let Some(min) = self.min_chunk_size {
            config.min_chunk_size = min;
        }

        if let Some(max) = self.max_chunk_size {
            config.max_chunk_size = max;
        }

        if let Some(separators) = self.separators {
            config.separators = separators;
        }

        if let Some(policy) = self.list_items {
            config.list_items = policy;
        }

        config.validate()?;
        Ok(config)
    }
}
