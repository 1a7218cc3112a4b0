//! Main segmenter implementation

use std::io::Read;

use crate::api::{Config, Error, Input, Mode, Output};
use crate::application::{
    LineSegmenter, SmartSegmenter, Strategy, SubtitleSegmenter, SymbolSegmenter,
};

/// Segments text into typed chunks according to a fixed configuration
///
/// Holds no state besides its configuration and can be shared freely across
/// threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    strategy: Strategy,
    config: Config,
}

impl Segmenter {
    /// Create a segmenter with the default configuration (`smart`, 50/500)
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Create a segmenter with a custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Create a segmenter for a mode with otherwise default settings
    pub fn with_mode(mode: Mode) -> Self {
        Self::from_valid_config(Config {
            mode,
            ..Config::default()
        })
    }

    fn from_valid_config(config: Config) -> Self {
        let strategy = Self::create_strategy(&config);
        Self { strategy, config }
    }

    fn create_strategy(config: &Config) -> Strategy {
        match config.mode {
            Mode::Smart => Strategy::Smart(SmartSegmenter::new(
                config.max_chunk_size,
                config.list_items.clone(),
            )),
            Mode::Line => Strategy::Line(LineSegmenter),
            Mode::Symbol => Strategy::Symbol(SymbolSegmenter::new(config.separators.clone())),
            Mode::SubtitleSrt => Strategy::Subtitle(SubtitleSegmenter),
        }
    }

    /// Segment text
    pub fn segment(&self, text: &str) -> Output {
        tracing::debug!(mode = %self.config.mode, bytes = text.len(), "segmenting");
        Output::from_chunks(self.strategy.segment(text))
    }

    /// Resolve an input source and segment it
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let text = input.into_text()?;
        Ok(self.segment(&text))
    }

    /// Segment everything readable from `reader`
    pub fn process_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Output, Error> {
        self.process(Input::from_reader(reader))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
