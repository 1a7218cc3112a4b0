//! Public API for segmark-core
//!
//! A small surface over the domain and application layers: build a
//! [`Config`], create a [`Segmenter`], and feed it text or an [`Input`].

mod config;
mod error;
mod input;
mod output;
mod processor;


pub use config::{defaults, Config, ConfigBuilder, Mode};
pub use error::{Error, Result};
pub use input::Input;
pub use output::Output;
pub use processor::Segmenter;
