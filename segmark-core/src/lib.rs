//! Content-aware segmentation of documents into typed chunks
//!
//! Text is partitioned into an ordered sequence of [`Chunk`]s suitable for
//! independent processing (typically translation). Structural constructs
//! such as code, images, links, URLs, footnotes and subtitle timing codes
//! become atomic, non-translatable chunks; prose is sized to fit between a
//! minimum and a maximum length.
//!
//! # Architecture
//!
//! - **Domain layer**: chunk model, pattern registry, prose splitter
//! - **Application layer**: the four segmentation modes, coarse chunking and
//!   reassembly
//! - **API layer**: configuration, input handling and the [`Segmenter`]
//!
//! # Example
//!
//! ```rust
//! use segmark_core::{ChunkKind, Segmenter};
//!
//! let segmenter = Segmenter::new();
//! let output = segmenter.segment("Text with `inline code` example.");
//!
//! assert_eq!(output.texts(), vec!["Text with", "`inline code`", "example."]);
//! assert_eq!(output.chunks[1].kind, ChunkKind::Code);
//! assert!(!output.chunks[1].translatable);
//! assert_eq!(output.report.total_chunks, 3);
//! ```

pub mod api;
pub mod application;
pub mod domain;

pub use api::{Config, ConfigBuilder, Error, Input, Mode, Output, Result, Segmenter};
pub use application::{coarse_chunks, reassemble, CoarseChunker};
pub use domain::{Chunk, ChunkKind, ListItemPolicy, Report};

/// Segment `text` with the default configuration (`smart`, 50/500)
pub fn segment_text(text: &str) -> Output {
    Segmenter::new().segment(text)
}

/// Segment `text` in `mode` with otherwise default settings
pub fn segment_text_with_mode(text: &str, mode: Mode) -> Output {
    Segmenter::with_mode(mode).segment(text)
}
