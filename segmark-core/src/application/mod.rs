//! Application layer: the segmentation modes
//!
//! Every mode shares one contract, `segment(&str) -> Vec<Chunk>`, and is
//! selected through [`Strategy`]. The coarse chunker and the reassembly
//! helper build on the same domain pieces for callers that work on whole
//! documents.
//!
//! # Example
//!
//! ```rust
//! use segmark_core::application::{LineSegmenter, Strategy};
//!
//! let strategy = Strategy::Line(LineSegmenter);
//! let chunks = strategy.segment("Line 1\n\nLine 2");
//! assert_eq!(chunks.len(), 2);
//! ```

pub mod coarse;
pub mod line;
pub mod reassembly;
pub mod smart;
pub mod subtitle;
pub mod symbol;

pub use coarse::{code_fence_balanced, coarse_chunks, CoarseChunker};
pub use line::LineSegmenter;
pub use reassembly::reassemble;
pub use smart::SmartSegmenter;
pub use subtitle::SubtitleSegmenter;
pub use symbol::SymbolSegmenter;

use crate::domain::Chunk;

/// A configured segmentation algorithm
#[derive(Debug, Clone)]
pub enum Strategy {
    Smart(SmartSegmenter),
    Line(LineSegmenter),
    Symbol(SymbolSegmenter),
    Subtitle(SubtitleSegmenter),
}

impl Strategy {
    /// Segment `text` into ordered chunks
    pub fn segment(&self, text: &str) -> Vec<Chunk> {
        match self {
            Strategy::Smart(s) => s.segment(text),
            Strategy::Line(s) => s.segment(text),
            Strategy::Symbol(s) => s.segment(text),
            Strategy::Subtitle(s) => s.segment(text),
        }
    }
}
