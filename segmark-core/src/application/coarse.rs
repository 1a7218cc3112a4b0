//! Size-targeted document chunking
//!
//! Coarser than [`SmartSegmenter`](super::SmartSegmenter): the document is cut
//! into blocks near a target size for whole-document passes such as
//! terminology extraction, with no special handling of code or links.

use crate::api::{Config, Error, Result};
use crate::domain::text::char_len;
use crate::domain::PlainTextSplitter;

const JOIN: &str = "\n\n";
const FENCE: &str = "```";

/// Splits a document into blocks of at most `target_size` characters and
/// folds small leftovers into their neighbours
#[derive(Debug, Clone, Copy)]
pub struct CoarseChunker {
    target_size: usize,
    min_size: usize,
}

impl CoarseChunker {
    pub fn new(target_size: usize, min_size: usize) -> Result<Self> {
        if target_size == 0 {
            return Err(Error::Configuration(
                "target_size must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            target_size,
            min_size,
        })
    }

    /// Use a segmentation configuration's bounds: `max_chunk_size` as the
    /// target and `min_chunk_size` as the small-chunk threshold
    pub fn from_config(config: &Config) -> Self {
        Self {
            target_size: config.max_chunk_size,
            min_size: config.min_chunk_size,
        }
    }

    pub fn chunk(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        if char_len(trimmed) <= self.min_size {
            return vec![trimmed.to_string()];
        }

        let pieces = PlainTextSplitter::new(self.target_size).split(trimmed);
        let last = pieces.len().saturating_sub(1);

        let mut chunks = Vec::new();
        let mut pending = String::new();
        let mut pending_len = 0;
        for (i, piece) in pieces.into_iter().enumerate() {
            let piece_len = char_len(piece);
            if pending.is_empty() {
                pending.push_str(piece);
                pending_len = piece_len;
            } else if pending_len + JOIN.len() + piece_len <= self.target_size {
                pending.push_str(JOIN);
                pending.push_str(piece);
                pending_len += JOIN.len() + piece_len;
            } else if piece_len < self.min_size && i != last {
                chunks.push(std::mem::take(&mut pending));
                pending.push_str(piece);
                pending_len = piece_len;
            } else {
                chunks.push(std::mem::take(&mut pending));
                chunks.push(piece.to_string());
                pending_len = 0;
            }
        }
        if !pending.is_empty() {
            chunks.push(pending);
        }

        for (i, chunk) in chunks.iter().enumerate() {
            if !code_fence_balanced(chunk) {
                tracing::warn!(chunk = i, "chunk contains an unbalanced code fence");
            }
        }
        tracing::debug!(chunks = chunks.len(), target = self.target_size, "coarse chunking done");
        chunks
    }
}

/// Whether `chunk` holds an even number of ```` ``` ```` fences
pub fn code_fence_balanced(chunk: &str) -> bool {
    chunk.matches(FENCE).count() % 2 == 0
}

/// Chunk `text` into blocks near `target_size` characters
pub fn coarse_chunks(text: &str, target_size: usize, min_size: usize) -> Result<Vec<String>> {
    Ok(CoarseChunker::new(target_size, min_size)?.chunk(text))
}
