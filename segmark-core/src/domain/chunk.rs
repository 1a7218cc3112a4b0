//! Chunk types produced by every segmentation mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Minimum trimmed length (in characters) for a text chunk to be translatable
pub const MIN_TRANSLATABLE_CHARS: usize = 2;

/// Structural classification of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    /// Prose that may be sent to a linguistic transformation step
    Text,
    /// Fenced, inline or HTML code
    Code,
    /// Markdown or HTML image
    Image,
    /// Markdown link or standalone URL
    Url,
    /// Footnote reference line (`[^id]: ...`)
    Footnote,
    /// Subtitle index and timing header
    Timing,
}

impl ChunkKind {
    /// All kinds in report order
    pub const ALL: [ChunkKind; 6] = [
        ChunkKind::Text,
        ChunkKind::Code,
        ChunkKind::Image,
        ChunkKind::Url,
        ChunkKind::Footnote,
        ChunkKind::Timing,
    ];

    /// Lowercase name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkKind::Text => "text",
            ChunkKind::Code => "code",
            ChunkKind::Image => "image",
            ChunkKind::Url => "url",
            ChunkKind::Footnote => "footnote",
            ChunkKind::Timing => "timing",
        }
    }

    /// Whether chunks of this kind are indivisible
    pub fn is_atomic(&self) -> bool {
        !matches!(self, ChunkKind::Text)
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic, typed, ordered unit of segmented text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk content, an exact slice of the input
    pub text: String,
    /// Structural classification
    pub kind: ChunkKind,
    /// Whether the chunk should undergo linguistic transformation
    pub translatable: bool,
    /// Byte offset of `text` in the input
    pub start: usize,
    /// Byte offset one past the end of `text` in the input
    pub end: usize,
}

impl Chunk {
    /// Create a text chunk, applying the short-text override
    pub fn text(text: impl Into<String>, span: Range<usize>) -> Self {
        let text = text.into();
        let translatable = text.trim().chars().count() >= MIN_TRANSLATABLE_CHARS;
        Self {
            text,
            kind: ChunkKind::Text,
            translatable,
            start: span.start,
            end: span.end,
        }
    }

    /// Create a non-translatable chunk of an atomic kind
    pub fn atomic(kind: ChunkKind, text: impl Into<String>, span: Range<usize>) -> Self {
        debug_assert!(kind.is_atomic(), "text chunks are not atomic");
        Self {
            text: text.into(),
            kind,
            translatable: false,
            start: span.start,
            end: span.end,
        }
    }

    /// Byte span of the chunk in the input
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the chunk in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the chunk is atomic (never split or merged)
    pub fn is_atomic(&self) -> bool {
        self.kind.is_atomic()
    }
}
