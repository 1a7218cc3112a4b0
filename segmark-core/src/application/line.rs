//! One chunk per non-blank line

use crate::domain::text::{line_spans, trim_span};
use crate::domain::Chunk;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineSegmenter;

impl LineSegmenter {
    pub fn segment(&self, text: &str) -> Vec<Chunk> {
        line_spans(text)
            .map(|line| trim_span(text, line))
            .filter(|span| !span.is_empty())
            .map(|span| Chunk::text(&text[span.clone()], span))
            .collect()
    }
}
