//! Splitting on literal separators

use crate::domain::text::{pieces_between, trim_span};
use crate::domain::Chunk;
use std::ops::Range;

/// Splits on each separator in turn, refining the fragments of the previous
/// one
#[derive(Debug, Clone)]
pub struct SymbolSegmenter {
    separators: Vec<String>,
}

impl SymbolSegmenter {
    pub fn new(separators: Vec<String>) -> Self {
        Self { separators }
    }

    pub fn segment(&self, text: &str) -> Vec<Chunk> {
        let mut spans: Vec<Range<usize>> = vec![0..text.len()];
        for separator in self.separators.iter().filter(|s| !s.is_empty()) {
            spans = spans
                .into_iter()
                .flat_map(|span| {
                    let offset = span.start;
                    let hits: Vec<Range<usize>> = text[span.clone()]
                        .match_indices(separator.as_str())
                        .map(|(i, s)| offset + i..offset + i + s.len())
                        .collect();
                    pieces_between(text, span, hits)
                })
                .collect();
        }

        spans
            .into_iter()
            .map(|span| trim_span(text, span))
            .filter(|span| !span.is_empty())
            .map(|span| Chunk::text(&text[span.clone()], span))
            .collect()
    }
}
