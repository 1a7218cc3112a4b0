//! Recursive size-bounded splitting of prose
//!
//! A span longer than the limit is cut into units by the coarsest strategy
//! first (paragraphs). Units are packed greedily back up to the limit; a unit
//! that is still too large is handed to the next strategy in
//! [`SplitStrategy::HIERARCHY`], ending with a hard character cut.

use super::text::{char_len, pieces_between, trim_span};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// One level of the fallback hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Blank-line separated blocks
    Paragraph,
    /// Runs ending in `.`, `!` or `?` followed by whitespace
    Sentence,
    /// Whitespace separated words
    Word,
    /// Fixed-width character windows
    HardCut,
}

impl SplitStrategy {
    /// Strategies from coarsest to finest
    pub const HIERARCHY: [SplitStrategy; 4] = [
        SplitStrategy::Paragraph,
        SplitStrategy::Sentence,
        SplitStrategy::Word,
        SplitStrategy::HardCut,
    ];

    /// Separator regex for this level; `None` for the hard cut
    fn separator(self) -> Option<&'static Regex> {
        static PARAGRAPH: OnceLock<Regex> = OnceLock::new();
        static SENTENCE: OnceLock<Regex> = OnceLock::new();
        static WORD: OnceLock<Regex> = OnceLock::new();

        let (cell, pattern) = match self {
            SplitStrategy::Paragraph => (&PARAGRAPH, r"\n[ \t\r]*\n"),
            SplitStrategy::Sentence => (&SENTENCE, r"[.!?]+(\s+)"),
            SplitStrategy::Word => (&WORD, r"\s+"),
            SplitStrategy::HardCut => return None,
        };
        Some(cell.get_or_init(|| Regex::new(pattern).expect("separator patterns are valid")))
    }

    /// Trimmed, non-empty units of `span`
    fn units(self, text: &str, span: Range<usize>) -> Vec<Range<usize>> {
        let Some(separator) = self.separator() else {
            return Vec::new();
        };
        let slice = &text[span.clone()];
        let offset = span.start;
        match self {
            // Keep the terminator with its sentence; only the whitespace separates.
            SplitStrategy::Sentence => {
                let seps = separator
                    .captures_iter(slice)
                    .filter_map(|caps| caps.get(1))
                    .map(|m| offset + m.start()..offset + m.end());
                pieces_between(text, span, seps)
            }
            _ => {
                let seps = separator
                    .find_iter(slice)
                    .map(|m| offset + m.start()..offset + m.end());
                pieces_between(text, span, seps)
            }
        }
    }
}

/// Splits prose into spans of at most `max_chars` characters
#[derive(Debug, Clone, Copy)]
pub struct PlainTextSplitter {
    max_chars: usize,
}

impl PlainTextSplitter {
    /// Create a splitter; a zero limit is treated as one
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    /// Size limit in characters
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split the whole of `text`
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split_span(text, 0..text.len())
            .into_iter()
            .map(|span| &text[span])
            .collect()
    }

    /// Split one span of `text` into trimmed, ordered spans
    pub fn split_span(&self, text: &str, span: Range<usize>) -> Vec<Range<usize>> {
        let span = trim_span(text, span);
        if span.is_empty() {
            return Vec::new();
        }
        if char_len(&text[span.clone()]) <= self.max_chars {
            return vec![span];
        }
        let mut out = Vec::new();
        self.split_with(text, span, &SplitStrategy::HIERARCHY, &mut out);
        out
    }

    fn split_with(
        &self,
        text: &str,
        span: Range<usize>,
        strategies: &[SplitStrategy],
        out: &mut Vec<Range<usize>>,
    ) {
        let Some((&strategy, finer)) = strategies.split_first() else {
            self.hard_cut(text, span, out);
            return;
        };
        if strategy == SplitStrategy::HardCut {
            self.hard_cut(text, span, out);
            return;
        }

        tracing::trace!(?strategy, start = span.start, end = span.end, "splitting span");

        let mut current: Option<(Range<usize>, usize)> = None;
        for unit in strategy.units(text, span) {
            let unit_len = char_len(&text[unit.clone()]);
            if unit_len > self.max_chars {
                if let Some((packed, _)) = current.take() {
                    out.push(packed);
                }
                self.split_with(text, unit, finer, out);
                continue;
            }

            current = match current.take() {
                Some((packed, len)) => {
                    let joined = len + char_len(&text[packed.end..unit.start]) + unit_len;
                    if joined <= self.max_chars {
                        Some((packed.start..unit.end, joined))
                    } else {
                        out.push(packed);
                        Some((unit, unit_len))
                    }
                }
                None => Some((unit, unit_len)),
            };
        }
        if let Some((packed, _)) = current {
            out.push(packed);
        }
    }

    fn hard_cut(&self, text: &str, span: Range<usize>, out: &mut Vec<Range<usize>>) {
        let slice = &text[span.clone()];
        let mut window_start = 0;
        let mut count = 0;
        for (idx, _) in slice.char_indices() {
            if count == self.max_chars {
                push_piece(text, span.start + window_start..span.start + idx, out);
                window_start = idx;
                count = 0;
            }
            count += 1;
        }
        push_piece(text, span.start + window_start..span.end, out);
    }
}

fn push_piece(text: &str, span: Range<usize>, out: &mut Vec<Range<usize>>) {
    let span = trim_span(text, span);
    if !span.is_empty() {
        out.push(span);
    }
}
