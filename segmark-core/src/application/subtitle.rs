//! SubRip (`.srt`) entry parser
//!
//! Each entry is an index line, a timing line and zero or more content lines
//! terminated by a blank line. The index and timing lines form one atomic
//! `timing` chunk; the content lines form one `text` chunk.

use crate::domain::text::{line_spans, trim_span};
use crate::domain::{Chunk, ChunkKind};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

const BOM: char = '\u{feff}';

fn timing_regex() -> &'static Regex {
    static TIMING: OnceLock<Regex> = OnceLock::new();
    TIMING.get_or_init(|| {
        Regex::new(
            r"^\d{2,}:\d{2}:\d{2},\d{3}[ \t]*-->[ \t]*\d{2,}:\d{2}:\d{2},\d{3}(?:[ \t]+\S.*)?$",
        )
        .expect("timing pattern is valid")
    })
}

#[derive(Debug)]
enum State {
    /// Before the first entry
    ExpectIndex,
    /// Index seen, timing line must follow
    ExpectTiming { index: Range<usize> },
    /// Collecting content lines
    ReadContent {
        header: Range<usize>,
        content: Option<Range<usize>>,
    },
    /// Between entries
    Blank,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubtitleSegmenter;

impl SubtitleSegmenter {
    pub fn segment(&self, text: &str) -> Vec<Chunk> {
        if text.trim().is_empty() {
            // Downstream consumers expect exactly one chunk for empty subtitles.
            return vec![Chunk {
                text: String::new(),
                kind: ChunkKind::Text,
                translatable: true,
                start: 0,
                end: 0,
            }];
        }

        let lines: Vec<Range<usize>> = line_spans(text).map(|l| trim_span(text, l)).collect();
        let mut chunks = Vec::new();
        let mut state = State::ExpectIndex;
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i].clone();
            state = match state {
                State::ExpectIndex => {
                    if line.is_empty() {
                        State::ExpectIndex
                    } else if let Some(index) = index_span(text, line) {
                        State::ExpectTiming { index }
                    } else {
                        return fallback(text, "input does not start with a subtitle index");
                    }
                }
                State::ExpectTiming { index } => {
                    if is_timing(&text[line.clone()]) {
                        State::ReadContent {
                            header: index.start..line.end,
                            content: None,
                        }
                    } else if chunks.is_empty() {
                        return fallback(text, "subtitle index is not followed by a timing line");
                    } else {
                        tracing::debug!(line = i + 1, "skipping subtitle index without timing");
                        // Re-read this line between entries.
                        state = State::Blank;
                        continue;
                    }
                }
                State::ReadContent { header, content } => {
                    if line.is_empty() {
                        emit(text, header, content, &mut chunks);
                        State::Blank
                    } else if starts_entry(text, &lines, i) {
                        emit(text, header, content, &mut chunks);
                        state = State::Blank;
                        continue;
                    } else {
                        let content = match content {
                            Some(c) => c.start..line.end,
                            None => line,
                        };
                        State::ReadContent {
                            header,
                            content: Some(content),
                        }
                    }
                }
                State::Blank => {
                    if line.is_empty() {
                        State::Blank
                    } else if let Some(index) = index_span(text, line.clone()) {
                        State::ExpectTiming { index }
                    } else {
                        tracing::debug!(
                            line = i + 1,
                            content = &text[line],
                            "skipping stray subtitle line"
                        );
                        State::Blank
                    }
                }
            };
            i += 1;
        }

        match state {
            State::ReadContent { header, content } => emit(text, header, content, &mut chunks),
            State::ExpectTiming { .. } if chunks.is_empty() => {
                return fallback(text, "subtitle index is not followed by a timing line");
            }
            State::ExpectTiming { index } => {
                tracing::debug!(offset = index.start, "dropping trailing subtitle index");
            }
            State::ExpectIndex | State::Blank => {}
        }

        tracing::debug!(entries = chunks.len(), "parsed subtitle entries");
        chunks
    }
}

fn emit(text: &str, header: Range<usize>, content: Option<Range<usize>>, out: &mut Vec<Chunk>) {
    out.push(Chunk::atomic(ChunkKind::Timing, &text[header.clone()], header));
    if let Some(content) = content {
        out.push(Chunk::text(&text[content.clone()], content));
    }
}

fn fallback(text: &str, reason: &str) -> Vec<Chunk> {
    tracing::debug!(reason, "treating subtitle input as plain text");
    let span = trim_span(text, 0..text.len());
    vec![Chunk::text(&text[span.clone()], span)]
}

/// Span of a bare decimal index line, excluding a leading byte order mark
fn index_span(text: &str, line: Range<usize>) -> Option<Range<usize>> {
    let raw = &text[line.clone()];
    let (digits, start) = match raw.strip_prefix(BOM) {
        Some(rest) => (rest, line.start + BOM.len_utf8()),
        None => (raw, line.start),
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(start..line.end)
}

fn is_timing(line: &str) -> bool {
    timing_regex().is_match(line)
}

/// An index line immediately followed by a timing line
fn starts_entry(text: &str, lines: &[Range<usize>], i: usize) -> bool {
    index_span(text, lines[i].clone()).is_some()
        && lines
            .get(i + 1)
            .is_some_and(|next| is_timing(&text[next.clone()]))
}
