//! Structure-aware segmentation of Markdown/HTML flavoured text

use crate::domain::text::char_len;
use crate::domain::{protected_lines, Chunk, ListItemPolicy, PlainTextSplitter, Scanner};
use std::ops::Range;

/// Carves special constructs out as atomic chunks and sizes the prose
/// around them
#[derive(Debug, Clone)]
pub struct SmartSegmenter {
    max_chunk_size: usize,
    list_items: ListItemPolicy,
}

impl SmartSegmenter {
    pub fn new(max_chunk_size: usize, list_items: ListItemPolicy) -> Self {
        Self {
            max_chunk_size,
            list_items,
        }
    }

    pub fn segment(&self, text: &str) -> Vec<Chunk> {
        let protected = protected_lines(text, &self.list_items, self.max_chunk_size);
        let splitter = PlainTextSplitter::new(self.max_chunk_size);

        let mut chunks = Vec::new();
        let mut cursor = 0;
        for found in Scanner::with_protected(text, &protected) {
            let span = found.span;
            self.push_prose(text, cursor..span.start, &protected, &splitter, &mut chunks);
            chunks.push(Chunk::atomic(
                found.kind.chunk_kind(),
                &text[span.clone()],
                span.clone(),
            ));
            cursor = span.end;
        }
        self.push_prose(text, cursor..text.len(), &protected, &splitter, &mut chunks);

        tracing::debug!(
            candidates = chunks.len(),
            protected = protected.len(),
            "scanned input"
        );
        self.merge(text, chunks)
    }

    /// Emit prose, keeping protected list lines whole
    fn push_prose(
        &self,
        text: &str,
        span: Range<usize>,
        protected: &[Range<usize>],
        splitter: &PlainTextSplitter,
        out: &mut Vec<Chunk>,
    ) {
        if span.is_empty() {
            return;
        }

        let first = protected.partition_point(|line| line.start < span.start);
        let mut cursor = span.start;
        for line in protected[first..]
            .iter()
            .take_while(|line| line.end <= span.end)
        {
            push_split(text, cursor..line.start, splitter, out);
            out.push(Chunk::text(&text[line.clone()], line.clone()));
            cursor = line.end;
        }
        push_split(text, cursor..span.end, splitter, out);
    }

    /// Join neighbouring text chunks while the covered source span fits
    fn merge(&self, text: &str, chunks: Vec<Chunk>) -> Vec<Chunk> {
        let mut merged: Vec<Chunk> = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            if let Some(prev) = merged.last_mut() {
                if !prev.is_atomic() && !chunk.is_atomic() {
                    let gap = char_len(&text[prev.end..chunk.start]);
                    let joined = prev.char_len() + gap + chunk.char_len();
                    if joined <= self.max_chunk_size {
                        let span = prev.start..chunk.end;
                        *prev = Chunk::text(&text[span.clone()], span);
                        continue;
                    }
                }
            }
            merged.push(chunk);
        }
        merged
    }
}

fn push_split(text: &str, span: Range<usize>, splitter: &PlainTextSplitter, out: &mut Vec<Chunk>) {
    if span.is_empty() {
        return;
    }
    for piece in splitter.split_span(text, span) {
        out.push(Chunk::text(&text[piece.clone()], piece));
    }
}
