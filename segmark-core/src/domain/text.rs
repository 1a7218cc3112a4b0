//! Span helpers shared by the segmenters
//!
//! All spans are byte ranges into the original input and always fall on
//! UTF-8 character boundaries. Sizes are measured in characters.

use std::ops::Range;

/// Number of characters (Unicode scalar values) in `s`
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Shrink `span` so that it starts and ends on non-whitespace
///
/// Returns an empty range positioned at the old end when the span is
/// whitespace only.
pub fn trim_span(text: &str, span: Range<usize>) -> Range<usize> {
    let slice = &text[span.clone()];
    let trimmed_start = slice.trim_start();
    if trimmed_start.is_empty() {
        return span.end..span.end;
    }
    let start = span.start + (slice.len() - trimmed_start.len());
    let end = start + trimmed_start.trim_end().len();
    start..end
}

/// Iterate the lines of `text` as byte spans, excluding the `\n` terminator
///
/// A trailing `\r` stays inside the span; callers trim it away.
pub fn line_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut offset = 0;
    text.split('\n').map(move |line| {
        let span = offset..offset + line.len();
        offset = span.end + 1;
        span
    })
}

/// Split `span` on every occurrence of `separators`, returning trimmed,
/// non-empty pieces
pub fn pieces_between(
    text: &str,
    span: Range<usize>,
    separators: impl IntoIterator<Item = Range<usize>>,
) -> Vec<Range<usize>> {
    let mut pieces = Vec::new();
    let mut cursor = span.start;
    for sep in separators {
        push_trimmed(text, cursor..sep.start, &mut pieces);
        cursor = sep.end;
    }
    push_trimmed(text, cursor..span.end, &mut pieces);
    pieces
}

fn push_trimmed(text: &str, span: Range<usize>, out: &mut Vec<Range<usize>>) {
    let trimmed = trim_span(text, span);
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}
