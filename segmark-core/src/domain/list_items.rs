//! Detection of short list items that stay whole
//!
//! A bullet or numbered line that embeds a few inline constructs (a code
//! span, a link) reads as one sentence. Breaking it into text and atomic
//! pieces would lose context, so such lines are kept as a single text chunk.

use super::patterns::Scanner;
use super::text::{char_len, line_spans, trim_span};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Default upper bound on inline constructs in a protected list item
pub const DEFAULT_MAX_INLINE_ELEMENTS: usize = 8;

/// Thresholds for the list-item override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemPolicy {
    /// Whether the override runs at all
    pub enabled: bool,
    /// Longest line (in characters) that may be protected; never more than
    /// the maximum chunk size, which is also used when unset
    pub max_line_len: Option<usize>,
    /// Most inline constructs a protected line may contain
    pub max_inline_elements: usize,
}

impl Default for ListItemPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            max_line_len: None,
            max_inline_elements: DEFAULT_MAX_INLINE_ELEMENTS,
        }
    }
}

impl ListItemPolicy {
    /// A policy that never protects anything
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Find list-item lines that must be emitted whole
///
/// Returned spans are trimmed, sorted and disjoint.
pub fn protected_lines(
    text: &str,
    policy: &ListItemPolicy,
    max_chunk_size: usize,
) -> Vec<Range<usize>> {
    if !policy.enabled {
        return Vec::new();
    }
    let limit = policy
        .max_line_len
        .map_or(max_chunk_size, |len| len.min(max_chunk_size));

    line_spans(text)
        .map(|line| trim_span(text, line))
        .filter(|span| is_protected(&text[span.clone()], policy, limit))
        .collect()
}

fn is_protected(line: &str, policy: &ListItemPolicy, limit: usize) -> bool {
    if !has_list_marker(line) || char_len(line) > limit || has_block_opener(line) {
        return false;
    }

    let mut count = 0;
    for found in Scanner::new(line) {
        if !found.kind.is_inline() {
            return false;
        }
        count += 1;
        if count > policy.max_inline_elements {
            return false;
        }
    }
    count > 0
}

/// `-`, `*` or `+` bullet, or `N.` / `N)`, followed by whitespace
fn has_list_marker(line: &str) -> bool {
    let rest = if let Some(rest) = line.strip_prefix(['-', '*', '+']) {
        rest
    } else {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return false;
        }
        match line[digits..].strip_prefix(['.', ')']) {
            Some(rest) => rest,
            None => return false,
        }
    };
    rest.starts_with([' ', '\t'])
}

/// Lines that open a construct spanning past the line end
fn has_block_opener(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    line.contains("```")
        || line.contains("~~~")
        || lower.contains("<pre")
        || lower.contains("</pre")
        || lower.matches("<code").count() != lower.matches("</code").count()
}
