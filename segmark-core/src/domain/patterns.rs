//! Pattern registry for non-linguistic constructs
//!
//! Each [`PatternKind`] owns a detector that reports the leftmost match at or
//! after a byte position. [`Scanner`] walks the input left to right and, at
//! every step, picks the candidate with the earliest start; ties go to the
//! detector listed first in [`PatternKind::REGISTRY`].

use super::chunk::ChunkKind;
use super::text::trim_span;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

const BACKTICK_FENCE: &str = "```";
const TILDE_FENCE: &str = "~~~";

/// A recognised construct, declared in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternKind {
    /// ```` ``` ```` or `~~~` fenced block
    FencedCode,
    /// `<pre>…</pre>`
    HtmlBlockCode,
    /// `<code>…</code>`
    HtmlInlineCode,
    /// `` `code` ``
    InlineCode,
    /// `![alt](target)`
    MarkdownImage,
    /// `<img …>`
    HtmlImage,
    /// `[text](target)`
    MarkdownLink,
    /// `scheme://…` or `www.…`
    StandaloneUrl,
    /// `[^id]: note`
    FootnoteLine,
}

impl PatternKind {
    /// All detectors, highest priority first
    pub const REGISTRY: [PatternKind; 9] = [
        PatternKind::FencedCode,
        PatternKind::HtmlBlockCode,
        PatternKind::HtmlInlineCode,
        PatternKind::InlineCode,
        PatternKind::MarkdownImage,
        PatternKind::HtmlImage,
        PatternKind::MarkdownLink,
        PatternKind::StandaloneUrl,
        PatternKind::FootnoteLine,
    ];

    /// Position in the registry; lower wins ties
    pub fn priority(self) -> usize {
        self as usize
    }

    /// Kind of chunk emitted for a match
    pub fn chunk_kind(self) -> ChunkKind {
        match self {
            PatternKind::FencedCode
            | PatternKind::HtmlBlockCode
            | PatternKind::HtmlInlineCode
            | PatternKind::InlineCode => ChunkKind::Code,
            PatternKind::MarkdownImage | PatternKind::HtmlImage => ChunkKind::Image,
            PatternKind::MarkdownLink | PatternKind::StandaloneUrl => ChunkKind::Url,
            PatternKind::FootnoteLine => ChunkKind::Footnote,
        }
    }

    /// Short constructs that may stay embedded in a list item
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            PatternKind::InlineCode
                | PatternKind::HtmlInlineCode
                | PatternKind::MarkdownLink
                | PatternKind::StandaloneUrl
        )
    }

    /// Leftmost match starting at or after `pos`, trimmed of surrounding
    /// whitespace
    pub fn find_at(self, text: &str, pos: usize) -> Option<Range<usize>> {
        let span = match self {
            PatternKind::FencedCode => find_fence(text, pos),
            PatternKind::FootnoteLine => footnote_regex()
                .captures_at(text, pos)
                .and_then(|caps| caps.get(1))
                .map(|m| m.range()),
            other => other.regex().find_at(text, pos).map(|m| m.range()),
        }?;
        let span = trim_span(text, span);
        (!span.is_empty()).then_some(span)
    }

    fn regex(self) -> &'static Regex {
        match self {
            PatternKind::HtmlBlockCode => compiled(&HTML_PRE, r"(?is)<pre\b[^>]*>.*?</pre\s*>"),
            PatternKind::HtmlInlineCode => {
                compiled(&HTML_CODE, r"(?is)<code\b[^>]*>.*?</code\s*>")
            }
            PatternKind::InlineCode => compiled(&INLINE_CODE, r"`[^`\n]+`"),
            // Targets may hold one level of balanced parentheses
            PatternKind::MarkdownImage => {
                compiled(&MD_IMAGE, r"!\[[^\]\n]*\]\((?:[^()\n]|\([^()\n]*\))*\)")
            }
            PatternKind::HtmlImage => compiled(&HTML_IMAGE, r"(?i)<img\b[^>]*>"),
            PatternKind::MarkdownLink => {
                compiled(&MD_LINK, r"\[[^\]\n]*\]\((?:[^()\n]|\([^()\n]*\))*\)")
            }
            PatternKind::StandaloneUrl => compiled(
                &STANDALONE_URL,
                r"(?i)\b(?:[a-z][a-z0-9+\-]*://|www\.)\S+",
            ),
            PatternKind::FencedCode | PatternKind::FootnoteLine => {
                unreachable!("{self:?} is not a single-regex detector")
            }
        }
    }
}

static HTML_PRE: OnceLock<Regex> = OnceLock::new();
static HTML_CODE: OnceLock<Regex> = OnceLock::new();
static INLINE_CODE: OnceLock<Regex> = OnceLock::new();
static MD_IMAGE: OnceLock<Regex> = OnceLock::new();
static HTML_IMAGE: OnceLock<Regex> = OnceLock::new();
static MD_LINK: OnceLock<Regex> = OnceLock::new();
static STANDALONE_URL: OnceLock<Regex> = OnceLock::new();
static FOOTNOTE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("detector patterns are valid regexes"))
}

fn footnote_regex() -> &'static Regex {
    compiled(&FOOTNOTE, r"(?m)^[ \t]*(\[\^[^\]\n]+\]:[^\n]*)")
}

/// Find the earliest fence at or after `pos`
///
/// A fence opens with a run of three or more backticks or tildes and closes
/// at the next run of the same character that is at least as long. When no
/// closing run exists, only the opening fence line is reported so that the
/// body is still scanned as ordinary text.
fn find_fence(text: &str, pos: usize) -> Option<Range<usize>> {
    let rest = &text[pos..];
    let (offset, marker) = match (rest.find(BACKTICK_FENCE), rest.find(TILDE_FENCE)) {
        (Some(b), Some(t)) if t < b => (t, TILDE_FENCE),
        (Some(b), _) => (b, BACKTICK_FENCE),
        (None, Some(t)) => (t, TILDE_FENCE),
        (None, None) => return None,
    };

    let fence_byte = marker.as_bytes()[0];
    let run_len = |from: usize| {
        text.as_bytes()[from..]
            .iter()
            .take_while(|&&b| b == fence_byte)
            .count()
    };

    let open = pos + offset;
    let open_len = run_len(open);
    let body = open + open_len;
    let closing = marker[..1].repeat(open_len);
    match text[body..].find(&closing) {
        Some(close) => {
            let close = body + close;
            Some(open..close + run_len(close))
        }
        None => {
            tracing::debug!(offset = open, marker, open_len, "unterminated code fence");
            let line_end = text[open..].find('\n').map_or(text.len(), |i| open + i);
            Some(open..line_end)
        }
    }
}

/// A detector hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Detector that produced the match
    pub kind: PatternKind,
    /// Byte span of the construct
    pub span: Range<usize>,
}

/// Cached detector state: not yet searched, or the last search result
#[derive(Debug, Clone)]
enum Slot {
    Stale,
    Found(Range<usize>),
    Exhausted,
}

/// Left-to-right scanner yielding non-overlapping matches
///
/// Matches starting inside a protected range are ignored; the scanner jumps
/// past the range and keeps going.
#[derive(Debug)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    protected: &'a [Range<usize>],
    slots: [Slot; 9],
}

impl<'a> Scanner<'a> {
    /// Scan the whole of `text`
    pub fn new(text: &'a str) -> Self {
        Self::with_protected(text, &[])
    }

    /// Scan `text`, never starting a match inside `protected` (sorted, disjoint)
    pub fn with_protected(text: &'a str, protected: &'a [Range<usize>]) -> Self {
        Self {
            text,
            pos: 0,
            protected,
            slots: std::array::from_fn(|_| Slot::Stale),
        }
    }

    fn candidate(&mut self, index: usize) -> Option<Range<usize>> {
        let fresh = match &self.slots[index] {
            Slot::Exhausted => return None,
            Slot::Found(span) if span.start >= self.pos => return Some(span.clone()),
            _ => PatternKind::REGISTRY[index].find_at(self.text, self.pos),
        };
        self.slots[index] = match &fresh {
            Some(span) => Slot::Found(span.clone()),
            None => Slot::Exhausted,
        };
        fresh
    }

    fn protected_end(&self, offset: usize) -> Option<usize> {
        let idx = self.protected.partition_point(|r| r.end <= offset);
        self.protected
            .get(idx)
            .filter(|r| r.start <= offset && offset < r.end)
            .map(|r| r.end)
    }
}

impl Iterator for Scanner<'_> {
    type Item = PatternMatch;

    fn next(&mut self) -> Option<PatternMatch> {
        loop {
            if self.pos >= self.text.len() {
                return None;
            }

            let mut best: Option<PatternMatch> = None;
            for (index, kind) in PatternKind::REGISTRY.into_iter().enumerate() {
                if let Some(span) = self.candidate(index) {
                    if best.as_ref().map_or(true, |b| span.start < b.span.start) {
                        best = Some(PatternMatch { kind, span });
                    }
                }
            }

            let found = best?;
            if let Some(end) = self.protected_end(found.span.start) {
                self.pos = end;
                continue;
            }
            self.pos = found.span.end;
            return Some(found);
        }
    }
}
