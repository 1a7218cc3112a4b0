//! Domain layer for content-aware segmentation
//!
//! Pure building blocks with no knowledge of modes or configuration: the
//! chunk model, the pattern registry and scanner, the list-item classifier,
//! the recursive prose splitter and the report tally.

pub mod chunk;
pub mod list_items;
pub mod patterns;
pub mod report;
pub mod splitter;
pub mod text;

pub use chunk::{Chunk, ChunkKind, MIN_TRANSLATABLE_CHARS};
pub use list_items::{protected_lines, ListItemPolicy, DEFAULT_MAX_INLINE_ELEMENTS};
pub use patterns::{PatternKind, PatternMatch, Scanner};
pub use report::Report;
pub use splitter::{PlainTextSplitter, SplitStrategy};
