//! Rebuilding a document from its chunks

use crate::api::{Error, Result};
use crate::domain::Chunk;
use std::borrow::Cow;

/// Rebuild `input`, substituting each chunk with `replace(chunk)`
///
/// Text between chunks is copied from `input` unchanged. Chunks must be
/// ordered, non-overlapping and lie on character boundaries of `input`.
pub fn reassemble<'c, F>(input: &str, chunks: &'c [Chunk], mut replace: F) -> Result<String>
where
    F: FnMut(&'c Chunk) -> Cow<'c, str>,
{
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    for (i, chunk) in chunks.iter().enumerate() {
        if chunk.start < cursor || chunk.end < chunk.start || chunk.end > input.len() {
            return Err(Error::InvalidInput(format!(
                "chunk {i} spans {}..{}, expected a range within {cursor}..{}",
                chunk.start,
                chunk.end,
                input.len()
            )));
        }
        let gap = input.get(cursor..chunk.start).ok_or_else(|| {
            Error::InvalidInput(format!("chunk {i} does not start on a character boundary"))
        })?;
        if !input.is_char_boundary(chunk.end) {
            return Err(Error::InvalidInput(format!(
                "chunk {i} does not end on a character boundary"
            )));
        }
        out.push_str(gap);
        out.push_str(&replace(chunk));
        cursor = chunk.end;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}
