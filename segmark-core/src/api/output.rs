//! Output types for the segmentation API

use crate::api::{Error, Result};
use crate::application::reassemble;
use crate::domain::{Chunk, Report};
use serde::Serialize;
use std::borrow::Cow;

/// Ordered chunks together with their summary
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Chunks in input order
    pub chunks: Vec<Chunk>,
    /// Counts derived from `chunks`
    pub report: Report,
}

impl Output {
    pub(crate) fn from_chunks(chunks: Vec<Chunk>) -> Self {
        let report = Report::from_chunks(&chunks);
        Self { chunks, report }
    }

    /// Chunks that should be sent for transformation
    pub fn translatable(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(|c| c.translatable)
    }

    /// Chunk texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Rebuild `input` with each chunk replaced by `replace(chunk)`
    ///
    /// `input` must be the text these chunks were produced from.
    pub fn reassemble<'a, F>(&'a self, input: &str, replace: F) -> Result<String>
    where
        F: FnMut(&'a Chunk) -> Cow<'a, str>,
    {
        reassemble(input, &self.chunks, replace)
    }

    /// Serialize chunks and report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Infrastructure(format!("Failed to serialize output: {e}")))
    }
}
