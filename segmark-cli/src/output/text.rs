//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmark_core::Output;
use std::io::Write;
use std::path::Path;

/// Plain text formatter - one block per chunk, prefixed by its kind
///
/// Non-translatable chunks carry a `*` after the kind marker.
pub struct TextFormatter<W: Write> {
    writer: W,
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            headers: false,
        }
    }

    /// Print a `==> path <==` line before each file
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_file(&mut self, path: &Path, output: &Output) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "==> {} <==", path.display())?;
        }
        for chunk in &output.chunks {
            let marker = if chunk.translatable { "" } else { "*" };
            writeln!(self.writer, "[{}{}] {}", chunk.kind, marker, chunk.text)?;
        }
        if self.headers {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
