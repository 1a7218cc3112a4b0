//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmark_core::Output;
use std::io::Write;
use std::path::Path;

/// Markdown formatter - a numbered list of chunks per file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
    translatable_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
            translatable_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_file(&mut self, path: &Path, output: &Output) -> Result<()> {
        writeln!(self.writer, "## {}", path.display())?;
        writeln!(self.writer)?;
        for (i, chunk) in output.chunks.iter().enumerate() {
            // Continuation lines are indented to stay inside the list item
            let body = chunk.text.replace('\n', "\n   ");
            writeln!(self.writer, "{}. **{}** {}", i + 1, chunk.kind, body)?;
        }
        writeln!(self.writer)?;

        self.chunk_count += output.report.total_chunks;
        self.translatable_count += output.report.translatable_chunks;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total chunks: {} ({} translatable)*",
            self.chunk_count, self.translatable_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
