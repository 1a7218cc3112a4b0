//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmark_core::{Chunk, Output, Report};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// JSON formatter - an array with one entry per input file
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    files: Vec<serde_json::Value>,
}

/// Serialized shape of one file entry
#[derive(Debug, Serialize)]
struct FileEntry<'a> {
    file: String,
    chunks: &'a [Chunk],
    report: &'a Report,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            files: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_file(&mut self, path: &Path, output: &Output) -> Result<()> {
        let entry = FileEntry {
            file: path.display().to_string(),
            chunks: &output.chunks,
            report: &output.report,
        };
        self.files.push(serde_json::to_value(entry)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.files)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.files)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use segmark_core::segment_text;

    #[test]
    fn test_file_entries() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);

        let output = segment_text("See ![logo](logo.png) here.");
        formatter.format_file(Path::new("doc.md"), &output).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let entry = &value[0];
        assert_eq!(entry["file"], "doc.md");
        assert_eq!(entry["chunks"][1]["kind"], "image");
        assert_eq!(entry["chunks"][1]["translatable"], false);
        assert_eq!(entry["report"]["total_chunks"], 3);
        assert_eq!(entry["report"]["image_chunks"], 1);
        assert!(entry["report"].get("code_chunks").is_none());
    }

    #[test]
    fn test_empty_run_is_empty_array() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), true);
        formatter.finish().unwrap();
        assert_eq!(buffer.contents().trim(), "[]");
    }
}
