//! Input sources accepted by the segmenter

use crate::api::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of the text to segment
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes, must be UTF-8
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish_non_exhaustive(),
        }
    }
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input::Bytes(bytes.into())
    }

    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Resolve the source to text, rejecting anything that is not UTF-8
    pub(crate) fn into_text(self) -> Result<String, Error> {
        let (bytes, origin) = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => (bytes, "byte input".to_string()),
            Input::File(path) => {
                let bytes = std::fs::read(&path).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read file {}: {e}", path.display()))
                })?;
                (bytes, path.display().to_string())
            }
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read from reader: {e}"))
                })?;
                (buffer, "reader".to_string())
            }
        };

        String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("{origin} is not valid UTF-8: {e}")))
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}
