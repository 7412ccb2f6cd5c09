//! File reading
//!
//! Files are read whole as strict UTF-8. Line endings are normalized so that
//! `\r\n` and lone `\r` both read as `\n`. Any failure (missing file,
//! permission, invalid UTF-8) becomes a [`ReadFailure`] value: callers render it
//! inline and keep going.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a file's content could not be obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ReadFailure {
    pub message: String,
}

impl ReadFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ReadFailure {
    fn from(e: std::io::Error) -> Self {
        ReadFailure::new(e.to_string())
    }
}

/// Read a file as UTF-8 text with universal newlines
pub fn read_text(path: &Path) -> Result<String, ReadFailure> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| ReadFailure::new(format!("invalid UTF-8: {}", e.utf8_error())))?;
    Ok(normalize_newlines(content))
}

/// Convert `\r\n` and `\r` line endings to `\n`
pub fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}
