//! Fatal errors
//!
//! Per-file read failures never show up here: they are carried as values inside
//! [`FileRecord`](crate::core::model::FileRecord) and rendered inline. Only the
//! conditions that stop a run are modeled as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    /// The root directory itself could not be listed
    #[error("cannot list root directory {path:?}")]
    ListRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output document could not be written
    #[error("cannot write output file {path:?}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is missing or malformed
    #[error("invalid configuration {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Write an output document, mapping failures to [`CollectError::WriteOutput`]
pub fn write_output(path: &std::path::Path, contents: &str) -> Result<(), CollectError> {
    std::fs::write(path, contents).map_err(|source| CollectError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
