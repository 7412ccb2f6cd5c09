//! Data model
//!
//! [`FileRecord`] is one discovered file, read once and rendered into an output
//! document. [`RunReport`] collects what a run did so it can be printed as
//! progress text or as JSON.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::file_reader::{read_text, ReadFailure};
use crate::core::paths::{entry_name, make_relative};

/// A discovered file and the outcome of reading it
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path on disk
    pub path: PathBuf,

    /// Path relative to the aggregation root, using '/' as separator
    pub relative: String,

    /// File content, or why it could not be read
    pub content: Result<String, ReadFailure>,
}

impl FileRecord {
    /// Read a file and record it relative to `root`
    pub fn read(path: &Path, root: &Path) -> Self {
        let relative = make_relative(path, root).unwrap_or_else(|| entry_name(path));

        Self {
            path: path.to_path_buf(),
            relative,
            content: read_text(path),
        }
    }

    /// Base name of the file
    pub fn name(&self) -> String {
        entry_name(&self.path)
    }
}

/// Which tool produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Folders,
    Project,
}

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// An output file was written
    Written,
    /// A folder had no matching files; nothing was written for it
    Skipped,
    /// A file was collected into a document
    Collected,
    /// A file could not be read; an inline marker was rendered instead
    ReadError,
}

/// One entry of the run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub kind: EventKind,
    pub tool: Tool,

    /// Output file, folder, or source file the event is about
    pub path: String,

    /// Human-readable progress line
    pub message: String,

    /// Number of lines written (for `written` events of folder documents)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
}

impl RunEvent {
    pub fn new(
        kind: EventKind,
        tool: Tool,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            tool,
            path: path.into(),
            message: message.into(),
            lines: None,
        }
    }

    pub fn with_lines(mut self, lines: usize) -> Self {
        self.lines = Some(lines);
        self
    }
}

/// Ordered events of one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub events: Vec<RunEvent>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: RunEvent) {
        self.events.push(event);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Count events of a given kind
    #[allow(dead_code)]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_record_read() {
        let temp = tempdir().unwrap();
        let folder = temp.path().join("api");
        fs::create_dir_all(folder.join("v1")).unwrap();
        let file = folder.join("v1").join("Routes.JS");
        fs::write(&file, "\"ok\"\n").unwrap();

        let record = FileRecord::read(&file, &folder);
        assert_eq!(record.relative, "v1/Routes.JS");
        assert_eq!(record.name(), "Routes.JS");
        assert!(record.content.is_ok());
    }

    #[test]
    fn test_file_record_missing() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("gone.svelte");

        let record = FileRecord::read(&file, temp.path());
        assert_eq!(record.relative, "gone.svelte");
        assert!(record.content.is_err());
    }

    #[test]
    fn test_run_event_serialization() {
        let event = RunEvent::new(EventKind::ReadError, Tool::Folders, "api/x.js", "boom");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"read_error\""));
        assert!(json.contains("\"tool\":\"folders\""));
        assert!(!json.contains("lines"));

        let written =
            RunEvent::new(EventKind::Written, Tool::Folders, "api.txt", "ok").with_lines(3);
        let json = serde_json::to_string(&written).unwrap();
        assert!(json.contains("\"lines\":3"));
    }

    #[test]
    fn test_run_report_count() {
        let mut report = RunReport::new();
        assert!(report.is_empty());
        report.push(RunEvent::new(EventKind::Written, Tool::Project, "tree.txt", ""));
        report.push(RunEvent::new(EventKind::Written, Tool::Project, "summary.txt", ""));
        report.push(RunEvent::new(EventKind::ReadError, Tool::Project, "a.svelte", ""));
        assert_eq!(report.len(), 3);
        assert_eq!(report.count(EventKind::Written), 2);
        assert_eq!(report.count(EventKind::Skipped), 0);
    }
}
