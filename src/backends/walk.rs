//! Directory traversal
//!
//! Uses walkdir for the recursive enumerations and plain `read_dir` where a
//! single level is needed.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::{EnumerationOrder, FolderConfig, ProjectConfig};
use crate::core::error::CollectError;
use crate::core::paths::is_output;

/// List one directory level
pub fn list_dir(dir: &Path, order: EnumerationOrder) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(entry?.path());
    }
    if order == EnumerationOrder::Sorted {
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(entries)
}

/// Direct child directories of the root (symlinks to directories included)
pub fn top_level_folders(
    root: &Path,
    order: EnumerationOrder,
) -> Result<Vec<PathBuf>, CollectError> {
    let entries = list_dir(root, order).map_err(|source| CollectError::ListRoot {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(entries.into_iter().filter(|p| p.is_dir()).collect())
}

/// Every file anywhere beneath `folder` whose extension is in the target set
///
/// Entries that cannot be read while walking are skipped; the files found are
/// returned in pre-order.
pub fn matching_files(folder: &Path, config: &FolderConfig) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(folder).min_depth(1);
    if config.order == EnumerationOrder::Sorted {
        walker = walker.sort_by_file_name();
    }

    walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file() && config.is_target(entry.path()))
        .map(DirEntry::into_path)
        .collect()
}

/// An entry visited by the whole-tree walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub path: PathBuf,
    /// 0 for the root
    pub depth: usize,
    pub is_dir: bool,
}

/// Files before directories, each group by name
///
/// Symlinks to directories sort with the directories.
fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.path()
        .is_dir()
        .cmp(&b.path().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Top-down walk of the whole tree
///
/// Each directory is yielded before its files, and its files before its
/// subdirectories. Excluded directory names are pruned before descending, so
/// nothing beneath them is ever read. Symlinks to directories are neither
/// listed nor followed. Paths in `skip` are left out.
///
/// Failing to list the root is fatal; unreadable entries below it are skipped.
pub fn walk_project(
    root: &Path,
    config: &ProjectConfig,
    skip: &[PathBuf],
) -> Result<Vec<ProjectEntry>, CollectError> {
    let walker = WalkDir::new(root)
        .sort_by(files_then_dirs)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if entry.path_is_symlink() && entry.path().is_dir() {
                return false;
            }
            if entry.file_type().is_dir() {
                return !config.is_excluded(&entry.file_name().to_string_lossy());
            }
            !is_output(entry.path(), skip)
        });

    let mut entries = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => entries.push(ProjectEntry {
                depth: entry.depth(),
                is_dir: entry.file_type().is_dir(),
                path: entry.into_path(),
            }),
            Err(err) if err.depth() == 0 => {
                return Err(CollectError::ListRoot {
                    path: root.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(_) => continue,
        }
    }
    Ok(entries)
}
