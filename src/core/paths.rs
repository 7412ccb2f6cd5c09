//! Path normalization utilities
//!
//! Relative paths shown in output documents always use '/' as separator.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Last component of a path, or "." when it has none (e.g. "." or "/")
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}

/// File name of a directory entry as a string
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Whether a path is one of the run's own output files
pub fn is_output(path: &Path, outputs: &[PathBuf]) -> bool {
    outputs.iter().any(|o| o == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.rs");
        assert_eq!(normalize_path(path), "src/main.rs");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/api/routes.js");
        assert_eq!(make_relative(path, root), Some("api/routes.js".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.rs");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/home/user/project")), "project");
        assert_eq!(display_name(Path::new(".")), ".");
        assert_eq!(display_name(Path::new("/")), ".");
        assert_eq!(display_name(Path::new("web/app/.")), "app");
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(Path::new("a/b/page.svelte")), "page.svelte");
        assert_eq!(entry_name(Path::new("/")), "");
    }

    #[test]
    fn test_is_output() {
        let outputs = vec![PathBuf::from("/p/tree.txt"), PathBuf::from("/p/summary.txt")];
        assert!(is_output(Path::new("/p/tree.txt"), &outputs));
        assert!(!is_output(Path::new("/p/sub/tree.txt"), &outputs));
    }
}
