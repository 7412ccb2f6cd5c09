//! Configuration for both tools
//!
//! Every setting has a default matching the behavior of running the binary with
//! no arguments. A JSON file (`--config`) may override any subset of fields, and
//! command-line flags override the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::CollectError;

/// Default name of the directory tree output
pub const DEFAULT_TREE_OUTPUT: &str = "tree.txt";

/// Default name of the whole-tree content summary
pub const DEFAULT_SUMMARY_OUTPUT: &str = "summary.txt";

/// Order in which directory entries are enumerated by the per-folder tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumerationOrder {
    /// Sorted by file name at each level
    #[default]
    Sorted,
    /// Whatever order the platform's directory listing yields, still depth-first
    Fs,
}

impl std::str::FromStr for EnumerationOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sorted" => Ok(EnumerationOrder::Sorted),
            "fs" | "filesystem" => Ok(EnumerationOrder::Fs),
            _ => Err(format!("Unknown order: {}", s)),
        }
    }
}

/// Settings of the per-folder aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderConfig {
    /// Extensions (with leading '.') whose files are aggregated, compared case-insensitively
    pub target_extensions: Vec<String>,

    /// Prefix every content line with a fixed-width line number
    pub show_line_numbers: bool,

    /// Enumeration order of folders and files
    pub order: EnumerationOrder,

    /// File name of the directory tree rendering
    pub tree_output: String,

    /// File name suffixes that get a file icon in the tree rendering
    pub tree_icon_extensions: Vec<String>,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            target_extensions: vec![".svelte".to_string(), ".js".to_string()],
            show_line_numbers: true,
            order: EnumerationOrder::Sorted,
            tree_output: DEFAULT_TREE_OUTPUT.to_string(),
            tree_icon_extensions: [".svelte", ".js", ".ts", ".json", ".css"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl FolderConfig {
    /// Normalize extensions: leading '.', target set lowercased, duplicates dropped
    pub fn normalized(mut self) -> Self {
        let mut targets: Vec<String> = Vec::new();
        for ext in &self.target_extensions {
            let ext = normalize_extension(ext).to_lowercase();
            if !targets.contains(&ext) {
                targets.push(ext);
            }
        }
        self.target_extensions = targets;
        self.tree_icon_extensions = self
            .tree_icon_extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
        self
    }

    /// Whether a file's extension is in the target set
    pub fn is_target(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let suffix = format!(".{}", ext.to_string_lossy().to_lowercase());
                self.target_extensions.iter().any(|t| *t == suffix)
            }
            None => false,
        }
    }

    /// Target extensions joined with a separator, for headers and messages
    pub fn extensions_label(&self, separator: &str) -> String {
        self.target_extensions.join(separator)
    }
}

/// Settings of the whole-tree aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory names that are never descended into
    pub exclude_dirs: Vec<String>,

    /// File name suffix whose contents go into the summary (case-sensitive)
    pub summary_extension: String,

    /// File name of the tree listing
    pub tree_output: String,

    /// File name of the content summary
    pub summary_output: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: [".git", "node_modules", "__pycache__", ".svelte-kit", "dist"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            summary_extension: ".svelte".to_string(),
            tree_output: DEFAULT_TREE_OUTPUT.to_string(),
            summary_output: DEFAULT_SUMMARY_OUTPUT.to_string(),
        }
    }
}

impl ProjectConfig {
    pub fn normalized(mut self) -> Self {
        self.summary_extension = normalize_extension(&self.summary_extension);
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }

    pub fn is_summarized(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.summary_extension)
    }
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    pub folders: FolderConfig,
    pub project: ProjectConfig,
}

impl CollectConfig {
    /// Load a JSON configuration file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self, CollectError> {
        let content = fs::read_to_string(path).map_err(|e| CollectError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| CollectError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Ensure an extension starts with '.'
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_folder_config_defaults() {
        let config = FolderConfig::default();
        assert_eq!(config.target_extensions, vec![".svelte", ".js"]);
        assert!(config.show_line_numbers);
        assert_eq!(config.order, EnumerationOrder::Sorted);
        assert_eq!(config.tree_output, "tree.txt");
        assert_eq!(config.tree_icon_extensions.len(), 5);
    }

    #[test]
    fn test_project_config_defaults() {
        let config = ProjectConfig::default();
        assert!(config.is_excluded("node_modules"));
        assert!(config.is_excluded(".svelte-kit"));
        assert!(!config.is_excluded("src"));
        assert_eq!(config.summary_output, "summary.txt");
    }

    #[test]
    fn test_is_target_case_insensitive() {
        let config = FolderConfig::default();
        assert!(config.is_target(Path::new("a/Page.SVELTE")));
        assert!(config.is_target(Path::new("routes.js")));
        assert!(!config.is_target(Path::new("util.ts")));
        assert!(!config.is_target(Path::new(".js")));
        assert!(!config.is_target(Path::new("Makefile")));
    }

    #[test]
    fn test_is_summarized_case_sensitive() {
        let config = ProjectConfig::default();
        assert!(config.is_summarized("App.svelte"));
        assert!(!config.is_summarized("App.SVELTE"));
        assert!(!config.is_summarized("main.js"));
    }

    #[test]
    fn test_normalized_extensions() {
        let config = FolderConfig {
            target_extensions: vec!["TS".to_string(), ".ts".to_string(), "js".to_string()],
            tree_icon_extensions: vec!["md".to_string()],
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.target_extensions, vec![".ts", ".js"]);
        assert_eq!(config.tree_icon_extensions, vec![".md"]);

        let project = ProjectConfig {
            summary_extension: "vue".to_string(),
            ..Default::default()
        }
        .normalized();
        assert_eq!(project.summary_extension, ".vue");
    }

    #[test]
    fn test_extensions_label() {
        let config = FolderConfig::default();
        assert_eq!(config.extensions_label(" / "), ".svelte / .js");
        assert_eq!(config.extensions_label(" 或 "), ".svelte 或 .js");
    }

    #[test]
    fn test_enumeration_order_from_str() {
        assert_eq!("sorted".parse::<EnumerationOrder>(), Ok(EnumerationOrder::Sorted));
        assert_eq!("FS".parse::<EnumerationOrder>(), Ok(EnumerationOrder::Fs));
        assert!("random".parse::<EnumerationOrder>().is_err());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("collect.json");
        fs::write(
            &path,
            r#"{"folders": {"show_line_numbers": false}, "project": {"exclude_dirs": ["target"]}}"#,
        )
        .unwrap();

        let config = CollectConfig::load(&path).unwrap();
        assert!(!config.folders.show_line_numbers);
        assert_eq!(config.folders.target_extensions, vec![".svelte", ".js"]);
        assert_eq!(config.project.exclude_dirs, vec!["target"]);
        assert_eq!(config.project.summary_extension, ".svelte");
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("collect.json");
        fs::write(&path, "{ not json").unwrap();
        let err = CollectConfig::load(&path).unwrap_err();
        assert!(matches!(err, CollectError::Config { .. }));
    }

    #[test]
    fn test_load_missing_config() {
        let err = CollectConfig::load(Path::new("/nonexistent/collect.json")).unwrap_err();
        assert!(matches!(err, CollectError::Config { .. }));
    }
}
