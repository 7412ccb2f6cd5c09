//! Whole-tree aggregation
//!
//! One top-down walk of the project builds two documents at once: an indented
//! listing of every visited directory and file, and a summary holding the raw
//! content of every file with the summary extension. Excluded directories are
//! pruned before descending.
//!
//! Summary blocks are headed by the bare file name, so two files with the same
//! name in different directories cannot be told apart in the summary.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::backends::walk::walk_project;
use crate::core::config::ProjectConfig;
use crate::core::error::{write_output, CollectError};
use crate::core::model::{EventKind, FileRecord, RunEvent, Tool};
use crate::core::paths::entry_name;
use crate::core::render::Reporter;

const INDENT: &str = "  ";

/// Both documents of a project walk
#[derive(Debug, Clone, Default)]
pub struct ProjectSummary {
    pub tree_lines: Vec<String>,
    pub summary_blocks: Vec<String>,

    /// Paths (relative to the root) whose contents went into the summary
    pub summarized: Vec<String>,

    /// (relative path, reason) of summary files that could not be read
    pub failures: Vec<(String, String)>,
}

impl ProjectSummary {
    pub fn tree_text(&self) -> String {
        self.tree_lines.join("\n")
    }

    pub fn summary_text(&self) -> String {
        self.summary_blocks.join("\n")
    }
}

/// Render one summary block: `<name>:\n<content>\n`
pub fn render_summary_block(record: &FileRecord) -> String {
    match &record.content {
        Ok(content) => format!("{}:\n{}\n", record.name(), content),
        Err(failure) => format!("{}:\n[读取文件时出错: {}]\n", record.name(), failure),
    }
}

/// Walk the project and build the tree listing and the content summary
///
/// `root_label` names the root directory line. Paths in `skip` (the run's own
/// outputs) are left out of both documents.
pub fn build_project(
    root: &Path,
    root_label: &str,
    config: &ProjectConfig,
    skip: &[PathBuf],
) -> Result<ProjectSummary, CollectError> {
    let mut summary = ProjectSummary::default();

    for entry in walk_project(root, config, skip)? {
        let indent = INDENT.repeat(entry.depth);

        if entry.is_dir {
            let name = if entry.depth == 0 {
                root_label.to_string()
            } else {
                entry_name(&entry.path)
            };
            summary.tree_lines.push(format!("{}📁 {}/", indent, name));
            continue;
        }

        let name = entry_name(&entry.path);
        summary.tree_lines.push(format!("{}📄 {}", indent, name));

        if config.is_summarized(&name) {
            let record = FileRecord::read(&entry.path, root);
            summary.summary_blocks.push(render_summary_block(&record));
            if let Err(failure) = &record.content {
                summary
                    .failures
                    .push((record.relative.clone(), failure.to_string()));
            }
            summary.summarized.push(record.relative);
        }
    }

    Ok(summary)
}

/// Run the whole-tree aggregator
pub fn run_project(
    root: &Path,
    root_label: &str,
    output_dir: &Path,
    config: &ProjectConfig,
    reporter: &mut Reporter,
) -> Result<()> {
    if !root.is_dir() {
        return Err(CollectError::ListRoot {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        }
        .into());
    }

    let tree_path = output_dir.join(&config.tree_output);
    let summary_path = output_dir.join(&config.summary_output);
    let skip = [tree_path.clone(), summary_path.clone()];

    let summary = build_project(root, root_label, config, &skip)?;

    for relative in &summary.summarized {
        reporter.record(RunEvent::new(
            EventKind::Collected,
            Tool::Project,
            relative.clone(),
            format!("  + {}", relative),
        ));
    }
    for (relative, reason) in &summary.failures {
        reporter.record(RunEvent::new(
            EventKind::ReadError,
            Tool::Project,
            relative.clone(),
            format!("[读取文件时出错: {}] {}", reason, relative),
        ));
    }

    write_output(&tree_path, &summary.tree_text())?;
    write_output(&summary_path, &summary.summary_text())?;

    reporter.banner("✅ 执行成功！");
    reporter.record(RunEvent::new(
        EventKind::Written,
        Tool::Project,
        config.tree_output.clone(),
        format!("📂 目录树已生成: {}", config.tree_output),
    ));
    reporter.record(RunEvent::new(
        EventKind::Written,
        Tool::Project,
        config.summary_output.clone(),
        format!("📝 汇总内容已生成: {}", config.summary_output),
    ));

    Ok(())
}
