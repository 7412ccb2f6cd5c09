//! Per-folder aggregation
//!
//! For every direct child directory of the root, gathers the files with a target
//! extension found anywhere beneath it into `<folder-name>.txt`, then renders
//! the directory tree of the whole root into the tree output.

use anyhow::Result;
use std::path::Path;

use crate::backends::tree::{render_tree, TreeOptions};
use crate::backends::walk::{matching_files, top_level_folders};
use crate::core::config::FolderConfig;
use crate::core::error::write_output;
use crate::core::model::{EventKind, FileRecord, RunEvent, Tool};
use crate::core::paths::{display_name, normalize_path};
use crate::core::render::Reporter;

/// Width of the `=` and `-` rules around each file header
pub const RULE_WIDTH: usize = 60;

const BANNER_WIDTH: usize = 70;

/// Rendered content of one top-level folder
#[derive(Debug, Clone, Default)]
pub struct FolderSummary {
    /// Folder name, also the output file stem
    pub name: String,

    /// Document entries, joined with '\n' when written
    pub lines: Vec<String>,

    /// Relative paths of the files that were rendered
    pub collected: Vec<String>,

    /// (path, reason) of files rendered with an error marker
    pub failures: Vec<(String, String)>,
}

impl FolderSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Render one file as header lines followed by its content or an error marker
pub fn render_block(record: &FileRecord, show_line_numbers: bool) -> Vec<String> {
    let mut lines = vec![
        format!("\n{}", "=".repeat(RULE_WIDTH)),
        format!("文件: {}", record.relative),
        "-".repeat(RULE_WIDTH),
    ];

    match &record.content {
        Ok(content) if show_line_numbers => {
            for (idx, line) in content.lines().enumerate() {
                lines.push(format!("{:>4} | {}", idx + 1, line.trim_end()));
            }
        }
        Ok(content) => lines.push(content.clone()),
        Err(failure) => lines.push(format!(
            "[读取错误] {} : {}",
            record.path.display(),
            failure
        )),
    }

    lines
}

/// Read and render every matching file beneath `folder`
pub fn collect_folder(folder: &Path, config: &FolderConfig) -> FolderSummary {
    let mut summary = FolderSummary {
        name: display_name(folder),
        ..Default::default()
    };

    for path in matching_files(folder, config) {
        let record = FileRecord::read(&path, folder);
        summary
            .lines
            .extend(render_block(&record, config.show_line_numbers));
        if let Err(failure) = &record.content {
            summary
                .failures
                .push((normalize_path(&record.path), failure.to_string()));
        }
        summary.collected.push(record.relative);
    }

    summary
}

/// Full text of `<folder-name>.txt`
pub fn render_document(summary: &FolderSummary, config: &FolderConfig) -> String {
    format!(
        "文件夹：{}\n生成时间：当前目录下所有 {} 文件内容\n\n{}",
        summary.name,
        config.extensions_label(" / "),
        summary.lines.join("\n")
    )
}

/// Run the per-folder aggregator followed by the tree rendering
pub fn run_folders(
    root: &Path,
    output_dir: &Path,
    config: &FolderConfig,
    reporter: &mut Reporter,
) -> Result<()> {
    reporter.banner("正在生成各文件夹的内容汇总文件...\n");

    for folder in top_level_folders(root, config.order)? {
        let summary = collect_folder(&folder, config);

        for relative in &summary.collected {
            reporter.record(RunEvent::new(
                EventKind::Collected,
                Tool::Folders,
                format!("{}/{}", summary.name, relative),
                format!("  + {}/{}", summary.name, relative),
            ));
        }
        for (path, reason) in &summary.failures {
            reporter.record(RunEvent::new(
                EventKind::ReadError,
                Tool::Folders,
                path.clone(),
                format!("[读取错误] {} : {}", path, reason),
            ));
        }

        if summary.is_empty() {
            reporter.record(RunEvent::new(
                EventKind::Skipped,
                Tool::Folders,
                summary.name.clone(),
                format!(
                    "文件夹 {} 没有找到 {} 文件，跳过",
                    summary.name,
                    config.extensions_label(" 或 ")
                ),
            ));
            continue;
        }

        let file_name = format!("{}.txt", summary.name);
        write_output(&output_dir.join(&file_name), &render_document(&summary, config))?;
        reporter.record(
            RunEvent::new(
                EventKind::Written,
                Tool::Folders,
                file_name.clone(),
                format!("已生成：{} ({} 行内容)", file_name, summary.lines.len()),
            )
            .with_lines(summary.lines.len()),
        );
    }

    reporter.banner(&format!("\n{}", "=".repeat(BANNER_WIDTH)));
    reporter.banner(&format!(
        "2. 正在生成目录树结构到 {} ...",
        config.tree_output
    ));

    let tree_path = output_dir.join(&config.tree_output);
    let skip = [tree_path.clone()];
    let tree = render_tree(
        root,
        &TreeOptions {
            icon_extensions: &config.tree_icon_extensions,
            skip: &skip,
        },
    );
    write_output(&tree_path, &tree)?;
    reporter.record(RunEvent::new(
        EventKind::Written,
        Tool::Folders,
        config.tree_output.clone(),
        format!("目录结构已保存到：{}", config.tree_output),
    ));

    reporter.banner("完成！");
    Ok(())
}
