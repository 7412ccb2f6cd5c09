//! Directory tree rendering
//!
//! Produces a `tree`-style listing:
//!
//! ```text
//! 📁 ./project
//! ├── 📁 api/
//! │   ├── 📄 page.svelte
//! │   └── 📄 routes.js
//! └── README.md
//! ```

use std::path::{Path, PathBuf};

use crate::backends::walk::list_dir;
use crate::core::config::EnumerationOrder;
use crate::core::paths::{display_name, entry_name, is_output};

/// Options for [`render_tree`]
#[derive(Debug, Clone, Copy)]
pub struct TreeOptions<'a> {
    /// Name suffixes that get a file icon
    pub icon_extensions: &'a [String],
    /// Paths left out of the rendering
    pub skip: &'a [PathBuf],
}

/// Render the hierarchy beneath `root`, one line per entry, without a trailing newline
///
/// Symlinks to directories are followed, except into a directory that is
/// already being rendered higher up.
pub fn render_tree(root: &Path, options: &TreeOptions) -> String {
    let mut lines = vec![format!("📁 ./{}", display_name(root))];
    let mut ancestors = vec![canonical(root)];
    walk(root, "", options, &mut ancestors, &mut lines);
    lines.join("\n")
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn walk(
    dir: &Path,
    prefix: &str,
    options: &TreeOptions,
    ancestors: &mut Vec<PathBuf>,
    lines: &mut Vec<String>,
) {
    let mut entries = match list_dir(dir, EnumerationOrder::Sorted) {
        Ok(entries) => entries,
        Err(e) => {
            lines.push(format!("{}└── [读取错误] {}", prefix, e));
            return;
        }
    };
    entries.retain(|path| !is_output(path, options.skip));

    let count = entries.len();
    for (idx, path) in entries.iter().enumerate() {
        let is_last = idx + 1 == count;
        let pointer = if is_last { "└── " } else { "├── " };
        let name = entry_name(path);

        if path.is_dir() {
            lines.push(format!("{}{}📁 {}/", prefix, pointer, name));
            let target = canonical(path);
            if ancestors.contains(&target) {
                continue;
            }
            let extension = if is_last { "    " } else { "│   " };
            ancestors.push(target);
            walk(path, &format!("{}{}", prefix, extension), options, ancestors, lines);
            ancestors.pop();
        } else {
            let icon = if has_icon(&name, options.icon_extensions) {
                "📄 "
            } else {
                ""
            };
            lines.push(format!("{}{}{}{}", prefix, pointer, icon, name));
        }
    }
}

fn has_icon(name: &str, icon_extensions: &[String]) -> bool {
    icon_extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}
