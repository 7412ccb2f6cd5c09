//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::core::config::{CollectConfig, EnumerationOrder, FolderConfig, ProjectConfig};
use crate::core::paths::display_name;
use crate::core::render::{OutputFormat, RenderConfig, Reporter};

/// collect-files - gather source files into plain-text summaries plus a directory tree.
#[derive(Parser, Debug)]
#[command(name = "collect-files")]
#[command(
    author,
    version,
    about,
    long_about = r#"collect-files walks a project and writes plain-text reports next to it.

Tools:
- folders (default): one <folder>.txt per top-level folder with the content of
  every .svelte/.js file beneath it, plus tree.txt for the whole root
- project: tree.txt for the whole project (skipping .git, node_modules, ...)
  and summary.txt with the content of every .svelte file

Running without arguments is the same as `collect-files folders` in the
current directory.

Examples:
    collect-files
    collect-files folders --ext ts --ext svelte --no-line-numbers
    collect-files project --exclude .git --exclude target
    collect-files --root ../web --output-dir /tmp/web-report project
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to scan (defaults to the current directory).\n\n\
Paths shown in the generated documents are relative to this root."
    )]
    pub root: PathBuf,

    /// Directory where output files are written (defaults to ROOT).
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        long_help = "Directory where output files are written. Created if missing.\n\n\
Defaults to ROOT. Existing output files are overwritten."
    )]
    pub output_dir: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        long_help = "Load settings from a JSON file with optional \"folders\" and \"project\"\n\
sections. Missing fields keep their defaults; command-line flags override the file."
    )]
    pub config: Option<PathBuf>,

    /// Progress output format (text/jsonl/json).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select how progress is reported on stdout.\n\n\
Supported values:\n\
- text (default): progress messages as the run proceeds\n\
- jsonl: one JSON event per line at the end of the run\n\
- json: a single JSON array of events at the end of the run"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no progress messages).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress progress messages in text mode. JSON reports are still printed,\n\
and fatal errors still go to stderr."
    )]
    pub quiet: bool,

    /// Verbose mode (report every collected file).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one summary per top-level folder, then the directory tree.
    #[command(
        long_about = "For each direct child directory of ROOT, collect every file beneath it whose\n\
extension is in the target set into <folder>.txt, with a header per file and\n\
line-numbered content. Folders without matching files are skipped. Afterwards\n\
the directory tree of ROOT is written to tree.txt.\n\n\
Examples:\n\
  collect-files folders\n\
  collect-files folders --ext ts,tsx --order fs\n"
    )]
    Folders(FolderArgs),

    /// Write a tree listing and a content summary for the whole project.
    #[command(
        long_about = "Walk ROOT once, pruning excluded directories before descending. Every\n\
visited directory and file is listed in tree.txt; the raw content of every\n\
file with the summary extension goes into summary.txt under its file name.\n\n\
Examples:\n\
  collect-files project\n\
  collect-files project --summary-ext vue --exclude node_modules\n"
    )]
    Project(ProjectArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Folders(FolderArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct FolderArgs {
    /// Target extension (repeatable or comma-separated); replaces the default set.
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Write raw content instead of line-numbered lines.
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Enumeration order of folders and files (sorted/fs).
    #[arg(
        long,
        value_name = "ORDER",
        long_help = "Enumeration order of folders and files.\n\n\
- sorted (default): by file name at each level\n\
- fs: the platform's raw directory order at each level\n\n\
Both orders walk depth-first, so a subdirectory's files are listed where the\n\
subdirectory is met rather than after all of its parent's own files."
    )]
    pub order: Option<EnumerationOrder>,

    /// File name of the tree rendering.
    #[arg(long, value_name = "NAME")]
    pub tree_output: Option<String>,
}

impl FolderArgs {
    /// Apply command-line overrides on top of the configured settings
    pub fn apply(self, mut config: FolderConfig) -> FolderConfig {
        if !self.ext.is_empty() {
            config.target_extensions = self.ext;
        }
        if self.no_line_numbers {
            config.show_line_numbers = false;
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(tree_output) = self.tree_output {
            config.tree_output = tree_output;
        }
        config.normalized()
    }
}

#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    /// Directory name to skip (repeatable or comma-separated); replaces the default set.
    #[arg(long, value_name = "DIR", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// File name suffix whose content goes into the summary.
    #[arg(long, value_name = "EXT")]
    pub summary_ext: Option<String>,

    /// File name of the tree listing.
    #[arg(long, value_name = "NAME")]
    pub tree_output: Option<String>,

    /// File name of the content summary.
    #[arg(long, value_name = "NAME")]
    pub summary_output: Option<String>,
}

impl ProjectArgs {
    /// Apply command-line overrides on top of the configured settings
    pub fn apply(self, mut config: ProjectConfig) -> ProjectConfig {
        if !self.exclude.is_empty() {
            config.exclude_dirs = self.exclude;
        }
        if let Some(ext) = self.summary_ext {
            config.summary_extension = ext;
        }
        if let Some(tree_output) = self.tree_output {
            config.tree_output = tree_output;
        }
        if let Some(summary_output) = self.summary_output {
            config.summary_output = summary_output;
        }
        config.normalized()
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let mut reporter = Reporter::new(render_config, cli.quiet, cli.verbose);

    let config = match &cli.config {
        Some(path) => CollectConfig::load(path)?,
        None => CollectConfig::default(),
    };

    // The label comes from the root as given; "." stays "."
    let root_label = display_name(&cli.root);
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let output_dir = match cli.output_dir {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
            dir.canonicalize().unwrap_or(dir)
        }
        None => root.clone(),
    };

    match cli.command.unwrap_or_default() {
        Commands::Folders(args) => {
            let folder_config = args.apply(config.folders);
            crate::flows::folders::run_folders(&root, &output_dir, &folder_config, &mut reporter)?
        }
        Commands::Project(args) => {
            let project_config = args.apply(config.project);
            crate::flows::project::run_project(
                &root,
                &root_label,
                &output_dir,
                &project_config,
                &mut reporter,
            )?
        }
    }

    reporter.finish().context("Failed to print run report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["collect-files"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.format, "text");
        assert!(cli.command.is_none());
        assert!(matches!(Commands::default(), Commands::Folders(_)));
    }

    #[test]
    fn test_folder_args_override_config() {
        let cli = Cli::try_parse_from([
            "collect-files",
            "folders",
            "--ext",
            "TS,tsx",
            "--no-line-numbers",
            "--order",
            "fs",
        ])
        .unwrap();

        let Some(Commands::Folders(args)) = cli.command else {
            panic!("expected folders subcommand");
        };
        let config = args.apply(FolderConfig::default());
        assert_eq!(config.target_extensions, vec![".ts", ".tsx"]);
        assert!(!config.show_line_numbers);
        assert_eq!(config.order, EnumerationOrder::Fs);
        assert_eq!(config.tree_output, "tree.txt");
    }

    #[test]
    fn test_project_args_override_config() {
        let cli = Cli::try_parse_from([
            "collect-files",
            "--root",
            "web",
            "project",
            "--exclude",
            "target",
            "--exclude",
            ".git",
            "--summary-ext",
            "vue",
            "--tree-output",
            "project-tree.txt",
        ])
        .unwrap();

        assert_eq!(cli.root, PathBuf::from("web"));
        let Some(Commands::Project(args)) = cli.command else {
            panic!("expected project subcommand");
        };
        let config = args.apply(ProjectConfig::default());
        assert_eq!(config.exclude_dirs, vec!["target", ".git"]);
        assert_eq!(config.summary_extension, ".vue");
        assert_eq!(config.tree_output, "project-tree.txt");
        assert_eq!(config.summary_output, "summary.txt");
    }

    #[test]
    fn test_invalid_order_rejected() {
        let result = Cli::try_parse_from(["collect-files", "folders", "--order", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["collect-files", "project", "--quiet", "--format", "json"])
            .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.format, "json");
    }
}
