//! collect-files - gather source files into plain-text summaries
//!
//! collect-files provides:
//! - Per-folder summaries of source files with line numbers
//! - A whole-project tree listing and markup summary
//! - Directory tree rendering with connector glyphs

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
