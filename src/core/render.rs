//! Renderer module
//!
//! Renders a RunReport to stdout: live progress lines (text) or a
//! machine-readable report at the end of the run (jsonl, json).

use colored::Colorize;
use std::io::Write;

use crate::core::model::{EventKind, RunEvent, RunReport};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for run reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    ///
    /// Text progress is printed live by [`Reporter`], so a text report
    /// renders empty.
    pub fn render(&self, report: &RunReport) -> String {
        match self.config.format {
            OutputFormat::Text => String::new(),
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &RunReport, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        if output.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", output)
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, report: &RunReport) -> String {
        report
            .events
            .iter()
            .filter_map(|event| {
                if self.config.pretty {
                    serde_json::to_string_pretty(event).ok()
                } else {
                    serde_json::to_string(event).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, report: &RunReport) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&report.events).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&report.events).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

/// Progress sink handed to the tools
///
/// In text mode messages are printed as they happen; in JSON modes events are
/// only collected and the whole report is printed by [`Reporter::finish`].
pub struct Reporter {
    renderer: Renderer,
    format: OutputFormat,
    quiet: bool,
    verbose: bool,
    report: RunReport,
}

impl Reporter {
    pub fn new(config: RenderConfig, quiet: bool, verbose: bool) -> Self {
        Self {
            renderer: Renderer::with_config(config),
            format: config.format,
            quiet,
            verbose,
            report: RunReport::new(),
        }
    }

    /// A reporter that prints nothing (used by tests)
    #[cfg(test)]
    pub fn silent() -> Self {
        Self::new(RenderConfig::default(), true, false)
    }

    fn prints_live(&self) -> bool {
        self.format == OutputFormat::Text && !self.quiet
    }

    /// Print a free-form progress line (text mode only)
    pub fn banner(&self, text: &str) {
        if self.prints_live() {
            println!("{}", text);
        }
    }

    /// Record an event, printing it right away in text mode
    pub fn record(&mut self, event: RunEvent) {
        if self.prints_live() {
            let message = event.message.as_str();
            match event.kind {
                EventKind::Written => println!("{}", message.green()),
                EventKind::Skipped => println!("{}", message.yellow()),
                EventKind::Collected if self.verbose => println!("{}", message.dimmed()),
                EventKind::ReadError if self.verbose => eprintln!("{}", message.red()),
                _ => {}
            }
        }
        self.report.push(event);
    }

    #[allow(dead_code)]
    pub fn report(&self) -> &RunReport {
        &self.report
    }

    /// Print the machine-readable report (JSON modes) and hand it back
    pub fn finish(self) -> std::io::Result<RunReport> {
        self.renderer.render_to(&self.report, std::io::stdout().lock())?;
        Ok(self.report)
    }
}
