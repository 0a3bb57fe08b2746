//! Analysis result reporting
//!
//! This module handles formatting and outputting analysis results in various
//! formats.
//!
//! # Output Formats
//!
//! - **JSON**: Machine-readable format for further processing
//! - **Console**: Human-readable format with labelled sections
//! - **Markdown**: Documentation-friendly tables
//!
//! # Example
//!
//! ```no_run
//! use descriptive_stats::reporter::{Reporter, OutputFormat};
//! use descriptive_stats::analysis::AnalysisResults;
//!
//! # fn example(results: AnalysisResults) -> anyhow::Result<()> {
//! let reporter = Reporter::new(OutputFormat::Console);
//! reporter.report(&results)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json)
//!     .write_to_file(&results, "results.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;
mod markdown;

use anyhow::{bail, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::analysis::AnalysisResults;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Console output with labelled sections
    #[default]
    Console,
    /// Markdown format for documentation
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "json-pretty" | "json_pretty" => Ok(OutputFormat::JsonPretty),
            "console" | "text" => Ok(OutputFormat::Console),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => bail!(
                "Unknown output format: {}. Use console, json, json-pretty or markdown",
                other
            ),
        }
    }
}

/// Reporter for analysis results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report results to stdout
    pub fn report(&self, results: &AnalysisResults) -> Result<()> {
        let output = self.format_results(results)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, results: &AnalysisResults, path: P) -> Result<()> {
        let output = self.format_results(results)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_results(&self, results: &AnalysisResults) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(results, false),
            OutputFormat::JsonPretty => JsonReporter::format(results, true),
            OutputFormat::Console => ConsoleReporter::format(results),
            OutputFormat::Markdown => MarkdownReporter::format(results),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

/// Format `value` with `precision` decimals, or `n/a` when undefined.
pub(crate) fn format_optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "n/a".to_string(),
    }
}

/// Format a list of values with `precision` decimals.
pub(crate) fn format_list(values: &[f64], precision: usize) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect();
    format!("[{}]", items.join(", "))
}
