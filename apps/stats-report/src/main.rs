//! Descriptive statistics report binary
//!
//! Runs the statistics over the datasets of a TOML file, or over the bundled
//! demo datasets, and prints the report to stdout or writes it to a file.

use anyhow::Context;
use clap::Parser;
use descriptive_stats::{Analyzer, Config, OutputFormat, Reporter};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "stats-report")]
#[command(
    version,
    about = "Descriptive statistics over datasets defined in TOML"
)]
struct Args {
    /// Dataset file; the bundled demo datasets are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: console, json, json-pretty or markdown
    #[arg(short, long, default_value = "console")]
    format: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit with status 1 when any dataset fails analysis or its thresholds
    #[arg(long)]
    strict: bool,
}

/// `RUST_LOG` when set, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format: OutputFormat = args.format.parse()?;

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading datasets from {}", path.display());
            Config::from_file(path)?
        }
        None => {
            tracing::info!("No config given, using the demo datasets");
            Config::demo()?
        }
    };

    let results = Analyzer::new(&config).run();
    let reporter = Reporter::new(format);

    match &args.output {
        Some(path) => {
            reporter
                .write_to_file(&results, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => reporter.report(&results)?,
    }

    if args.strict && !results.passed {
        tracing::warn!("{} failures in strict mode", results.failures.len());
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    // One test so the RUST_LOG changes cannot race
    #[test]
    fn test_log_filter_honours_rust_log() {
        std::env::set_var("RUST_LOG", "debug");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::DEBUG));

        std::env::set_var("RUST_LOG", "descriptive_stats=trace,warn");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::TRACE));

        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "stats-report",
            "--config",
            "datasets.toml",
            "--format",
            "markdown",
            "--strict",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("datasets.toml")));
        assert_eq!(args.format, "markdown");
        assert!(args.output.is_none());
        assert!(args.strict);
    }
}
