//! Descriptive statistics for small in-memory samples
//!
//! This crate provides stateless statistical functions over `&[f64]` samples
//! and a small reporting layer that runs them over datasets defined in TOML.
//!
//! # Features
//!
//! - **Central tendency**: mean, median, mode, weighted, geometric, harmonic
//!   and trimmed means
//! - **Dispersion**: range, variance, standard deviation and coefficient of
//!   variation with a selectable [`Correction`](stats::Correction)
//! - **Quantiles**: R-7 linear interpolation, quartiles and five-number summaries
//! - **Outliers**: IQR fence detection with a configurable multiplier
//! - **Multiple Output Formats**: Console, JSON and Markdown reports
//!
//! # Example
//!
//! ```no_run
//! use descriptive_stats::{Analyzer, Config, reporter::{Reporter, OutputFormat}};
//!
//! # fn example() -> anyhow::Result<()> {
//! // Load configuration
//! let config = Config::from_file("datasets.toml")?;
//!
//! // Run every statistic over every dataset
//! let results = Analyzer::new(&config).run();
//!
//! // Report results
//! let reporter = Reporter::new(OutputFormat::Console);
//! reporter.report(&results)?;
//!
//! // Or save to file
//! Reporter::new(OutputFormat::Json).write_to_file(&results, "results.json")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Datasets are configured using TOML files:
//!
//! ```toml
//! [report]
//! title = "Quality control"
//! precision = 2
//! correction = "sample"
//! fence = 1.5
//! trim = 0.1
//!
//! [thresholds]
//! max_cv = 5.0
//! max_outliers = 0
//!
//! [[datasets]]
//! name = "Machine A"
//! unit = "mm"
//! values = [10.0, 10.1, 9.9, 10.0, 10.1, 9.9, 10.0, 10.1]
//!
//! [[datasets]]
//! name = "Weighted scores"
//! values = [80, 90, 85]
//! weights = [0.3, 0.5, 0.2]
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod reporter;
pub mod stats;

// Re-export main types for convenience
pub use analysis::{AnalysisResults, Analyzer, DatasetReport};
pub use config::Config;
pub use error::{Result, StatsError};
pub use reporter::{OutputFormat, Reporter};
