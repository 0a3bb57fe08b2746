//! Dataset analysis orchestration
//!
//! This module runs every statistic of the [`stats`](crate::stats) module over
//! each configured dataset and collects the results, threshold violations and
//! per-dataset failures into a serializable [`AnalysisResults`].
//!
//! Statistics that are undefined for a particular dataset (a geometric mean
//! over non-positive values, a sample variance of one value, ...) are reported
//! as `None` instead of failing the dataset. A dataset fails only when its
//! basic [`Summary`] cannot be computed, which in practice means it is empty.
//!
//! # Example
//!
//! ```
//! use descriptive_stats::{analysis::Analyzer, Config};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::from_str(r#"
//!     [[datasets]]
//!     name = "Outliers"
//!     values = [10, 12, 14, 15, 16, 18, 20, 100]
//! "#)?;
//!
//! let results = Analyzer::new(&config).run();
//! assert_eq!(results.datasets[0].outliers.outliers, vec![100.0]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::{Config, Dataset, ThresholdsConfig};
use crate::error::Result;
use crate::stats::{
    self, central::mode_of_table, summary::summarize_with_mode, Correction, Deviations,
    DispersionSummary, EmpiricalRule, FiveNumberSummary, Frequency, ModeResult, OutlierReport,
    Summary,
};

/// Results from a complete analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Report title
    pub title: String,
    /// Settings used for the run
    pub settings: SettingsSummary,
    /// Reports for every dataset that could be analysed, in config order
    pub datasets: Vec<DatasetReport>,
    /// Whether every dataset was analysed and passed its thresholds
    pub passed: bool,
    /// Analysis errors and threshold violations, prefixed with the dataset name
    pub failures: Vec<String>,
    /// Timestamp when the analysis ran (RFC 3339)
    pub generated_at: String,
}

/// Summary of the settings used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSummary {
    pub precision: usize,
    pub correction: Correction,
    pub fence: f64,
    pub trim: f64,
    pub max_cv: Option<f64>,
    pub max_outliers: Option<usize>,
}

/// Everything computed for one dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Name of the dataset
    pub name: String,
    /// Unit label, if any
    pub unit: Option<String>,
    /// Observations as configured
    pub values: Vec<f64>,
    /// Count, mean, median, mode, min and max
    pub summary: Summary,
    /// Mode together with its frequency
    pub mode: ModeResult,
    /// Variance using the configured correction
    pub variance: Option<f64>,
    /// Standard deviation using the configured correction
    pub std_dev: Option<f64>,
    /// Range, sample variance, sample std dev, CV and IQR
    pub dispersion: Option<DispersionSummary>,
    /// Deviations from the mean and the sum of squares
    pub deviations: Deviations,
    /// Share of values within 1, 2 and 3 sample standard deviations
    pub empirical_rule: Option<EmpiricalRule>,
    /// Minimum, quartiles and maximum
    pub quartiles: FiveNumberSummary,
    /// IQR outlier detection with the configured fence
    pub outliers: OutlierReport,
    pub weighted_mean: Option<f64>,
    pub geometric_mean: Option<f64>,
    pub harmonic_mean: Option<f64>,
    pub trimmed_mean: Option<f64>,
    /// Distinct values with their counts, ascending
    pub frequencies: Vec<Frequency>,
    /// Whether this dataset passed the thresholds
    pub passed: bool,
    /// Threshold violations for this dataset
    pub failures: Vec<String>,
}

impl DatasetReport {
    /// Append the unit label to a formatted value.
    pub fn with_unit(&self, value: &str) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", value, unit),
            None => value.to_string(),
        }
    }
}

/// Runs the statistics over the datasets of a [`Config`]
pub struct Analyzer<'a> {
    config: &'a Config,
}

impl<'a> Analyzer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Analyse every dataset in the configuration
    ///
    /// Never aborts: datasets that cannot be analysed are listed in
    /// [`AnalysisResults::failures`].
    #[instrument(skip(self), fields(title = %self.config.report.title))]
    pub fn run(&self) -> AnalysisResults {
        let generated_at = chrono::Utc::now().to_rfc3339();

        info!(
            "Analysing {} datasets for '{}'",
            self.config.datasets.len(),
            self.config.report.title
        );

        let mut datasets = Vec::new();
        let mut all_failures = Vec::new();

        for dataset in &self.config.datasets {
            match self.analyze_dataset(dataset) {
                Ok(report) => {
                    for failure in &report.failures {
                        all_failures.push(format!("{}: {}", dataset.name, failure));
                    }
                    datasets.push(report);
                }
                Err(e) => {
                    warn!("Skipping dataset '{}': {}", dataset.name, e);
                    all_failures.push(format!("{}: {}", dataset.name, e));
                }
            }
        }

        let passed = all_failures.is_empty();
        let report = &self.config.report;
        let results = AnalysisResults {
            title: report.title.clone(),
            settings: SettingsSummary {
                precision: report.precision,
                correction: report.correction,
                fence: report.fence,
                trim: report.trim,
                max_cv: self.config.thresholds.max_cv,
                max_outliers: self.config.thresholds.max_outliers,
            },
            datasets,
            passed,
            failures: all_failures,
            generated_at,
        };

        if passed {
            info!("Analysis '{}' completed", results.title);
        } else {
            warn!(
                "Analysis '{}' completed with {} failures",
                results.title,
                results.failures.len()
            );
        }

        results
    }

    /// Analyse a single dataset
    ///
    /// # Errors
    ///
    /// Fails only when the dataset has no values.
    #[instrument(skip(self, dataset), fields(dataset = %dataset.name))]
    pub fn analyze_dataset(&self, dataset: &Dataset) -> Result<DatasetReport> {
        let settings = &self.config.report;
        let values = &dataset.values;

        let frequencies = stats::frequencies(values)?;
        let mode = mode_of_table(&frequencies)?;
        let summary = summarize_with_mode(values, mode.value)?;
        let quartiles = stats::five_number_summary(values)?;
        let outliers = stats::detect_outliers_with_fence(values, settings.fence)?;
        let deviations = stats::deviations(values)?;

        let variance = optional("variance", stats::variance(values, settings.correction));
        let dispersion = optional("dispersion", stats::summarize_dispersion(values));
        let weighted_mean = match &dataset.weights {
            Some(weights) => optional("weighted mean", stats::weighted_mean(values, weights)),
            None => None,
        };

        let mut report = DatasetReport {
            name: dataset.name.clone(),
            unit: dataset.unit.clone(),
            values: values.clone(),
            summary,
            mode,
            variance,
            std_dev: variance.map(f64::sqrt),
            dispersion,
            deviations,
            empirical_rule: optional("empirical rule", stats::empirical_rule(values)),
            quartiles,
            outliers,
            weighted_mean,
            geometric_mean: optional("geometric mean", stats::geometric_mean(values)),
            harmonic_mean: optional("harmonic mean", stats::harmonic_mean(values)),
            trimmed_mean: optional("trimmed mean", stats::trimmed_mean(values, settings.trim)),
            frequencies,
            passed: true,
            failures: Vec::new(),
        };

        check_thresholds(&mut report, &self.config.thresholds);

        debug!(
            "Dataset '{}': n={}, mean={}, outliers={}",
            report.name,
            report.summary.count,
            report.summary.mean,
            report.outliers.outliers.len()
        );

        Ok(report)
    }
}

/// Analyse every dataset in `config`.
pub fn analyze(config: &Config) -> AnalysisResults {
    Analyzer::new(config).run()
}

/// Keep a statistic that may be undefined for the dataset.
fn optional<T>(name: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("{} not available: {}", name, e);
            None
        }
    }
}

fn check_thresholds(report: &mut DatasetReport, thresholds: &ThresholdsConfig) {
    if let Some(max_cv) = thresholds.max_cv {
        match &report.dispersion {
            Some(dispersion) if dispersion.coefficient_of_variation > max_cv => {
                report.failures.push(format!(
                    "CV {:.2}% exceeds threshold {:.2}%",
                    dispersion.coefficient_of_variation, max_cv
                ));
            }
            Some(_) => {}
            None => debug!("CV threshold not checked for '{}'", report.name),
        }
    }

    if let Some(max_outliers) = thresholds.max_outliers {
        let found = report.outliers.outliers.len();
        if found > max_outliers {
            report.failures.push(format!(
                "{} outliers exceed threshold {}",
                found, max_outliers
            ));
        }
    }

    report.passed = report.failures.is_empty();
}
