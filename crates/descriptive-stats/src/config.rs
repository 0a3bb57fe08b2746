//! Configuration parsing for dataset reports
//!
//! This module provides TOML-based configuration for defining the datasets
//! to analyse, the report settings, and optional dispersion thresholds.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::stats::{Correction, DEFAULT_FENCE};

/// Bundled datasets used when no configuration file is given.
const DEMO_CONFIG: &str = include_str!("../datasets/demo.toml");

/// Largest number of decimals the text reporters will print.
pub const MAX_PRECISION: usize = 10;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
    /// Dispersion thresholds for pass/fail determination
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    /// Datasets to analyse, in report order
    pub datasets: Vec<Dataset>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - Required fields are missing
    /// - The settings fail [`Config::validate`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use descriptive_stats::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("datasets.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, required fields are missing
    /// or validation fails.
    ///
    /// # Example
    ///
    /// ```
    /// use descriptive_stats::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let toml = r#"
    ///     [[datasets]]
    ///     name = "Grades"
    ///     values = [85, 90, 78, 92]
    /// "#;
    /// let config = Config::from_str(toml)?;
    /// assert_eq!(config.datasets[0].values.len(), 4);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// The bundled demonstration datasets.
    pub fn demo() -> anyhow::Result<Self> {
        Self::from_str(DEMO_CONFIG).context("Bundled demo datasets are invalid")
    }

    /// Check the settings that TOML parsing alone cannot enforce.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.datasets.is_empty() {
            bail!("At least one dataset is required");
        }

        if self.report.precision > MAX_PRECISION {
            bail!(
                "precision must be at most {}, got {}",
                MAX_PRECISION,
                self.report.precision
            );
        }

        if !self.report.fence.is_finite() || self.report.fence < 0.0 {
            bail!(
                "fence must be finite and non-negative, got {}",
                self.report.fence
            );
        }

        if !(0.0..0.5).contains(&self.report.trim) {
            bail!("trim must be within [0, 0.5), got {}", self.report.trim);
        }

        let mut names = HashSet::new();
        for dataset in &self.datasets {
            if !names.insert(dataset.name.as_str()) {
                bail!("Duplicate dataset name: {}", dataset.name);
            }

            if let Some(weights) = &dataset.weights {
                if weights.len() != dataset.values.len() {
                    bail!(
                        "Dataset '{}' has {} values but {} weights",
                        dataset.name,
                        dataset.values.len(),
                        weights.len()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Report-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title printed at the top of the report
    #[serde(default = "default_title")]
    pub title: String,
    /// Decimals used by the console and Markdown reporters (default: 2)
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Divisor for the reported variance and standard deviation (default: sample)
    #[serde(default)]
    pub correction: Correction,
    /// IQR fence multiplier for outlier detection (default: 1.5)
    #[serde(default = "default_fence")]
    pub fence: f64,
    /// Proportion cut from each end for the trimmed mean (default: 0.1)
    #[serde(default = "default_trim")]
    pub trim: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            precision: default_precision(),
            correction: Correction::default(),
            fence: default_fence(),
            trim: default_trim(),
        }
    }
}

fn default_title() -> String {
    "Descriptive Statistics".to_string()
}

fn default_precision() -> usize {
    2
}

fn default_fence() -> f64 {
    DEFAULT_FENCE
}

fn default_trim() -> f64 {
    0.1
}

/// Dispersion thresholds for pass/fail determination
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThresholdsConfig {
    /// Highest acceptable coefficient of variation, in percent
    pub max_cv: Option<f64>,
    /// Highest acceptable number of IQR outliers
    pub max_outliers: Option<usize>,
}

/// A named sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Name of the dataset
    pub name: String,
    /// Unit label appended to values in text reports
    #[serde(default)]
    pub unit: Option<String>,
    /// Observations
    pub values: Vec<f64>,
    /// Optional weights, one per value
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [[datasets]]
            name = "Grades"
            values = [85, 90, 78]
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.report.title, "Descriptive Statistics");
        assert_eq!(config.report.precision, 2);
        assert_eq!(config.report.correction, Correction::Sample);
        assert_eq!(config.report.fence, 1.5);
        assert_eq!(config.report.trim, 0.1);
        assert_eq!(config.datasets.len(), 1);
        assert_eq!(config.datasets[0].values, vec![85.0, 90.0, 78.0]);
        assert!(config.datasets[0].unit.is_none());
        assert!(config.datasets[0].weights.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [report]
            title = "Quality control"
            precision = 3
            correction = "population"
            fence = 3.0
            trim = 0.2

            [thresholds]
            max_cv = 2.5
            max_outliers = 0

            [[datasets]]
            name = "Machine A"
            unit = "mm"
            values = [10.0, 10.1, 9.9, 10.0]

            [[datasets]]
            name = "Scores"
            values = [80, 90, 85]
            weights = [0.3, 0.5, 0.2]
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.report.title, "Quality control");
        assert_eq!(config.report.precision, 3);
        assert_eq!(config.report.correction, Correction::Population);
        assert_eq!(config.report.fence, 3.0);
        assert_eq!(config.report.trim, 0.2);
        assert_eq!(config.thresholds.max_cv, Some(2.5));
        assert_eq!(config.thresholds.max_outliers, Some(0));
        assert_eq!(config.datasets[0].unit.as_deref(), Some("mm"));
        assert_eq!(config.datasets[1].weights, Some(vec![0.3, 0.5, 0.2]));
    }

    #[test]
    fn test_default_thresholds() {
        let toml = r#"
            [[datasets]]
            name = "A"
            values = [1.0]
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.thresholds.max_cv, None);
        assert_eq!(config.thresholds.max_outliers, None);
    }

    #[test]
    fn test_missing_datasets_rejected() {
        assert!(Config::from_str("[report]\ntitle = \"x\"\n").is_err());
        assert!(Config::from_str("datasets = []\n").is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let toml = r#"
            [[datasets]]
            name = "A"
            values = [1.0]

            [[datasets]]
            name = "A"
            values = [2.0]
        "#;

        let err = Config::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("Duplicate dataset name"));
    }

    #[test]
    fn test_weight_length_mismatch_rejected() {
        let toml = r#"
            [[datasets]]
            name = "A"
            values = [1.0, 2.0]
            weights = [1.0]
        "#;

        assert!(Config::from_str(toml).is_err());
    }

    #[test]
    fn test_invalid_report_settings_rejected() {
        let base = "[[datasets]]\nname = \"A\"\nvalues = [1.0]\n";

        for report in [
            "[report]\nprecision = 11\n",
            "[report]\nfence = -1.0\n",
            "[report]\ntrim = 0.5\n",
            "[report]\ncorrection = \"bessel\"\n",
        ] {
            let toml = format!("{}{}", report, base);
            assert!(Config::from_str(&toml).is_err(), "accepted: {}", report);
        }
    }

    #[test]
    fn test_demo_config() {
        let config = Config::demo().unwrap();
        assert!(config.datasets.len() >= 10);
        assert!(config.datasets.iter().any(|d| d.name == "Outlier detection"));
        assert!(config.datasets.iter().any(|d| d.weights.is_some()));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/datasets.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
