//! One-call summaries composed from the primitive statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::central::{mean, median, mode};
use super::dispersion::{coefficient_of_variation, max, min, range, variance, Correction};
use super::percentiles::interquartile_range;
use crate::error::Result;

/// Count, centre and extremes of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        writeln!(f, "Count:   {}", self.count)?;
        writeln!(f, "Mean:    {:.*}", precision, self.mean)?;
        writeln!(f, "Median:  {:.*}", precision, self.median)?;
        writeln!(f, "Mode:    {:.*}", precision, self.mode)?;
        writeln!(f, "Min:     {:.*}", precision, self.min)?;
        write!(f, "Max:     {:.*}", precision, self.max)
    }
}

/// Compute a [`Summary`].
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::summary::summarize;
///
/// let summary = summarize(&[1.0, 2.0, 2.0, 3.0, 7.0]).unwrap();
/// assert_eq!(summary.count, 5);
/// assert_eq!(summary.mean, 3.0);
/// assert_eq!(summary.median, 2.0);
/// assert_eq!(summary.mode, 2.0);
/// assert_eq!(summary.max, 7.0);
/// ```
pub fn summarize(samples: &[f64]) -> Result<Summary> {
    summarize_with_mode(samples, mode(samples)?.value)
}

/// [`summarize`] with a mode the caller has already computed.
pub(crate) fn summarize_with_mode(samples: &[f64], mode: f64) -> Result<Summary> {
    Ok(Summary {
        count: samples.len(),
        mean: mean(samples)?,
        median: median(samples)?,
        mode,
        min: min(samples)?,
        max: max(samples)?,
    })
}

/// Spread of a sample, using the sample (n - 1) variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionSummary {
    pub range: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Percent
    pub coefficient_of_variation: f64,
    pub iqr: f64,
}

impl fmt::Display for DispersionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        writeln!(f, "Range:                    {:.*}", precision, self.range)?;
        writeln!(f, "Variance:                 {:.*}", precision, self.variance)?;
        writeln!(f, "Standard deviation:       {:.*}", precision, self.std_dev)?;
        writeln!(
            f,
            "Coefficient of variation: {:.*}%",
            precision, self.coefficient_of_variation
        )?;
        write!(f, "IQR:                      {:.*}", precision, self.iqr)
    }
}

/// Compute a [`DispersionSummary`].
///
/// Needs at least two values and a non-zero mean.
pub fn summarize_dispersion(samples: &[f64]) -> Result<DispersionSummary> {
    let variance = variance(samples, Correction::Sample)?;

    Ok(DispersionSummary {
        range: range(samples)?,
        variance,
        std_dev: variance.sqrt(),
        coefficient_of_variation: coefficient_of_variation(samples)?,
        iqr: interquartile_range(samples)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADES: [f64; 20] = [
        85.0, 90.0, 78.0, 92.0, 88.0, 76.0, 95.0, 89.0, 84.0, 91.0, 87.0, 93.0, 82.0, 88.0, 90.0,
        86.0, 94.0, 79.0, 88.0, 92.0,
    ];

    #[test]
    fn test_summarize_grades() {
        let summary = summarize(&GRADES).unwrap();

        assert_eq!(summary.count, 20);
        assert!((summary.mean - 87.35).abs() < 1e-10);
        assert_eq!(summary.median, 88.0);
        assert_eq!(summary.mode, 88.0);
        assert_eq!(summary.min, 76.0);
        assert_eq!(summary.max, 95.0);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[]).is_err());
    }

    #[test]
    fn test_summary_display() {
        let summary = summarize(&[1.0, 2.0, 3.0]).unwrap();
        let text = summary.to_string();

        assert!(text.starts_with("Count:   3\n"));
        assert!(text.contains("Mean:    2.00"));
        assert!(text.ends_with("Max:     3.00"));
    }

    #[test]
    fn test_summary_display_precision() {
        let summary = summarize(&[1.0, 2.0]).unwrap();
        assert!(format!("{:.3}", summary).contains("Median:  1.500"));
    }

    #[test]
    fn test_summarize_dispersion() {
        let group_b = [10.0, 30.0, 50.0, 70.0, 90.0];
        let dispersion = summarize_dispersion(&group_b).unwrap();

        assert_eq!(dispersion.range, 80.0);
        assert_eq!(dispersion.variance, 1000.0);
        assert!((dispersion.std_dev - 1000.0_f64.sqrt()).abs() < 1e-12);
        assert!((dispersion.coefficient_of_variation - 1000.0_f64.sqrt() * 2.0).abs() < 1e-9);
        assert_eq!(dispersion.iqr, 40.0);
    }

    #[test]
    fn test_summarize_dispersion_needs_two_values() {
        assert!(summarize_dispersion(&[5.0]).is_err());
    }

    #[test]
    fn test_dispersion_display() {
        let dispersion = summarize_dispersion(&[48.0, 49.0, 50.0, 51.0, 52.0]).unwrap();
        let text = dispersion.to_string();
        assert!(text.contains("Range:                    4.00"));
        assert!(text.contains("Coefficient of variation: 3.16%"));
    }
}
