//! Quantile calculations.
//!
//! This module provides the linear-interpolation quantile estimator used by
//! every quartile-based statistic in the crate (IQR, fences, five-number
//! summaries).

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_empty, Result, StatsError};

/// Sorted copy of `samples`, ascending. NaN sorts after every number.
pub(crate) fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Calculate a quantile from a slice of f64 samples.
///
/// Uses linear interpolation between order statistics (the R-7 / spreadsheet
/// convention). The real-valued rank is `p / 100 * (n - 1)` over the samples
/// sorted ascending.
///
/// # Arguments
///
/// * `samples` - Slice of samples (sorted internally, never modified)
/// * `p` - Percentile to calculate (0.0 to 100.0)
///
/// # Errors
///
/// Returns [`StatsError::InvalidArgument`] if `samples` is empty or `p` is
/// outside `[0, 100]`.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::percentiles::quantile;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// assert_eq!(quantile(&data, 25.0).unwrap(), 3.25);
/// assert_eq!(quantile(&data, 50.0).unwrap(), 5.5);
/// ```
pub fn quantile(samples: &[f64], p: f64) -> Result<f64> {
    ensure_non_empty(samples)?;
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::invalid(format!(
            "percentile must be within [0, 100], got {}",
            p
        )));
    }

    Ok(quantile_sorted(&sorted_copy(samples), p))
}

/// Quantile over data that is already sorted ascending and non-empty.
pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let position = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower_index = position.floor() as usize;
    let upper_index = position.ceil() as usize;

    if lower_index == upper_index {
        sorted[lower_index]
    } else {
        let fraction = position - lower_index as f64;
        sorted[lower_index] * (1.0 - fraction) + sorted[upper_index] * fraction
    }
}

/// Interquartile range, `Q3 - Q1`.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::percentiles::interquartile_range;
///
/// let grades = vec![85.0, 90.0, 78.0, 92.0, 88.0, 76.0, 95.0, 89.0, 84.0, 91.0];
/// assert_eq!(interquartile_range(&grades).unwrap(), 6.5);
/// ```
pub fn interquartile_range(samples: &[f64]) -> Result<f64> {
    ensure_non_empty(samples)?;
    let sorted = sorted_copy(samples);
    Ok(quantile_sorted(&sorted, 75.0) - quantile_sorted(&sorted, 25.0))
}

/// Minimum, quartiles and maximum of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Compute the five-number summary in a single sort.
    ///
    /// # Examples
    ///
    /// ```
    /// use descriptive_stats::stats::percentiles::FiveNumberSummary;
    ///
    /// let data = vec![5.0, 1.0, 3.0, 2.0, 4.0];
    /// let summary = FiveNumberSummary::from_samples(&data).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.max, 5.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        ensure_non_empty(samples)?;
        let sorted = sorted_copy(samples);

        Ok(FiveNumberSummary {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 25.0),
            median: quantile_sorted(&sorted, 50.0),
            q3: quantile_sorted(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Interquartile range of the summarized sample.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Shorthand for [`FiveNumberSummary::from_samples`].
pub fn five_number_summary(samples: &[f64]) -> Result<FiveNumberSummary> {
    FiveNumberSummary::from_samples(samples)
}
