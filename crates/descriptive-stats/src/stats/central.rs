//! Measures of central tendency.
//!
//! Every function takes the sample by slice and never modifies it; functions
//! that depend on order work on a sorted copy.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::frequency::{frequencies, Frequency};
use super::percentiles::sorted_copy;
use crate::error::{ensure_non_empty, Result, StatsError};

/// The most frequent value of a sample and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeResult {
    pub value: f64,
    pub frequency: usize,
}

/// Arithmetic mean.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::central::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(samples: &[f64]) -> Result<f64> {
    ensure_non_empty(samples)?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Middle value of the sorted sample; the average of the two middle values
/// when the length is even.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::central::median;
///
/// assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]).unwrap(), 25.0);
/// assert_eq!(median(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap(), 30.0);
/// ```
pub fn median(samples: &[f64]) -> Result<f64> {
    ensure_non_empty(samples)?;
    let sorted = sorted_copy(samples);
    let n = sorted.len();

    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Most frequent value.
///
/// When several values share the highest count the smallest of them wins, so
/// the result does not depend on input order.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::central::mode;
///
/// let result = mode(&[5.0, 3.0, 7.0, 3.0, 9.0, 3.0, 4.0, 3.0, 6.0]).unwrap();
/// assert_eq!(result.value, 3.0);
/// assert_eq!(result.frequency, 4);
/// ```
pub fn mode(samples: &[f64]) -> Result<ModeResult> {
    mode_of_table(&frequencies(samples)?)
}

/// Mode read off a frequency table that is ascending by value.
pub(crate) fn mode_of_table(table: &[Frequency]) -> Result<ModeResult> {
    // min_by_key keeps the first of equal keys, i.e. the smallest value.
    let best = table
        .iter()
        .min_by_key(|entry| Reverse(entry.count))
        .ok_or_else(|| StatsError::invalid("sample must not be empty"))?;

    Ok(ModeResult {
        value: best.value,
        frequency: best.count,
    })
}

/// Weighted arithmetic mean, `Σ(v·w) / Σw`.
///
/// Weights do not need to sum to one.
///
/// # Errors
///
/// Fails when the slices differ in length, are empty, or the weights sum to
/// zero.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::central::weighted_mean;
///
/// let wm = weighted_mean(&[80.0, 90.0, 85.0], &[0.3, 0.5, 0.2]).unwrap();
/// assert!((wm - 86.0).abs() < 1e-9);
/// ```
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64> {
    if values.len() != weights.len() {
        return Err(StatsError::invalid(format!(
            "values and weights must have the same length ({} != {})",
            values.len(),
            weights.len()
        )));
    }
    ensure_non_empty(values)?;

    let (weighted_sum, weight_sum) = values
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(sum, total), (v, w)| (sum + v * w, total + w));

    if weight_sum == 0.0 {
        return Err(StatsError::invalid("weights must not sum to zero"));
    }

    Ok(weighted_sum / weight_sum)
}

/// Geometric mean, the n-th root of the product of the values.
///
/// Computed in log space so long samples cannot overflow the product.
/// All values must be strictly positive.
pub fn geometric_mean(samples: &[f64]) -> Result<f64> {
    ensure_non_empty(samples)?;
    if let Some(bad) = samples.iter().find(|&&x| x.is_nan() || x <= 0.0) {
        return Err(StatsError::invalid(format!(
            "geometric mean requires strictly positive values, got {}",
            bad
        )));
    }

    let log_sum: f64 = samples.iter().map(|x| x.ln()).sum();
    Ok((log_sum / samples.len() as f64).exp())
}

/// Harmonic mean, `n / Σ(1/x)`.
///
/// # Errors
///
/// Fails when the sample is empty, a value is zero, or the reciprocals sum
/// to zero (as in `[-2.0, 2.0]`).
pub fn harmonic_mean(samples: &[f64]) -> Result<f64> {
    ensure_non_empty(samples)?;
    if samples.iter().any(|&x| x == 0.0) {
        return Err(StatsError::invalid(
            "harmonic mean is undefined when a value is zero",
        ));
    }

    let reciprocal_sum: f64 = samples.iter().map(|x| 1.0 / x).sum();
    if reciprocal_sum == 0.0 {
        return Err(StatsError::invalid(
            "harmonic mean is undefined when the reciprocals sum to zero",
        ));
    }
    Ok(samples.len() as f64 / reciprocal_sum)
}

/// Mean after discarding `floor(proportion * n)` values from each end of the
/// sorted sample.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::central::trimmed_mean;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
/// assert_eq!(trimmed_mean(&data, 0.1).unwrap(), 5.5);
/// ```
pub fn trimmed_mean(samples: &[f64], proportion: f64) -> Result<f64> {
    ensure_non_empty(samples)?;
    if !(0.0..0.5).contains(&proportion) {
        return Err(StatsError::invalid(format!(
            "trim proportion must be within [0, 0.5), got {}",
            proportion
        )));
    }

    let sorted = sorted_copy(samples);
    let cut = (proportion * sorted.len() as f64).floor() as usize;
    let kept = &sorted[cut..sorted.len() - cut];
    if kept.is_empty() {
        return Err(StatsError::invalid("trimming removed every value"));
    }

    mean(kept)
}

/// Mean of the non-NaN values.
pub fn nan_mean(samples: &[f64]) -> Result<f64> {
    let present: Vec<f64> = samples.iter().copied().filter(|x| !x.is_nan()).collect();
    if present.is_empty() {
        return Err(StatsError::invalid("sample has no non-NaN values"));
    }
    mean(&present)
}
