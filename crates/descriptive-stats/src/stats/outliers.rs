//! Outlier detection.
//!
//! This module provides utilities for detecting and filtering outliers
//! using the Interquartile Range (IQR) method.

use serde::{Deserialize, Serialize};

use super::percentiles::{quantile_sorted, sorted_copy};
use crate::error::{ensure_non_empty, Result, StatsError};

/// Fence multiplier of the classic (Tukey) IQR rule.
pub const DEFAULT_FENCE: f64 = 1.5;

/// Outlier detection using Interquartile Range (IQR) method.
///
/// Outliers are the points that fall strictly outside
/// [Q1 - k*IQR, Q3 + k*IQR], where IQR = Q3 - Q1 and k defaults to 1.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Lower fence (Q1 - k*IQR)
    pub lower_fence: f64,
    /// Upper fence (Q3 + k*IQR)
    pub upper_fence: f64,
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
    /// Interquartile range (Q3 - Q1)
    pub iqr: f64,
    /// Outlying values in original sample order, duplicates kept
    pub outliers: Vec<f64>,
    /// Indices of the outliers in the original sample
    pub outlier_indices: Vec<usize>,
}

impl OutlierReport {
    /// Detect outliers in samples using the 1.5 * IQR rule.
    ///
    /// # Arguments
    ///
    /// * `samples` - Slice of samples to analyze
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidArgument`] if `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use descriptive_stats::stats::outliers::OutlierReport;
    ///
    /// let data = vec![10.0, 12.0, 14.0, 15.0, 16.0, 18.0, 20.0, 100.0];
    /// let report = OutlierReport::detect(&data).unwrap();
    /// assert_eq!(report.outliers, vec![100.0]);
    /// assert_eq!(report.lower_fence, 6.0);
    /// assert_eq!(report.upper_fence, 26.0);
    /// ```
    pub fn detect(samples: &[f64]) -> Result<Self> {
        Self::detect_with_fence(samples, DEFAULT_FENCE)
    }

    /// Detect outliers with a custom fence multiplier `k`.
    ///
    /// `k = 3.0` gives the "far out" fences.
    pub fn detect_with_fence(samples: &[f64], k: f64) -> Result<Self> {
        ensure_non_empty(samples)?;
        if !k.is_finite() || k < 0.0 {
            return Err(StatsError::invalid(format!(
                "fence multiplier must be finite and non-negative, got {}",
                k
            )));
        }

        let sorted = sorted_copy(samples);
        let q1 = quantile_sorted(&sorted, 25.0);
        let q3 = quantile_sorted(&sorted, 75.0);
        let iqr = q3 - q1;

        let lower_fence = q1 - k * iqr;
        let upper_fence = q3 + k * iqr;

        let (outlier_indices, outliers): (Vec<usize>, Vec<f64>) = samples
            .iter()
            .enumerate()
            .filter_map(|(i, &value)| {
                if value < lower_fence || value > upper_fence {
                    Some((i, value))
                } else {
                    None
                }
            })
            .unzip();

        Ok(OutlierReport {
            lower_fence,
            upper_fence,
            q1,
            q3,
            iqr,
            outliers,
            outlier_indices,
        })
    }

    /// Get the clean samples (outliers removed).
    ///
    /// `samples` must be the slice the report was computed from.
    ///
    /// # Examples
    ///
    /// ```
    /// use descriptive_stats::stats::outliers::OutlierReport;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
    /// let report = OutlierReport::detect(&data).unwrap();
    /// let clean = report.clean_samples(&data);
    /// assert_eq!(clean.len(), 5); // 100.0 removed
    /// ```
    pub fn clean_samples(&self, samples: &[f64]) -> Vec<f64> {
        // outlier_indices is ascending, so one cursor walks it alongside samples
        let mut skip = self.outlier_indices.iter().copied().peekable();
        samples
            .iter()
            .enumerate()
            .filter_map(|(i, &value)| {
                if skip.next_if_eq(&i).is_some() {
                    None
                } else {
                    Some(value)
                }
            })
            .collect()
    }

    /// Check if any outliers were detected.
    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }
}

/// Shorthand for [`OutlierReport::detect`].
pub fn detect_outliers(samples: &[f64]) -> Result<OutlierReport> {
    OutlierReport::detect(samples)
}

/// Shorthand for [`OutlierReport::detect_with_fence`].
pub fn detect_outliers_with_fence(samples: &[f64], k: f64) -> Result<OutlierReport> {
    OutlierReport::detect_with_fence(samples, k)
}
