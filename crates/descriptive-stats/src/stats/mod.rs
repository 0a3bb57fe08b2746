//! Descriptive statistics over in-memory samples
//!
//! This module provides stateless functions for central tendency, dispersion,
//! quantiles, IQR outlier detection, frequency tables and summaries. Every
//! function takes the sample as `&[f64]`, never mutates it, and reports
//! contract violations as [`StatsError::InvalidArgument`](crate::StatsError).
//!
//! # Examples
//!
//! ```
//! use descriptive_stats::stats::{detect_outliers, interquartile_range, summarize};
//!
//! let samples = vec![10.0, 12.0, 14.0, 15.0, 16.0, 18.0, 20.0, 100.0];
//!
//! let summary = summarize(&samples).unwrap();
//! println!("Mean: {}, Median: {}", summary.mean, summary.median);
//!
//! let iqr = interquartile_range(&samples).unwrap();
//! assert_eq!(iqr, 5.0);
//!
//! let report = detect_outliers(&samples).unwrap();
//! assert_eq!(report.outliers, vec![100.0]);
//! ```

pub mod central;
pub mod dispersion;
pub mod frequency;
pub mod outliers;
pub mod percentiles;
pub mod summary;

// Re-export main types and functions
pub use central::{
    geometric_mean, harmonic_mean, mean, median, mode, nan_mean, trimmed_mean, weighted_mean,
    ModeResult,
};
pub use dispersion::{
    coefficient_of_variation, deviations, empirical_rule, max, min, range, standard_deviation,
    variance, Correction, Deviations, EmpiricalRule,
};
pub use frequency::{frequencies, Frequency};
pub use outliers::{detect_outliers, detect_outliers_with_fence, OutlierReport, DEFAULT_FENCE};
pub use percentiles::{five_number_summary, interquartile_range, quantile, FiveNumberSummary};
pub use summary::{summarize, summarize_dispersion, DispersionSummary, Summary};
