//! Measures of dispersion.

use serde::{Deserialize, Serialize};

use super::central::mean;
use crate::error::{ensure_non_empty, Result, StatsError};

/// Divisor used for variance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Correction {
    /// Bessel's correction, divide by `n - 1`
    #[default]
    Sample,
    /// Divide by `n`
    Population,
}

impl Correction {
    fn divisor(self, n: usize) -> Result<f64> {
        match self {
            Correction::Sample if n < 2 => Err(StatsError::invalid(
                "sample variance needs at least two values",
            )),
            Correction::Sample => Ok((n - 1) as f64),
            Correction::Population => Ok(n as f64),
        }
    }
}

impl std::fmt::Display for Correction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Correction::Sample => write!(f, "sample"),
            Correction::Population => write!(f, "population"),
        }
    }
}

pub fn min(samples: &[f64]) -> Result<f64> {
    ensure_non_empty(samples)?;
    Ok(samples.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(samples: &[f64]) -> Result<f64> {
    ensure_non_empty(samples)?;
    Ok(samples.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// `max - min`
pub fn range(samples: &[f64]) -> Result<f64> {
    Ok(max(samples)? - min(samples)?)
}

/// Mean squared deviation from the mean.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::dispersion::{variance, Correction};
///
/// let data = [4.0, 8.0, 6.0, 5.0, 7.0];
/// assert_eq!(variance(&data, Correction::Sample).unwrap(), 2.5);
/// assert_eq!(variance(&data, Correction::Population).unwrap(), 2.0);
/// ```
pub fn variance(samples: &[f64], correction: Correction) -> Result<f64> {
    let mean = mean(samples)?;
    let divisor = correction.divisor(samples.len())?;
    let squared_diffs: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
    Ok(squared_diffs / divisor)
}

pub fn standard_deviation(samples: &[f64], correction: Correction) -> Result<f64> {
    Ok(variance(samples, correction)?.sqrt())
}

/// Sample standard deviation relative to the mean, as a percentage.
///
/// Fails when the mean is zero.
pub fn coefficient_of_variation(samples: &[f64]) -> Result<f64> {
    let mean = mean(samples)?;
    if mean == 0.0 {
        return Err(StatsError::invalid(
            "coefficient of variation is undefined for a zero mean",
        ));
    }
    let sd = standard_deviation(samples, Correction::Sample)?;
    Ok(sd / mean * 100.0)
}

/// Deviations from the mean, the intermediate values of a variance
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deviations {
    pub mean: f64,
    /// `x - mean` for every value, in input order
    pub deviations: Vec<f64>,
    /// `(x - mean)²` for every value, in input order
    pub squared: Vec<f64>,
    pub sum_of_squares: f64,
}

/// Deviations of every value from the mean, with their squares and the sum of
/// squares.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::dispersion::deviations;
///
/// let steps = deviations(&[4.0, 8.0, 6.0, 5.0, 7.0]).unwrap();
/// assert_eq!(steps.deviations, vec![-2.0, 2.0, 0.0, -1.0, 1.0]);
/// assert_eq!(steps.sum_of_squares, 10.0);
/// ```
pub fn deviations(samples: &[f64]) -> Result<Deviations> {
    let mean = mean(samples)?;
    let deviations: Vec<f64> = samples.iter().map(|&x| x - mean).collect();
    let squared: Vec<f64> = deviations.iter().map(|d| d * d).collect();
    let sum_of_squares = squared.iter().sum();

    Ok(Deviations {
        mean,
        deviations,
        squared,
        sum_of_squares,
    })
}

/// Share of values within 1, 2 and 3 sample standard deviations of the mean,
/// in percent. Normally distributed data gives roughly 68, 95 and 99.7.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalRule {
    pub within_one: f64,
    pub within_two: f64,
    pub within_three: f64,
}

/// Check a sample against the 68-95-99.7 rule.
///
/// Bounds are inclusive. Needs at least two values.
pub fn empirical_rule(samples: &[f64]) -> Result<EmpiricalRule> {
    let mean = mean(samples)?;
    let sd = standard_deviation(samples, Correction::Sample)?;
    let n = samples.len() as f64;

    let share = |k: f64| {
        let inside = samples
            .iter()
            .filter(|&&x| (x - mean).abs() <= k * sd)
            .count();
        inside as f64 / n * 100.0
    };

    Ok(EmpiricalRule {
        within_one: share(1.0),
        within_two: share(2.0),
        within_three: share(3.0),
    })
}
