//! Frequency tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_empty, Result};

/// A distinct value and the number of times it occurs in a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    pub value: f64,
    pub count: usize,
}

/// Ordering key for a value: `-0.0` and `0.0` share one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ValueKey(i64);

impl ValueKey {
    fn new(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        let bits = value.to_bits() as i64;
        // Same ordering as f64::total_cmp.
        ValueKey(bits ^ ((((bits >> 63) as u64) >> 1) as i64))
    }
}

/// Count the occurrences of every distinct value.
///
/// The table is sorted ascending by value.
///
/// # Examples
///
/// ```
/// use descriptive_stats::stats::frequency::frequencies;
///
/// let table = frequencies(&[3.0, 1.0, 3.0]).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!((table[0].value, table[0].count), (1.0, 1));
/// assert_eq!((table[1].value, table[1].count), (3.0, 2));
/// ```
pub fn frequencies(samples: &[f64]) -> Result<Vec<Frequency>> {
    ensure_non_empty(samples)?;

    let mut counts: BTreeMap<ValueKey, Frequency> = BTreeMap::new();
    for &value in samples {
        counts
            .entry(ValueKey::new(value))
            .or_insert(Frequency {
                value: if value == 0.0 { 0.0 } else { value },
                count: 0,
            })
            .count += 1;
    }

    Ok(counts.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequencies_empty() {
        assert!(frequencies(&[]).is_err());
    }

    #[test]
    fn test_frequencies_sorted_ascending() {
        let table = frequencies(&[5.0, 3.0, 7.0, 3.0, 9.0, 3.0, 4.0, 3.0, 6.0]).unwrap();
        let values: Vec<f64> = table.iter().map(|f| f.value).collect();
        assert_eq!(values, vec![3.0, 4.0, 5.0, 6.0, 7.0, 9.0]);
        assert_eq!(table[0].count, 4);
    }

    #[test]
    fn test_frequencies_negative_values() {
        let table = frequencies(&[-1.5, 2.0, -3.0, -1.5]).unwrap();
        let values: Vec<f64> = table.iter().map(|f| f.value).collect();
        assert_eq!(values, vec![-3.0, -1.5, 2.0]);
        assert_eq!(table[1].count, 2);
    }

    #[test]
    fn test_frequencies_signed_zero_shares_bucket() {
        let table = frequencies(&[0.0, -0.0, 1.0]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].count, 2);
        assert!(table[0].value.is_sign_positive());
    }

    #[test]
    fn test_frequency_counts_sum_to_length() {
        let samples = vec![1.0, 1.0, 2.0, 2.5, 2.5, 2.5, 10.0];
        let table = frequencies(&samples).unwrap();
        let total: usize = table.iter().map(|f| f.count).sum();
        assert_eq!(total, samples.len());
    }
}
