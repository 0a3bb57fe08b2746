//! Console reporter for analysis results
//!
//! Provides human-readable output with labelled sections and status indicators.

use anyhow::Result;
use std::fmt::Write;

use super::{format_list, format_optional};
use crate::analysis::{AnalysisResults, DatasetReport};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format analysis results for console output
    pub fn format(results: &AnalysisResults) -> Result<String> {
        let mut output = String::new();
        let settings = &results.settings;

        // Header
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                    DESCRIPTIVE STATISTICS                    ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        writeln!(output, "Report:     {}", results.title)?;
        writeln!(output, "Generated:  {}", results.generated_at)?;
        writeln!(output, "Datasets:   {}", results.datasets.len())?;
        writeln!(output)?;

        writeln!(output, "Settings:")?;
        writeln!(output, "  Variance:      {}", settings.correction)?;
        writeln!(output, "  IQR fence:     {}", settings.fence)?;
        writeln!(output, "  Trim:          {}%", settings.trim * 100.0)?;
        if let Some(max_cv) = settings.max_cv {
            writeln!(output, "  Max CV:        {}%", max_cv)?;
        }
        if let Some(max_outliers) = settings.max_outliers {
            writeln!(output, "  Max outliers:  {}", max_outliers)?;
        }
        writeln!(output)?;

        for dataset in &results.datasets {
            Self::format_dataset(&mut output, dataset, settings.precision)?;
        }

        // Summary
        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        let status = if results.passed { "PASSED" } else { "FAILED" };
        let status_symbol = if results.passed { "✓" } else { "✗" };
        writeln!(output, "Overall Status: {} {}", status_symbol, status)?;

        if !results.failures.is_empty() {
            writeln!(output)?;
            writeln!(output, "Failures:")?;
            for failure in &results.failures {
                writeln!(output, "  • {}", failure)?;
            }
        }

        writeln!(output)?;
        Ok(output)
    }

    fn format_dataset(output: &mut String, dataset: &DatasetReport, precision: usize) -> Result<()> {
        let status = if dataset.passed { "✓" } else { "✗" };
        let value = |v: f64| dataset.with_unit(&format!("{:.*}", precision, v));
        let optional = |v: Option<f64>| match v {
            Some(v) => value(v),
            None => format_optional(None, precision),
        };

        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        writeln!(output, "Dataset: {} {}", dataset.name, status)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        writeln!(output)?;

        writeln!(output, "  Values:  {}", format_list(&dataset.values, precision))?;
        writeln!(output)?;

        let summary = &dataset.summary;
        writeln!(output, "  Count:   {}", summary.count)?;
        writeln!(output, "  Mean:    {}", value(summary.mean))?;
        writeln!(output, "  Median:  {}", value(summary.median))?;
        writeln!(
            output,
            "  Mode:    {} (×{})",
            value(summary.mode),
            dataset.mode.frequency
        )?;
        writeln!(output, "  Min:     {}", value(summary.min))?;
        writeln!(output, "  Max:     {}", value(summary.max))?;
        writeln!(output)?;

        writeln!(output, "  Central tendency:")?;
        writeln!(output, "    Weighted mean:   {}", optional(dataset.weighted_mean))?;
        writeln!(output, "    Geometric mean:  {}", optional(dataset.geometric_mean))?;
        writeln!(output, "    Harmonic mean:   {}", optional(dataset.harmonic_mean))?;
        writeln!(output, "    Trimmed mean:    {}", optional(dataset.trimmed_mean))?;
        writeln!(output)?;

        writeln!(output, "  Dispersion:")?;
        // variance is in squared units
        writeln!(
            output,
            "    Variance:        {}",
            format_optional(dataset.variance, precision)
        )?;
        writeln!(output, "    Std deviation:   {}", optional(dataset.std_dev))?;
        match &dataset.dispersion {
            Some(dispersion) => {
                writeln!(output, "    Range:           {}", value(dispersion.range))?;
                writeln!(
                    output,
                    "    CV:              {:.*}%",
                    precision, dispersion.coefficient_of_variation
                )?;
            }
            None => {
                let range = dataset.quartiles.max - dataset.quartiles.min;
                writeln!(output, "    Range:           {}", value(range))?;
                writeln!(output, "    CV:              n/a")?;
            }
        }
        writeln!(output)?;

        let steps = &dataset.deviations;
        writeln!(output, "  Deviations from the mean:")?;
        writeln!(output, "    Deviations:      {}", format_list(&steps.deviations, precision))?;
        writeln!(output, "    Squared:         {}", format_list(&steps.squared, precision))?;
        writeln!(output, "    Sum of squares:  {:.*}", precision, steps.sum_of_squares)?;
        if let Some(rule) = &dataset.empirical_rule {
            writeln!(
                output,
                "    Within 1/2/3 SD: {:.1}% / {:.1}% / {:.1}%",
                rule.within_one, rule.within_two, rule.within_three
            )?;
        }
        writeln!(output)?;

        let quartiles = &dataset.quartiles;
        writeln!(output, "  ┌─────────┬─────────┬─────────┬─────────┬─────────┬─────────┐")?;
        writeln!(output, "  │   Min   │   Q1    │ Median  │   Q3    │   Max   │   IQR   │")?;
        writeln!(output, "  ├─────────┼─────────┼─────────┼─────────┼─────────┼─────────┤")?;
        writeln!(
            output,
            "  │ {:>7.*} │ {:>7.*} │ {:>7.*} │ {:>7.*} │ {:>7.*} │ {:>7.*} │",
            precision,
            quartiles.min,
            precision,
            quartiles.q1,
            precision,
            quartiles.median,
            precision,
            quartiles.q3,
            precision,
            quartiles.max,
            precision,
            quartiles.iqr()
        )?;
        writeln!(output, "  └─────────┴─────────┴─────────┴─────────┴─────────┴─────────┘")?;
        writeln!(output)?;

        let outliers = &dataset.outliers;
        writeln!(
            output,
            "  Outlier fences:  [{}, {}]",
            value(outliers.lower_fence),
            value(outliers.upper_fence)
        )?;
        if outliers.outliers.is_empty() {
            writeln!(output, "  Outliers:        none")?;
        } else {
            writeln!(
                output,
                "  Outliers:        {} at positions {:?}",
                format_list(&outliers.outliers, precision),
                outliers.outlier_indices
            )?;
        }

        if !dataset.failures.is_empty() {
            writeln!(output)?;
            writeln!(output, "  Threshold Violations:")?;
            for failure in &dataset.failures {
                writeln!(output, "    ✗ {}", failure)?;
            }
        }

        writeln!(output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::test_support::create_test_results;

    #[test]
    fn test_console_format_contains_title() {
        let results = create_test_results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("Test Suite"));
        assert!(output.contains("Dataset: Outlier detection"));
        assert!(output.contains("Dataset: Heights"));
    }

    #[test]
    fn test_console_format_contains_quartile_table() {
        let results = create_test_results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("Q1"));
        assert!(output.contains("IQR"));
        assert!(output.contains("13.50"));
        assert!(output.contains("18.50"));
    }

    #[test]
    fn test_console_format_shows_summary_labels() {
        let results = create_test_results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("Mean:    25.6"));
        assert!(output.contains("Median:  15.50"));
        assert!(output.contains("Count:   8"));
    }

    #[test]
    fn test_console_format_shows_units_and_outliers() {
        let results = create_test_results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("[100.00] at positions [7]"));
        assert!(output.contains("Outliers:        none"));
        assert!(output.contains("cm"));
        assert!(output.contains("Weighted mean:   173.00 cm"));
    }

    #[test]
    fn test_console_format_applies_units_like_markdown() {
        let results = create_test_results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("Mean:    173.00 cm"));
        assert!(output.contains("Median:  172.00 cm"));
        assert!(output.contains("Max:     180.00 cm"));
        assert!(output.contains("Mode:    168.00 cm (×1)"));
        assert!(output.contains("Std deviation:   4.69 cm"));
        // squared units are not labelled
        assert!(output.contains("Variance:        22.00\n"));
    }

    #[test]
    fn test_console_format_shows_deviations() {
        let results = create_test_results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("Deviations:      [-3.00, 2.00, -5.00, 7.00, -1.00]"));
        assert!(output.contains("Sum of squares:  88.00"));
        assert!(output.contains("Within 1/2/3 SD: 60.0% / 100.0% / 100.0%"));
    }

    #[test]
    fn test_console_format_shows_failures() {
        let results = create_test_results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("FAILED"));
        assert!(output.contains("✗"));
        assert!(output.contains("Outlier detection: 1 outliers exceed threshold 0"));
    }

    #[test]
    fn test_console_format_shows_pass_status() {
        let mut results = create_test_results();
        results.datasets.retain(|d| d.passed);
        results.passed = true;
        results.failures.clear();

        let output = ConsoleReporter::format(&results).unwrap();
        assert!(output.contains("PASSED"));
        assert!(!output.contains("Failures:"));
    }

    #[test]
    fn test_console_format_honours_precision() {
        let mut results = create_test_results();
        results.settings.precision = 4;

        let output = ConsoleReporter::format(&results).unwrap();
        assert!(output.contains("Mean:    25.6250"));
    }
}
