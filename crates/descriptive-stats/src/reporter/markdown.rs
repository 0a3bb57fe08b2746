//! Markdown reporter for analysis results
//!
//! Produces one summary table across all datasets followed by a section per
//! dataset, suitable for pasting into documentation or pull requests.

use anyhow::Result;
use std::fmt::Write;

use super::{format_list, format_optional};
use crate::analysis::{AnalysisResults, DatasetReport};

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Format analysis results as Markdown
    pub fn format(results: &AnalysisResults) -> Result<String> {
        let mut output = String::new();
        let precision = results.settings.precision;

        writeln!(output, "# {}", results.title)?;
        writeln!(output)?;
        writeln!(output, "Generated at {}.", results.generated_at)?;
        writeln!(output)?;
        writeln!(
            output,
            "Variance uses the **{}** divisor; outliers lie beyond **{}** IQR from the quartiles.",
            results.settings.correction, results.settings.fence
        )?;
        writeln!(output)?;

        writeln!(output, "## Overview")?;
        writeln!(output)?;
        writeln!(output, "| Dataset | n | Mean | Median | Std dev | IQR | Outliers | Status |")?;
        writeln!(output, "|---|---:|---:|---:|---:|---:|---:|:---:|")?;
        for dataset in &results.datasets {
            writeln!(
                output,
                "| {} | {} | {:.*} | {:.*} | {} | {:.*} | {} | {} |",
                dataset.name,
                dataset.summary.count,
                precision,
                dataset.summary.mean,
                precision,
                dataset.summary.median,
                format_optional(dataset.std_dev, precision),
                precision,
                dataset.quartiles.iqr(),
                dataset.outliers.outliers.len(),
                if dataset.passed { "✓" } else { "✗" }
            )?;
        }
        writeln!(output)?;

        for dataset in &results.datasets {
            Self::format_dataset(&mut output, dataset, precision)?;
        }

        writeln!(output, "## Result")?;
        writeln!(output)?;
        if results.passed {
            writeln!(output, "**PASSED**")?;
        } else {
            writeln!(output, "**FAILED**")?;
            writeln!(output)?;
            for failure in &results.failures {
                writeln!(output, "- {}", failure)?;
            }
        }

        Ok(output)
    }

    fn format_dataset(output: &mut String, dataset: &DatasetReport, precision: usize) -> Result<()> {
        let value = |v: f64| dataset.with_unit(&format!("{:.*}", precision, v));
        let optional = |v: Option<f64>| match v {
            Some(v) => value(v),
            None => format_optional(None, precision),
        };

        writeln!(output, "## {}", dataset.name)?;
        writeln!(output)?;
        writeln!(output, "Values: `{}`", format_list(&dataset.values, precision))?;
        writeln!(output)?;
        writeln!(
            output,
            "Deviations from the mean: `{}`",
            format_list(&dataset.deviations.deviations, precision)
        )?;
        writeln!(output)?;

        writeln!(output, "| Statistic | Value |")?;
        writeln!(output, "|---|---:|")?;
        writeln!(output, "| Count | {} |", dataset.summary.count)?;
        writeln!(output, "| Mean | {} |", value(dataset.summary.mean))?;
        writeln!(output, "| Median | {} |", value(dataset.summary.median))?;
        writeln!(
            output,
            "| Mode | {} (×{}) |",
            value(dataset.mode.value),
            dataset.mode.frequency
        )?;
        writeln!(output, "| Min | {} |", value(dataset.summary.min))?;
        writeln!(output, "| Max | {} |", value(dataset.summary.max))?;
        writeln!(output, "| Weighted mean | {} |", optional(dataset.weighted_mean))?;
        writeln!(output, "| Geometric mean | {} |", optional(dataset.geometric_mean))?;
        writeln!(output, "| Harmonic mean | {} |", optional(dataset.harmonic_mean))?;
        writeln!(output, "| Trimmed mean | {} |", optional(dataset.trimmed_mean))?;
        writeln!(
            output,
            "| Variance | {} |",
            format_optional(dataset.variance, precision)
        )?;
        writeln!(output, "| Std deviation | {} |", optional(dataset.std_dev))?;
        if let Some(dispersion) = &dataset.dispersion {
            writeln!(output, "| Range | {} |", value(dispersion.range))?;
            writeln!(
                output,
                "| CV | {:.*}% |",
                precision, dispersion.coefficient_of_variation
            )?;
        }
        writeln!(
            output,
            "| Sum of squared deviations | {:.*} |",
            precision, dataset.deviations.sum_of_squares
        )?;
        if let Some(rule) = &dataset.empirical_rule {
            writeln!(
                output,
                "| Within 1/2/3 SD | {:.1}% / {:.1}% / {:.1}% |",
                rule.within_one, rule.within_two, rule.within_three
            )?;
        }
        writeln!(output, "| Q1 | {} |", value(dataset.quartiles.q1))?;
        writeln!(output, "| Q3 | {} |", value(dataset.quartiles.q3))?;
        writeln!(output, "| IQR | {} |", value(dataset.quartiles.iqr()))?;
        writeln!(
            output,
            "| Fences | {} to {} |",
            value(dataset.outliers.lower_fence),
            value(dataset.outliers.upper_fence)
        )?;
        writeln!(
            output,
            "| Outliers | {} |",
            format_list(&dataset.outliers.outliers, precision)
        )?;
        writeln!(output)?;

        if !dataset.failures.is_empty() {
            for failure in &dataset.failures {
                writeln!(output, "> ✗ {}", failure)?;
            }
            writeln!(output)?;
        }

        Ok(())
    }
}
