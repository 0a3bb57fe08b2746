//! JSON reporter for analysis results

use crate::analysis::AnalysisResults;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format analysis results as JSON
    ///
    /// # Arguments
    ///
    /// * `results` - The analysis results to format
    /// * `pretty` - Whether to pretty-print the JSON
    ///
    /// # Returns
    ///
    /// JSON string representation of the results. Values are written at full
    /// precision; the `precision` setting only applies to the text reporters.
    pub fn format(results: &AnalysisResults, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(results)?
        } else {
            serde_json::to_string(results)?
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::test_support::create_test_results;

    #[test]
    fn test_json_format_compact() {
        let results = create_test_results();
        let output = JsonReporter::format(&results, false).unwrap();

        // Compact JSON should not have newlines
        assert!(!output.contains('\n'));
        assert!(output.contains("\"title\":\"Test Suite\""));
        assert!(output.contains("\"correction\":\"sample\""));
    }

    #[test]
    fn test_json_format_pretty() {
        let results = create_test_results();
        let output = JsonReporter::format(&results, true).unwrap();

        // Pretty JSON should have indentation
        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }

    #[test]
    fn test_json_keeps_full_precision() {
        let results = create_test_results();
        let value: serde_json::Value =
            serde_json::from_str(&JsonReporter::format(&results, false).unwrap()).unwrap();

        assert_eq!(value["datasets"][0]["summary"]["mean"], 25.625);
        assert_eq!(value["datasets"][0]["outliers"]["outlier_indices"][0], 7);
        assert!(value["datasets"][0]["geometric_mean"].is_number());
        assert!(value["datasets"][0]["weighted_mean"].is_null());
    }

    #[test]
    fn test_json_roundtrip() {
        let results = create_test_results();
        let json = JsonReporter::format(&results, false).unwrap();
        let parsed: AnalysisResults = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.title, results.title);
        assert_eq!(parsed.passed, results.passed);
        assert_eq!(parsed.datasets.len(), results.datasets.len());
        assert_eq!(parsed.datasets[1].quartiles, results.datasets[1].quartiles);
    }
}
