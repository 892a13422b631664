//! Tradeoff - terminal trade-off analyzer
//!
//! This crate presents pre-authored comparison datasets as tabbed, scored
//! comparison cards and exports them as deterministic plain-text reports.
//! The dataset is immutable for the whole session; the only mutable state
//! is the selected topic.

// Core modules
pub mod dataset;
pub mod error;
pub mod selection;
pub mod types;

// Presentation and output modules
pub mod output;
pub mod renderers;

// Re-export main types for convenience
pub use dataset::{load_dataset, DatasetStore};
pub use error::{Result, TradeoffError};
pub use output::ReportWriter;
pub use renderers::{CliRenderer, OutputRenderer, TextReportRenderer};
pub use selection::Selection;
pub use types::{
    ComparisonTopic, Metric, OptionProfile, Recommendation, Weight, WeightedPoint,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the built-in dataset wires through the public API
    #[test]
    fn test_builtin_store() {
        let store = DatasetStore::builtin();
        assert_eq!(store.len(), 3);
        assert!(store.contains("api"));

        let selection = Selection::first(&store).unwrap();
        assert_eq!(selection.active(), "api");
    }

    /// Test that error types work correctly
    #[test]
    fn test_error_types() {
        let error = TradeoffError::invalid_dataset("test error");
        assert!(error.to_string().contains("Invalid dataset"));

        let error = TradeoffError::unknown_topic("x", &["api", "cloud"]);
        assert!(error.to_string().contains("Unknown topic 'x'"));
        assert!(error.to_string().contains("api, cloud"));
    }

    /// Test that a render pipeline runs end to end
    #[test]
    fn test_render_pipeline() {
        let store = DatasetStore::builtin();
        let topic = store.get("api").unwrap();
        let report = TextReportRenderer::new().render(topic);
        assert!(report.contains("1. REST API (Score: 7.5/10)"));
    }
}
