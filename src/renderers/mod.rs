//! Topic renderers for different output surfaces
//!
//! Rendering stays separate from the dataset and selection logic; every
//! renderer is a pure function from a topic to a string (the TUI draws
//! directly but reuses the same theme mapping).

use crate::types::ComparisonTopic;

/// Render a comparison topic to a string in a specific format
pub trait OutputRenderer {
    fn render(&self, topic: &ComparisonTopic) -> String;
}

// Sub-modules
pub mod cli;
pub mod text;
pub mod tui;

// Re-exports for convenience
pub use cli::CliRenderer;
pub use text::TextReportRenderer;
