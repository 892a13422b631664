//! Plain-text report serializer.
//!
//! The output layout is a contract: given the same topic and the same
//! clock value, the rendered text is byte-identical. Everything is emitted
//! in the dataset's stored order.

use crate::renderers::OutputRenderer;
use crate::types::{format_score, ComparisonTopic, OptionProfile};
use chrono::{DateTime, Local};

/// Flattens a comparison topic into the downloadable text report
pub struct TextReportRenderer {
    generated_at: DateTime<Local>,
}

impl TextReportRenderer {
    /// Renderer stamped with the current time
    pub fn new() -> Self {
        Self {
            generated_at: Local::now(),
        }
    }

    /// Renderer with a fixed generation time, used to pin the timestamp
    pub fn with_generated_at(generated_at: DateTime<Local>) -> Self {
        Self { generated_at }
    }

    fn render_option(index: usize, option: &OptionProfile) -> String {
        let mut block = String::new();

        block.push('\n');
        block.push_str(&format!(
            "{}. {} (Score: {}/10)\n",
            index + 1,
            option.name,
            format_score(option.score)
        ));
        block.push_str(&"=".repeat(option.name.chars().count() + 20));
        block.push('\n');

        block.push_str("\nSTRENGTHS:\n");
        let strengths: Vec<String> = option
            .pros
            .iter()
            .map(|pro| format!("  \u{2713} {} [{} priority]", pro.text, pro.weight))
            .collect();
        block.push_str(&strengths.join("\n"));
        block.push('\n');

        block.push_str("\nWEAKNESSES:\n");
        let weaknesses: Vec<String> = option
            .cons
            .iter()
            .map(|con| format!("  \u{2717} {} [{} impact]", con.text, con.weight))
            .collect();
        block.push_str(&weaknesses.join("\n"));
        block.push('\n');

        block.push_str("\nBEST FOR:\n");
        let uses: Vec<String> = option
            .best_for
            .iter()
            .map(|item| format!("  \u{2022} {}", item))
            .collect();
        block.push_str(&uses.join("\n"));
        block.push('\n');

        block.push_str("\nKEY METRICS:\n");
        let metrics: Vec<String> = option
            .metrics
            .iter()
            .map(|m| format!("  {}: {}", m.label, m.value))
            .collect();
        block.push_str(&metrics.join("\n"));
        block.push('\n');

        block
    }
}

impl Default for TextReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for TextReportRenderer {
    fn render(&self, topic: &ComparisonTopic) -> String {
        let mut report = String::new();

        report.push('\n');
        report.push_str("TRADE-OFF ANALYSIS REPORT\n");
        report.push_str("========================\n");
        report.push_str(&topic.title);
        report.push('\n');
        report.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.format("%-m/%-d/%Y")
        ));
        report.push('\n');

        let option_blocks: Vec<String> = topic
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| Self::render_option(index, option))
            .collect();
        report.push_str(&option_blocks.join("\n\n"));

        report.push_str("\n\nRECOMMENDATION\n");
        report.push_str("==============\n");
        report.push_str(&format!("Context: {}\n", topic.recommendation.context));
        report.push_str(&format!(
            "Suggested Choice: {}\n",
            topic.recommendation.choice
        ));
        report.push_str(&format!("Reasoning: {}\n", topic.recommendation.reasoning));

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetStore;
    use chrono::TimeZone;

    fn fixed_renderer() -> TextReportRenderer {
        let generated_at = Local.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
        TextReportRenderer::with_generated_at(generated_at)
    }

    #[test]
    fn test_report_header() {
        let store = DatasetStore::builtin();
        let report = fixed_renderer().render(store.get("api").unwrap());

        assert!(report.starts_with("\nTRADE-OFF ANALYSIS REPORT\n"));
        assert!(report.contains("========================\nREST API vs GraphQL\n"));
        assert!(report.contains("Generated: 8/29/2026\n"));
    }

    #[test]
    fn test_option_numbering_and_underline() {
        let store = DatasetStore::builtin();
        let report = fixed_renderer().render(store.get("api").unwrap());

        assert!(report.contains("1. REST API (Score: 7.5/10)"));
        assert!(report.contains("2. GraphQL (Score: 7.8/10)"));

        // Underline length is name length + 20
        let underline = "=".repeat("REST API".len() + 20);
        assert!(report.contains(&format!("1. REST API (Score: 7.5/10)\n{}\n", underline)));
    }

    #[test]
    fn test_section_line_formats() {
        let store = DatasetStore::builtin();
        let report = fixed_renderer().render(store.get("api").unwrap());

        assert!(report
            .contains("STRENGTHS:\n  \u{2713} Simple and widely understood [high priority]"));
        assert!(report
            .contains("  \u{2717} Over-fetching or under-fetching data [high impact]"));
        assert!(report.contains("  \u{2022} Simple CRUD operations"));
        assert!(report.contains("KEY METRICS:\n  complexity: Low\n  performance: Good"));
    }

    #[test]
    fn test_whole_score_renders_without_decimal() {
        let store = DatasetStore::builtin();
        let report = fixed_renderer().render(store.get("stack").unwrap());
        assert!(report.contains("3. Django + PostgreSQL + React (Score: 8/10)"));
    }

    #[test]
    fn test_recommendation_block() {
        let store = DatasetStore::builtin();
        let report = fixed_renderer().render(store.get("api").unwrap());

        assert!(report.contains(
            "RECOMMENDATION\n==============\nContext: For a startup MVP with limited resources\n"
        ));
        assert!(report.contains("Suggested Choice: REST API\n"));
        assert!(report.ends_with("when data requirements become more complex.\n"));
    }

    #[test]
    fn test_render_is_deterministic_for_fixed_clock() {
        let store = DatasetStore::builtin();
        let topic = store.get("cloud").unwrap();
        let renderer = fixed_renderer();

        assert_eq!(renderer.render(topic), renderer.render(topic));
    }

    #[test]
    fn test_metric_order_matches_stored_order() {
        let store = DatasetStore::builtin();
        let topic = store.get("cloud").unwrap();
        let report = fixed_renderer().render(topic);

        for option in &topic.options {
            let mut cursor = report.find(&format!(". {} (Score:", option.name)).unwrap();
            for metric in &option.metrics {
                let line = format!("  {}: {}", metric.label, metric.value);
                let at = report[cursor..].find(&line).unwrap();
                cursor += at + line.len();
            }
        }
    }
}
