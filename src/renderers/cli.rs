//! CLI renderer for terminal output with colors and formatting

use crate::renderers::OutputRenderer;
use crate::types::{format_score, ComparisonTopic, OptionProfile, Weight};
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

/// Renders a comparison card to colored terminal text
pub struct CliRenderer {
    /// Whether to include the per-option metrics table
    show_metrics: bool,
}

impl CliRenderer {
    pub fn new() -> Self {
        Self { show_metrics: true }
    }

    /// Create a renderer that skips the metrics tables
    pub fn without_metrics() -> Self {
        Self {
            show_metrics: false,
        }
    }

    fn weight_badge(weight: Weight) -> ColoredString {
        match weight {
            Weight::High => weight.as_str().red(),
            Weight::Medium => weight.as_str().yellow(),
            Weight::Low => weight.as_str().green(),
        }
    }

    fn metrics_table(option: &OptionProfile) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Metric", "Value"]);

        for metric in &option.metrics {
            table.add_row(vec![metric.label.as_str(), metric.value.as_str()]);
        }

        table
    }

    fn render_option(&self, index: usize, option: &OptionProfile) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} {}\n",
            format!("{}. {}", index + 1, option.name).bold(),
            format!("({}/10)", format_score(option.score)).cyan()
        ));

        if self.show_metrics && !option.metrics.is_empty() {
            out.push_str(&format!("{}\n", Self::metrics_table(option)));
        }

        out.push_str(&format!("{}\n", "Strengths".green().bold()));
        for pro in &option.pros {
            out.push_str(&format!(
                "  {} {} [{}]\n",
                "\u{2713}".green(),
                pro.text,
                Self::weight_badge(pro.weight)
            ));
        }

        out.push_str(&format!("{}\n", "Weaknesses".red().bold()));
        for con in &option.cons {
            out.push_str(&format!(
                "  {} {} [{}]\n",
                "\u{2717}".red(),
                con.text,
                Self::weight_badge(con.weight)
            ));
        }

        if !option.best_for.is_empty() {
            out.push_str(&format!("{}\n", "Best for".bold()));
            for item in &option.best_for {
                out.push_str(&format!("  \u{2022} {}\n", item));
            }
        }

        out
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for CliRenderer {
    fn render(&self, topic: &ComparisonTopic) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n\n", topic.title.bold().underline()));

        for (index, option) in topic.options.iter().enumerate() {
            out.push_str(&self.render_option(index, option));
            out.push('\n');
        }

        out.push_str(&format!("{}\n", "Recommendation".bold().underline()));
        out.push_str(&format!(
            "Context: {}\n",
            topic.recommendation.context
        ));
        out.push_str(&format!(
            "Suggested Choice: {}\n",
            topic.recommendation.choice.green().bold()
        ));
        out.push_str(&format!("Reasoning: {}\n", topic.recommendation.reasoning));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetStore;

    #[test]
    fn test_render_contains_all_options() {
        colored::control::set_override(false);
        let store = DatasetStore::builtin();
        let out = CliRenderer::new().render(store.get("cloud").unwrap());

        assert!(out.contains("1. AWS"));
        assert!(out.contains("2. Google Cloud"));
        assert!(out.contains("3. Azure"));
        assert!(out.contains("Suggested Choice: Google Cloud"));
    }

    #[test]
    fn test_render_without_metrics_skips_tables() {
        colored::control::set_override(false);
        let store = DatasetStore::builtin();
        let out = CliRenderer::without_metrics().render(store.get("api").unwrap());

        assert!(!out.contains("Metric"));
        assert!(out.contains("Strengths"));
    }

    #[test]
    fn test_metrics_table_keeps_stored_order() {
        colored::control::set_override(false);
        let store = DatasetStore::builtin();
        let option = &store.get("api").unwrap().options[0];
        let table = CliRenderer::metrics_table(option).to_string();

        let complexity = table.find("complexity").unwrap();
        let performance = table.find("performance").unwrap();
        let scalability = table.find("scalability").unwrap();
        let learning = table.find("learningCurve").unwrap();
        assert!(complexity < performance);
        assert!(performance < scalability);
        assert!(scalability < learning);
    }
}
