use crate::error::{Result, TradeoffError};
use crate::types::ComparisonTopic;
use std::collections::HashSet;

/// Validate a dataset before it becomes a store.
///
/// Datasets are authored ahead of time (compiled in or loaded from a file),
/// so any malformation is an authoring bug and is rejected here with a
/// descriptive message rather than surfacing later as a rendering glitch.
pub fn validate(topics: &[ComparisonTopic]) -> Result<()> {
    if topics.is_empty() {
        return Err(TradeoffError::invalid_dataset(
            "Dataset has no topics. Add at least one [[topics]] entry.",
        ));
    }

    let mut seen_keys = HashSet::new();
    for topic in topics {
        if topic.key.trim().is_empty() {
            return Err(TradeoffError::invalid_dataset(format!(
                "Topic '{}' has an empty key",
                topic.title
            )));
        }

        if !seen_keys.insert(topic.key.as_str()) {
            return Err(TradeoffError::invalid_dataset(format!(
                "Duplicate topic key '{}'",
                topic.key
            )));
        }

        if topic.options.is_empty() {
            return Err(TradeoffError::invalid_dataset(format!(
                "Topic '{}' has no options. Every topic needs at least one option.",
                topic.key
            )));
        }

        for option in &topic.options {
            if !(0.0..=10.0).contains(&option.score) {
                return Err(TradeoffError::invalid_dataset(format!(
                    "Option '{}' in topic '{}' has score {} outside the 0-10 range",
                    option.name, topic.key, option.score
                )));
            }
        }

        // The recommendation must point at a real option
        if topic
            .option_by_name(&topic.recommendation.choice)
            .is_none()
        {
            let names = topic
                .options
                .iter()
                .map(|o| o.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(TradeoffError::invalid_dataset(format!(
                "Recommendation in topic '{}' names unknown option '{}'. Available options: {}",
                topic.key, topic.recommendation.choice, names
            )));
        }
    }

    Ok(())
}
