use crate::dataset::DatasetStore;
use crate::error::{Result, TradeoffError};
use crate::types::ComparisonTopic;
use serde::Deserialize;
use std::path::Path;

/// On-disk dataset shape: a TOML file with `[[topics]]` entries
#[derive(Debug, Deserialize)]
pub struct DatasetFile {
    pub topics: Vec<ComparisonTopic>,
}

/// Load a dataset from a TOML file and validate it.
///
/// Loaded files replace the built-in topics entirely, so a user dataset
/// gets the exact same validation as the compiled-in one.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<DatasetStore> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Err(TradeoffError::DatasetNotFound {
            path: path_ref.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path_ref).map_err(TradeoffError::Io)?;

    let file: DatasetFile = toml::from_str(&content).map_err(|e| {
        TradeoffError::invalid_dataset(format!(
            "Failed to parse TOML in {}: {}",
            path_ref.display(),
            e
        ))
    })?;

    DatasetStore::new(file.topics)
}

/// Parse a dataset from a TOML string, without touching the filesystem
pub fn parse_dataset(content: &str) -> Result<Vec<ComparisonTopic>> {
    let file: DatasetFile = toml::from_str(content)?;
    Ok(file.topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[topics]]
key = "db"
title = "SQL vs NoSQL"

[[topics.options]]
name = "PostgreSQL"
score = 8.5
pros = [{ text = "ACID guarantees", weight = "high" }]
cons = [{ text = "Schema migrations", weight = "medium" }]
best_for = ["Relational data"]
metrics = [{ label = "maturity", value = "Very Mature" }]

[topics.recommendation]
context = "General purpose persistence"
choice = "PostgreSQL"
reasoning = "Safe default."
"#;

    #[test]
    fn test_parse_dataset() {
        let topics = parse_dataset(SAMPLE).unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].key, "db");
        assert_eq!(topics[0].options[0].metrics[0].label, "maturity");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset("does-not-exist.toml").unwrap_err();
        assert!(matches!(err, TradeoffError::DatasetNotFound { .. }));
    }
}
