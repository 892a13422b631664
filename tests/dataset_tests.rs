//! Integration tests for dataset loading, validation and selection

use std::io::Write;
use tradeoff::{load_dataset, DatasetStore, Selection, TradeoffError, Weight};

#[test]
fn test_select_every_topic_updates_active_tab() {
    let store = DatasetStore::builtin();
    let mut selection = Selection::first(&store).unwrap();

    for key in store.keys() {
        selection.select(&store, key);
        assert_eq!(selection.active(), key);
        assert_eq!(
            store.topics()[selection.index(&store)].key,
            key,
            "active tab index must follow the selected key"
        );
    }
}

#[test]
fn test_unknown_key_leaves_previous_topic_active() {
    let store = DatasetStore::builtin();
    let mut selection = Selection::first(&store).unwrap();
    selection.select(&store, "stack");

    assert!(!selection.select(&store, "definitely-not-a-topic"));
    assert_eq!(selection.active(), "stack");
}

#[test]
fn test_load_valid_dataset_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[topics]]
key = "queue"
title = "Kafka vs RabbitMQ"

[[topics.options]]
name = "Kafka"
score = 8.9
pros = [{{ text = "Replayable log", weight = "high" }}]
cons = [{{ text = "Operational burden", weight = "extreme" }}]
best_for = ["Event sourcing"]
metrics = [{{ label = "throughput", value = "Very High" }}]

[topics.recommendation]
context = "High-volume event pipelines"
choice = "Kafka"
reasoning = "Built for the workload."
"#
    )
    .unwrap();

    let store = load_dataset(file.path()).unwrap();
    assert_eq!(store.keys(), vec!["queue"]);

    let topic = store.get("queue").unwrap();
    assert_eq!(topic.options[0].pros[0].weight, Weight::High);
    // Unknown weight strings fall back to Medium instead of failing the load
    assert_eq!(topic.options[0].cons[0].weight, Weight::Medium);
}

#[test]
fn test_load_rejects_dangling_recommendation() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[topics]]
key = "queue"
title = "Kafka vs RabbitMQ"

[[topics.options]]
name = "Kafka"
score = 8.9
pros = []
cons = []

[topics.recommendation]
context = "ctx"
choice = "Pulsar"
reasoning = "why"
"#
    )
    .unwrap();

    let err = load_dataset(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown option 'Pulsar'"));
    assert!(message.contains("Available options: Kafka"));
}

#[test]
fn test_load_missing_file_has_descriptive_error() {
    let err = load_dataset("/nonexistent/dataset.toml").unwrap_err();
    assert!(matches!(err, TradeoffError::DatasetNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/dataset.toml"));
}

#[test]
fn test_load_rejects_out_of_range_score() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[topics]]
key = "queue"
title = "Kafka vs RabbitMQ"

[[topics.options]]
name = "Kafka"
score = 11.0
pros = []
cons = []

[topics.recommendation]
context = "ctx"
choice = "Kafka"
reasoning = "why"
"#
    )
    .unwrap();

    let err = load_dataset(file.path()).unwrap_err();
    assert!(err.to_string().contains("outside the 0-10 range"));
}
