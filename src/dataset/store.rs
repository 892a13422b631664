use crate::dataset::{builtin, validator};
use crate::error::Result;
use crate::types::ComparisonTopic;

/// Immutable, ordered collection of comparison topics.
///
/// Built once at startup and read-only afterwards. Topic order is the
/// insertion order of the source dataset and drives tab order everywhere.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    topics: Vec<ComparisonTopic>,
}

impl DatasetStore {
    /// Build a store from topics, failing fast on a malformed dataset
    pub fn new(topics: Vec<ComparisonTopic>) -> Result<Self> {
        validator::validate(&topics)?;
        Ok(Self { topics })
    }

    /// The compiled-in comparison topics (api, cloud, stack).
    ///
    /// The built-in data is covered by tests that run it through the same
    /// validator as loaded datasets, so construction here is infallible.
    pub fn builtin() -> Self {
        Self {
            topics: builtin::topics(),
        }
    }

    /// Look up a topic by key
    pub fn get(&self, key: &str) -> Option<&ComparisonTopic> {
        self.topics.iter().find(|t| t.key == key)
    }

    /// Topic keys in display order
    pub fn keys(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.key.as_str()).collect()
    }

    /// All topics in display order
    pub fn topics(&self) -> &[ComparisonTopic] {
        &self.topics
    }

    /// Key of the first topic, the initial selection
    pub fn default_key(&self) -> Option<&str> {
        self.topics.first().map(|t| t.key.as_str())
    }

    /// Position of a key in display order
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
