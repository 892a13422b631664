use crate::dataset::DatasetStore;
use crate::error::{Result, TradeoffError};

/// The one piece of mutable UI state: the active topic key.
///
/// Owned by a single component per session. Every mutation validates the
/// key against the store, so an unknown key can never become active; the
/// previous selection simply stays in place.
#[derive(Debug, Clone)]
pub struct Selection {
    active: String,
}

impl Selection {
    /// Start at the store's first topic. `None` only for an empty store,
    /// which validation rules out for any store built through `new`.
    pub fn first(store: &DatasetStore) -> Option<Self> {
        store.default_key().map(|key| Self {
            active: key.to_string(),
        })
    }

    /// Start at a specific topic, erroring on an unknown key
    pub fn at(store: &DatasetStore, key: &str) -> Result<Self> {
        if store.contains(key) {
            Ok(Self {
                active: key.to_string(),
            })
        } else {
            Err(TradeoffError::unknown_topic(key, &store.keys()))
        }
    }

    /// Currently active topic key
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Position of the active topic in the store's display order
    pub fn index(&self, store: &DatasetStore) -> usize {
        store.index_of(&self.active).unwrap_or(0)
    }

    /// Select a topic by key. Unknown keys are ignored and the active
    /// topic is left unchanged. Returns whether the selection changed.
    pub fn select(&mut self, store: &DatasetStore, key: &str) -> bool {
        if store.contains(key) && self.active != key {
            self.active = key.to_string();
            true
        } else {
            false
        }
    }

    /// Select a topic by display-order index; out-of-range is a no-op
    pub fn select_index(&mut self, store: &DatasetStore, index: usize) -> bool {
        match store.topics().get(index) {
            Some(topic) => {
                let key = topic.key.clone();
                self.select(store, &key)
            }
            None => false,
        }
    }

    /// Move to the next topic, wrapping past the end
    pub fn next(&mut self, store: &DatasetStore) {
        if store.is_empty() {
            return;
        }
        let next = (self.index(store) + 1) % store.len();
        self.select_index(store, next);
    }

    /// Move to the previous topic, wrapping before the start
    pub fn previous(&mut self, store: &DatasetStore) {
        if store.is_empty() {
            return;
        }
        let current = self.index(store);
        let previous = if current == 0 {
            store.len() - 1
        } else {
            current - 1
        };
        self.select_index(store, previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_starts_at_default_key() {
        let store = DatasetStore::builtin();
        let selection = Selection::first(&store).unwrap();
        assert_eq!(selection.active(), "api");
        assert_eq!(selection.index(&store), 0);
    }

    #[test]
    fn test_select_every_key() {
        let store = DatasetStore::builtin();
        let mut selection = Selection::first(&store).unwrap();
        for key in store.keys() {
            selection.select(&store, key);
            assert_eq!(selection.active(), key);
        }
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let store = DatasetStore::builtin();
        let mut selection = Selection::first(&store).unwrap();
        selection.select(&store, "cloud");
        assert!(!selection.select(&store, "missing"));
        assert_eq!(selection.active(), "cloud");
    }

    #[test]
    fn test_at_unknown_key_errors() {
        let store = DatasetStore::builtin();
        let err = Selection::at(&store, "missing").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown topic 'missing'"));
        assert!(message.contains("api, cloud, stack"));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let store = DatasetStore::builtin();
        let mut selection = Selection::first(&store).unwrap();

        selection.next(&store);
        assert_eq!(selection.active(), "cloud");
        selection.next(&store);
        assert_eq!(selection.active(), "stack");
        selection.next(&store);
        assert_eq!(selection.active(), "api");

        selection.previous(&store);
        assert_eq!(selection.active(), "stack");
    }

    #[test]
    fn test_select_index_out_of_range_is_noop() {
        let store = DatasetStore::builtin();
        let mut selection = Selection::first(&store).unwrap();
        assert!(!selection.select_index(&store, 99));
        assert_eq!(selection.active(), "api");
    }
}
