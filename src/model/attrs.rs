use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttrError {
    #[error("missing attribute: {0}")]
    MissingAttribute(String),

    #[error("attribute {key} has {count} values, expected exactly one")]
    MultipleValues { key: String, count: usize },
}

/// Multi-valued attribute store used for both FEATS and MISC.
///
/// A key maps to a set of values; an absent key means the attribute is unset,
/// never an empty set. Insertion order is preserved so that iteration, and
/// therefore diagnostic output, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttrBag {
    entries: IndexMap<String, IndexSet<String>>,
}

impl AttrBag {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string());
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.entries.get(key).is_some_and(|set| set.contains(value))
    }

    /// All values recorded for `key`, in insertion order. Empty if unset.
    pub fn values(&self, key: &str) -> impl Iterator<Item = &str> {
        self.entries
            .get(key)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// First value recorded for `key`, if any.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values(key).next()
    }

    /// The single value of `key`.
    ///
    /// # Errors
    /// `MissingAttribute` if the key is unset, `MultipleValues` if it holds
    /// more than one value. Checks are expected to test presence first.
    pub fn single_value(&self, key: &str) -> Result<&str, AttrError> {
        let set = self
            .entries
            .get(key)
            .ok_or_else(|| AttrError::MissingAttribute(key.to_string()))?;
        if set.len() > 1 {
            return Err(AttrError::MultipleValues {
                key: key.to_string(),
                count: set.len(),
            });
        }
        set.first()
            .map(String::as_str)
            .ok_or_else(|| AttrError::MissingAttribute(key.to_string()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
#[path = "attrs_tests.rs"]
mod tests;
