//! Defines the `Preferences` struct and its implementation.

use std::collections::BTreeMap;

/// String key/value preferences persisted across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, String>,
}

impl Preferences {
    /// Creates an empty set of preferences
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`
    ///
    /// # Returns
    ///
    /// Returns `true` if the stored value changed
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        if self.get(key) == Some(value) {
            return false;
        }
        self.values.insert(key.to_string(), value.to_string());
        true
    }

    /// Removes `key`
    ///
    /// # Returns
    ///
    /// Returns `true` if the key was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
