//! Key/value preference stores the editor integration reads and writes.

use super::io::{load_preferences_from_file, modify_preferences_file};
use super::path::get_preferences_file_path;
use super::structure::Preferences;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A string key/value store that survives process restarts.
pub trait PreferenceStore {
    /// Returns the value for `key`, or `None` if unset or unreadable
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`
    fn set_string(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Removes `key`, returning whether it was present
    fn remove(&mut self, key: &str) -> io::Result<bool>;
}

/// Preference store backed by a JSON file.
///
/// The file is re-read on every lookup so edits made by other processes are
/// picked up.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// Opens the store at the default preferences path
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences path cannot be determined
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::at(get_preferences_file_path()?))
    }

    /// Opens the store at a specific file path
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        JsonPreferenceStore { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get_string(&self, key: &str) -> Option<String> {
        match load_preferences_from_file(&self.path) {
            Ok(preferences) => preferences.get(key).map(str::to_string),
            Err(e) => {
                warn!(path = %self.path.display(), "Ignoring unreadable preferences: {}", e);
                None
            }
        }
    }

    fn set_string(&mut self, key: &str, value: &str) -> io::Result<()> {
        modify_preferences_file(&self.path, |preferences| preferences.set(key, value))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<bool> {
        modify_preferences_file(&self.path, |preferences| preferences.remove(key))
    }
}

/// Preference store held in memory, for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    preferences: Preferences,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the store
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.preferences.get(key).map(str::to_string)
    }

    fn set_string(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.preferences.set(key, value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<bool> {
        Ok(self.preferences.remove(key))
    }
}
