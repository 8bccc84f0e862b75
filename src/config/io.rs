//! Handles all file input/output operations for the preferences.

use super::structure::Preferences;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Loads preferences from a specific file path
///
/// A missing or blank file yields empty preferences.
///
/// # Errors
///
/// Returns an error if file reading fails, or `InvalidData` if the JSON
/// cannot be parsed
pub fn load_preferences_from_file<P: AsRef<Path>>(path: P) -> io::Result<Preferences> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Preferences::default());
    }

    let content = fs::read_to_string(path)?;
    parse_preferences(path, &content)
}

/// Saves preferences to a specific file path
///
/// The parent directory is created if needed, and the file is replaced
/// atomically by writing a sibling temporary file and renaming it.
///
/// # Errors
///
/// Returns an error if directory creation, serialization or writing fails
pub fn save_preferences_to_file<P: AsRef<Path>>(
    preferences: &Preferences,
    path: P,
) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = serde_json::to_string_pretty(preferences).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to serialize preferences: {}", e),
        )
    })?;

    // Ensure the file ends with a newline
    if !content.ends_with('\n') {
        content.push('\n');
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    debug!(path = %path.display(), "Saved preferences");
    Ok(())
}

/// Reads a preferences file, applies `modifier`, and writes it back if changed
///
/// # Arguments
///
/// * `path` - Path to the preferences file
/// * `modifier` - Mutates the preferences and returns whether anything changed
///
/// # Errors
///
/// Returns an error if loading or saving fails
pub fn modify_preferences_file<P, F>(path: P, modifier: F) -> io::Result<bool>
where
    P: AsRef<Path>,
    F: FnOnce(&mut Preferences) -> bool,
{
    let path = path.as_ref();
    let mut preferences = load_preferences_from_file(path)?;

    let changed = modifier(&mut preferences);
    if changed {
        save_preferences_to_file(&preferences, path)?;
    }

    Ok(changed)
}

fn parse_preferences(path: &Path, content: &str) -> io::Result<Preferences> {
    // Trim any trailing whitespace or newlines that might cause parsing issues
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return Ok(Preferences::default());
    }

    serde_json::from_str(trimmed).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Failed to parse preferences file at {}: {} (content length: {} chars)",
                path.display(),
                e,
                trimmed.len()
            ),
        )
    })
}
