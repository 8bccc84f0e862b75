//! Handles the logic for determining the preferences file path.

use directories::ProjectDirs;
use std::env;
use std::io;
use std::path::PathBuf;

/// Application name used for the configuration directory
const APP_NAME: &str = "gravity";

/// Preferences file name
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "GRAVITY_CONFIG_DIR";

/// Returns the path to the preferences file
///
/// Resolution order:
/// - `$GRAVITY_CONFIG_DIR/preferences.json` when the variable is set
/// - the platform configuration directory:
///   - Linux: `$XDG_CONFIG_HOME/gravity` or `$HOME/.config/gravity`
///   - macOS: `$HOME/Library/Application Support/gravity`
///   - Windows: `%APPDATA%\gravity\config`
/// - `$HOME/.config/gravity/preferences.json` as a last resort
///
/// # Errors
///
/// Returns an error if no configuration directory can be determined
pub fn get_preferences_file_path() -> io::Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir).join(PREFERENCES_FILE_NAME));
    }

    if let Some(project_dirs) = ProjectDirs::from("", "", APP_NAME) {
        return Ok(project_dirs.config_dir().join(PREFERENCES_FILE_NAME));
    }

    let home_dir = env::var_os("HOME").filter(|home| !home.is_empty()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Unable to determine home directory for preferences path",
        )
    })?;

    Ok(PathBuf::from(home_dir)
        .join(".config")
        .join(APP_NAME)
        .join(PREFERENCES_FILE_NAME))
}
