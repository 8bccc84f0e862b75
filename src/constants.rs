//! Shared constants used across the application.

/// Display name of the editor
pub const EDITOR_NAME: &str = "Antigravity";

/// Display name used when no usable installation is known
pub const NOT_CONFIGURED_NAME: &str = "Antigravity (Not Configured)";

/// Lowercase product name matched against executable file names
pub const EDITOR_NAME_LOWER: &str = "antigravity";

/// Executable file name on Windows
pub const WINDOWS_EXECUTABLE_NAME: &str = "Antigravity.exe";

/// Executable file name inside the macOS app bundle
pub const MAC_EXECUTABLE_NAME: &str = "Antigravity";

/// Executable file name on Linux
pub const LINUX_EXECUTABLE_NAME: &str = "antigravity";

/// Preference key under which the editor path is persisted
pub const EDITOR_PATH_KEY: &str = "Antigravity_EditorPath";

/// Command-line flag that reuses the last active editor window
pub const REUSE_WINDOW_FLAG: &str = "-r";

/// Command-line flag that opens a file at `path:line:column`
pub const GOTO_FLAG: &str = "-g";

/// Column used when a line is requested without a column
pub const DEFAULT_COLUMN: u32 = 1;
