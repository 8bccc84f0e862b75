//! Error type for editor discovery and launch.
//!
//! Every variant is recoverable: callers surface the message for the single
//! user action that failed and carry on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or launching the editor
#[derive(Error, Debug)]
pub enum EditorError {
    /// No path is configured and auto-detection found nothing
    #[error(
        "Antigravity path is not configured. Run `gravity reset-path` or `gravity set-path <PATH>`."
    )]
    NotConfigured,

    /// A configured path no longer points to an existing file
    #[error("Antigravity not found at: {}", .0.display())]
    PathInvalid(PathBuf),

    /// The operating system refused to start the process
    #[error("Failed to open editor {}: {source}", path.display())]
    SpawnFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing the preference store failed
    #[error("Preferences error: {0}")]
    Preferences(#[from] io::Error),
}

impl EditorError {
    /// Create a spawn failure for the given executable
    pub fn spawn_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SpawnFailed {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
