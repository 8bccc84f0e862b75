//! Integration of the Antigravity editor with a project directory.
//!
//! The crate locates an installed Antigravity executable, remembers it in a
//! small preference file, opens files and folders in it with VS-Code-style
//! arguments, and writes a few editor configuration files into a project.
//!
//! Hosts embed [`AntigravityEditor`], handing it a [`PreferenceStore`], a
//! [`ProjectSync`] hook, the operating system to search for, and the project
//! root. The `gravity` binary wires those up for command-line use.

pub mod config;
pub mod constants;
pub mod discovery;
pub mod editor;
pub mod error;
pub mod generate;
pub mod launch;
pub mod logging;
pub mod platform;

pub use config::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences};
pub use discovery::{
    candidate_paths, find_installed_path, find_installed_path_with, is_valid_path,
    looks_like_expected_editor, FileProbe, RealFs,
};
pub use editor::{AntigravityEditor, Installation, NoopSync, ProjectSync};
pub use error::{EditorError, Result};
pub use generate::{
    generate_all, generate_editor_config, generate_omnisharp_config, generate_vscode_settings,
};
pub use launch::{build_arguments, launch, quote_path, spawn_detached, OpenRequest};
pub use platform::{KnownDirs, OsKind};
