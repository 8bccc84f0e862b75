//! Operating-system kinds and the well-known directories discovery builds on.

use directories::BaseDirs;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default machine-wide program directory on Windows
const DEFAULT_PROGRAM_FILES: &str = r"C:\Program Files";

/// Default 32-bit program directory on 64-bit Windows
const DEFAULT_PROGRAM_FILES_X86: &str = r"C:\Program Files (x86)";

/// Operating systems with a known installation layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsKind {
    Windows,
    MacOs,
    Linux,
}

impl OsKind {
    /// All supported operating systems
    pub const ALL: [OsKind; 3] = [OsKind::Windows, OsKind::MacOs, OsKind::Linux];

    /// Returns the operating system this binary is running on, if supported
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(OsKind::Windows)
        } else if cfg!(target_os = "macos") {
            Some(OsKind::MacOs)
        } else if cfg!(target_os = "linux") {
            Some(OsKind::Linux)
        } else {
            None
        }
    }

    /// Lowercase identifier used on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            OsKind::Windows => "windows",
            OsKind::MacOs => "macos",
            OsKind::Linux => "linux",
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(OsKind::Windows),
            "macos" | "mac" | "osx" => Ok(OsKind::MacOs),
            "linux" => Ok(OsKind::Linux),
            other => Err(format!(
                "unknown operating system '{}' (expected windows, macos or linux)",
                other
            )),
        }
    }
}

/// Well-known directories that installation candidates are rooted in.
///
/// A `None` entry means the directory could not be determined; candidates
/// built on it are skipped rather than guessed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownDirs {
    /// The user's home directory
    pub home: Option<PathBuf>,
    /// Per-user application data (`%LOCALAPPDATA%` on Windows)
    pub local_app_data: Option<PathBuf>,
    /// Machine-wide program directory (`%ProgramFiles%`)
    pub program_files: Option<PathBuf>,
    /// 32-bit machine-wide program directory (`%ProgramFiles(x86)%`)
    pub program_files_x86: Option<PathBuf>,
}

impl KnownDirs {
    /// Collects the well-known directories from the running environment
    pub fn from_env() -> Self {
        let base_dirs = BaseDirs::new();

        let home = base_dirs.as_ref().map(|dirs| dirs.home_dir().to_path_buf());

        let local_app_data = env_path("LOCALAPPDATA").or_else(|| {
            if cfg!(windows) {
                base_dirs
                    .as_ref()
                    .map(|dirs| dirs.data_local_dir().to_path_buf())
            } else {
                None
            }
        });

        let program_files =
            env_path("ProgramFiles").or_else(|| Some(PathBuf::from(DEFAULT_PROGRAM_FILES)));
        let program_files_x86 = env_path("ProgramFiles(x86)")
            .or_else(|| Some(PathBuf::from(DEFAULT_PROGRAM_FILES_X86)));

        KnownDirs {
            home,
            local_app_data,
            program_files,
            program_files_x86,
        }
    }
}

/// Reads a non-empty environment variable as a path
fn env_path(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
