//! Locating the Antigravity executable without user configuration.
//!
//! Each operating system has its own ordered candidate table. Order encodes
//! install priority: per-user installs come before machine-wide ones, and
//! package-manager locations before manual or portable installs. Discovery
//! returns the first candidate that exists, never a "better" later one.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::{
    EDITOR_NAME_LOWER, LINUX_EXECUTABLE_NAME, MAC_EXECUTABLE_NAME, WINDOWS_EXECUTABLE_NAME,
};
use crate::platform::{KnownDirs, OsKind};

/// Directory a candidate path is rooted in
#[derive(Debug, Clone, Copy)]
enum Root {
    /// The first segment is already absolute
    Filesystem,
    Home,
    LocalAppData,
    ProgramFiles,
    ProgramFilesX86,
}

/// One entry of a candidate table
struct Candidate {
    root: Root,
    segments: &'static [&'static str],
}

const WINDOWS_CANDIDATES: &[Candidate] = &[
    // Per-user installer, the default for VS Code forks
    Candidate {
        root: Root::LocalAppData,
        segments: &["Programs", "Antigravity", WINDOWS_EXECUTABLE_NAME],
    },
    Candidate {
        root: Root::ProgramFiles,
        segments: &["Antigravity", WINDOWS_EXECUTABLE_NAME],
    },
    Candidate {
        root: Root::ProgramFilesX86,
        segments: &["Antigravity", WINDOWS_EXECUTABLE_NAME],
    },
    Candidate {
        root: Root::LocalAppData,
        segments: &["Programs", "antigravity", WINDOWS_EXECUTABLE_NAME],
    },
    Candidate {
        root: Root::LocalAppData,
        segments: &["Programs", "Google Antigravity", WINDOWS_EXECUTABLE_NAME],
    },
];

const MAC_CANDIDATES: &[Candidate] = &[
    Candidate {
        root: Root::Filesystem,
        segments: &[
            "/Applications",
            "Antigravity.app",
            "Contents",
            "MacOS",
            MAC_EXECUTABLE_NAME,
        ],
    },
    Candidate {
        root: Root::Home,
        segments: &[
            "Applications",
            "Antigravity.app",
            "Contents",
            "MacOS",
            MAC_EXECUTABLE_NAME,
        ],
    },
];

const LINUX_CANDIDATES: &[Candidate] = &[
    Candidate {
        root: Root::Filesystem,
        segments: &["/usr/bin", LINUX_EXECUTABLE_NAME],
    },
    Candidate {
        root: Root::Filesystem,
        segments: &["/usr/local/bin", LINUX_EXECUTABLE_NAME],
    },
    Candidate {
        root: Root::Home,
        segments: &[".local", "bin", LINUX_EXECUTABLE_NAME],
    },
    Candidate {
        root: Root::Filesystem,
        segments: &["/opt/antigravity", LINUX_EXECUTABLE_NAME],
    },
];

/// Answers whether a regular file exists at a path.
///
/// Discovery goes through this trait so tests can seed a fake filesystem.
pub trait FileProbe {
    fn is_file(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileProbe for RealFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn table(os: OsKind) -> &'static [Candidate] {
    match os {
        OsKind::Windows => WINDOWS_CANDIDATES,
        OsKind::MacOs => MAC_CANDIDATES,
        OsKind::Linux => LINUX_CANDIDATES,
    }
}

fn resolve_root(root: Root, dirs: &KnownDirs) -> Option<PathBuf> {
    match root {
        Root::Filesystem => Some(PathBuf::new()),
        Root::Home => dirs.home.clone(),
        Root::LocalAppData => dirs.local_app_data.clone(),
        Root::ProgramFiles => dirs.program_files.clone(),
        Root::ProgramFilesX86 => dirs.program_files_x86.clone(),
    }
}

/// Returns the ordered installation candidates for an operating system.
///
/// Candidates rooted in a directory that `dirs` does not know are left out;
/// the relative order of the remaining ones is preserved.
pub fn candidate_paths(os: OsKind, dirs: &KnownDirs) -> Vec<PathBuf> {
    table(os)
        .iter()
        .filter_map(|candidate| {
            let mut path = resolve_root(candidate.root, dirs)?;
            path.extend(candidate.segments);
            Some(path)
        })
        .collect()
}

/// Finds the Antigravity executable on the real filesystem.
///
/// Returns `None` when the editor is simply not installed; whether that is a
/// problem is left to the caller.
pub fn find_installed_path(os: OsKind, dirs: &KnownDirs) -> Option<PathBuf> {
    find_installed_path_with(os, dirs, &RealFs)
}

/// Finds the first existing candidate according to `probe`.
pub fn find_installed_path_with<F: FileProbe + ?Sized>(
    os: OsKind,
    dirs: &KnownDirs,
    probe: &F,
) -> Option<PathBuf> {
    let found = candidate_paths(os, dirs).into_iter().find(|candidate| {
        let exists = probe.is_file(candidate);
        debug!(candidate = %candidate.display(), exists, "Checked installation candidate");
        exists
    });

    match &found {
        Some(path) => info!(path = %path.display(), "Found Antigravity installation"),
        None => warn!(
            %os,
            "Could not auto-detect Antigravity installation. Set the path manually with `gravity set-path <PATH>`."
        ),
    }

    found
}

/// Checks a user-supplied executable path.
///
/// Missing or empty paths are invalid; anything else is valid exactly when a
/// file exists there. The file itself is not inspected.
pub fn is_valid_path(path: Option<&Path>) -> bool {
    is_valid_path_with(path, &RealFs)
}

/// [`is_valid_path`] against an explicit probe.
pub fn is_valid_path_with<F: FileProbe + ?Sized>(path: Option<&Path>, probe: &F) -> bool {
    match path {
        Some(path) if !path.as_os_str().is_empty() => probe.is_file(path),
        _ => false,
    }
}

/// Heuristic: does the file name (not the directories) mention Antigravity?
///
/// Both `/` and `\` count as separators so Windows-style paths are judged the
/// same on every host.
pub fn looks_like_expected_editor(path: &Path) -> bool {
    let text = path.to_string_lossy();
    let file_name = text.rsplit(['/', '\\']).next().unwrap_or("");
    file_name.to_lowercase().contains(EDITOR_NAME_LOWER)
}
