//! Host-facing integration of the Antigravity editor.
//!
//! [`AntigravityEditor`] ties discovery, the preference store and the
//! launcher together. It owns the single cached editor path: set on
//! successful discovery or an explicit override, read on every open request,
//! and never expired. Everything it needs is passed in at construction.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::PreferenceStore;
use crate::constants::{EDITOR_NAME, EDITOR_PATH_KEY, NOT_CONFIGURED_NAME};
use crate::discovery::{find_installed_path_with, looks_like_expected_editor, FileProbe, RealFs};
use crate::error::{EditorError, Result};
use crate::launch::{build_arguments, spawn_detached, OpenRequest};
use crate::platform::{KnownDirs, OsKind};

/// An editor installation as presented to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub name: String,
    /// Executable path; empty for the not-configured placeholder
    pub path: PathBuf,
}

impl Installation {
    fn found(path: PathBuf) -> Self {
        Installation {
            name: EDITOR_NAME.to_string(),
            path,
        }
    }

    fn not_configured() -> Self {
        Installation {
            name: NOT_CONFIGURED_NAME.to_string(),
            path: PathBuf::new(),
        }
    }

    /// Whether this entry points at an executable
    pub fn is_configured(&self) -> bool {
        !self.path.as_os_str().is_empty()
    }
}

/// Hook that regenerates the host's project files.
pub trait ProjectSync {
    fn sync_all(&self, project_root: &Path);
}

/// Used when the host has no project-file generation of its own
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSync;

impl ProjectSync for NoopSync {
    fn sync_all(&self, project_root: &Path) {
        debug!(project = %project_root.display(), "No project sync hook configured");
    }
}

/// The Antigravity editor as seen by a host application.
pub struct AntigravityEditor<S, P = NoopSync> {
    store: S,
    sync: P,
    os: Option<OsKind>,
    dirs: KnownDirs,
    project_root: PathBuf,
    probe: Box<dyn FileProbe>,
    cached_path: Option<PathBuf>,
}

impl<S: PreferenceStore, P: ProjectSync> AntigravityEditor<S, P> {
    /// Creates the integration.
    ///
    /// `os` selects the discovery table; `None` disables auto-detection.
    pub fn new(
        store: S,
        sync: P,
        os: Option<OsKind>,
        dirs: KnownDirs,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        AntigravityEditor {
            store,
            sync,
            os,
            dirs,
            project_root: project_root.into(),
            probe: Box::new(RealFs),
            cached_path: None,
        }
    }

    /// Replaces the filesystem probe used for discovery and path checks
    pub fn with_probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Selects an installation without persisting it.
    ///
    /// An empty path clears the cache so the stored preference is used.
    pub fn initialize(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.cached_path = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
    }

    /// Current editor path: the cache, falling back to the preference store
    pub fn editor_path(&mut self) -> Option<PathBuf> {
        if self.cached_path.is_none() {
            self.cached_path = self
                .store
                .get_string(EDITOR_PATH_KEY)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from);
        }
        self.cached_path.clone()
    }

    /// Records `path` as the editor in both the cache and the store
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Preferences`] if the store cannot be written;
    /// the cache is updated regardless.
    pub fn set_editor_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.cached_path = Some(path.clone());
        self.store
            .set_string(EDITOR_PATH_KEY, &path.to_string_lossy())?;
        info!(path = %path.display(), "Editor path set");
        Ok(())
    }

    /// Runs auto-detection for the configured operating system
    pub fn discover(&self) -> Option<PathBuf> {
        match self.os {
            Some(os) => find_installed_path_with(os, &self.dirs, self.probe.as_ref()),
            None => {
                warn!("Auto-detection is not supported on this operating system");
                None
            }
        }
    }

    /// Re-detects the installation and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotConfigured`] if nothing was found. The
    /// previous path is kept in that case.
    pub fn reset_path(&mut self) -> Result<PathBuf> {
        let path = self.discover().ok_or(EditorError::NotConfigured)?;
        self.set_editor_path(&path)?;
        Ok(path)
    }

    /// Installations to list in the host's editor picker.
    ///
    /// Detects and stores a path first when none is known. Always returns one
    /// entry: the usable installation, or a placeholder so the editor can
    /// still be picked and configured.
    pub fn installations(&mut self) -> Vec<Installation> {
        let mut path = self.editor_path();

        if path.is_none() {
            if let Some(found) = self.discover() {
                if let Err(e) = self.set_editor_path(&found) {
                    warn!("Could not save detected editor path: {}", e);
                }
                path = Some(found);
            }
        }

        match path {
            Some(path) if self.probe.is_file(&path) => vec![Installation::found(path)],
            _ => vec![Installation::not_configured()],
        }
    }

    /// Claims `path` for this editor if its file name looks like Antigravity
    pub fn try_get_installation_for_path(&self, path: &Path) -> Option<Installation> {
        if looks_like_expected_editor(path) {
            Some(Installation::found(path.to_path_buf()))
        } else {
            None
        }
    }

    /// Host "open file" entry point.
    ///
    /// Returns whether the editor was started; failures are logged. An empty
    /// or absent `file` opens the project folder. `line` and `column` are
    /// 1-based, with `0` meaning unset.
    pub fn open_project(&mut self, file: Option<&Path>, line: u32, column: u32) -> bool {
        match self.open_file(file, line, column) {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    /// Like [`open_project`](Self::open_project) but returns the failure.
    ///
    /// # Errors
    ///
    /// [`EditorError::NotConfigured`], [`EditorError::PathInvalid`] or
    /// [`EditorError::SpawnFailed`].
    pub fn open_file(&mut self, file: Option<&Path>, line: u32, column: u32) -> Result<()> {
        let executable = self.resolved_executable()?;

        let request = match file.filter(|file| !file.as_os_str().is_empty()) {
            Some(file) if line > 0 => {
                OpenRequest::file_at(file, line, Some(column), &self.project_root)
            }
            Some(file) => OpenRequest::file(file, &self.project_root),
            None => OpenRequest::project(&self.project_root),
        };

        self.spawn(&executable, &request)
    }

    /// Opens a file or folder picked from the host's UI
    ///
    /// # Errors
    ///
    /// Same as [`open_file`](Self::open_file).
    pub fn open_path(&mut self, path: &Path, is_folder: bool) -> Result<()> {
        let executable = self.resolved_executable()?;

        let request = if is_folder {
            OpenRequest::folder(path, &self.project_root)
        } else {
            OpenRequest::file(path, &self.project_root)
        };

        self.spawn(&executable, &request)
    }

    /// Opens the project root folder
    pub fn open_project_folder(&mut self) -> Result<()> {
        let project_root = self.project_root.clone();
        self.open_path(&project_root, true)
    }

    /// Regenerates project files through the host hook
    pub fn sync_all(&self) {
        self.sync.sync_all(&self.project_root);
        info!("Project files synchronized");
    }

    /// Reacts to changed files; always a full sync
    pub fn sync_if_needed(&self, changed: &[PathBuf]) {
        debug!(changed = changed.len(), "Project files changed");
        self.sync_all();
    }

    fn resolved_executable(&mut self) -> Result<PathBuf> {
        let path = self.editor_path().ok_or(EditorError::NotConfigured)?;
        if !self.probe.is_file(&path) {
            return Err(EditorError::PathInvalid(path));
        }
        Ok(path)
    }

    fn spawn(&self, executable: &Path, request: &OpenRequest) -> Result<()> {
        let arguments = build_arguments(request);
        spawn_detached(executable, &arguments)?;
        Ok(())
    }
}
