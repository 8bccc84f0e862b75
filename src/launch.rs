//! Building the editor command line and starting the editor process.
//!
//! Antigravity takes VS-Code-style arguments: `-r` reuses the last active
//! window and `-g path:line:column` jumps to a location. The command line is
//! assembled as a single string with every path double-quoted, then handed to
//! the OS the way a shell would see it.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, error, info, warn};

use crate::constants::{DEFAULT_COLUMN, GOTO_FLAG, REUSE_WINDOW_FLAG};
use crate::error::{EditorError, Result};

/// What to open in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// File or folder to open; `None` opens the project root
    pub target: Option<PathBuf>,
    /// 1-based line; `None` or `0` means no location
    pub line: Option<u32>,
    /// 1-based column, only used together with `line`
    pub column: Option<u32>,
    /// Root folder of the project the target belongs to
    pub project_root: PathBuf,
    /// Open `target` as a folder on its own, without the project root
    pub is_folder: bool,
}

impl OpenRequest {
    /// Open a file alongside its project
    pub fn file(target: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        OpenRequest {
            target: Some(target.into()),
            line: None,
            column: None,
            project_root: project_root.into(),
            is_folder: false,
        }
    }

    /// Open a file at a line and optional column
    pub fn file_at(
        target: impl Into<PathBuf>,
        line: u32,
        column: Option<u32>,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        OpenRequest {
            line: Some(line),
            column,
            ..OpenRequest::file(target, project_root)
        }
    }

    /// Open a folder by itself
    pub fn folder(folder: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        OpenRequest {
            is_folder: true,
            ..OpenRequest::file(folder, project_root)
        }
    }

    /// Open the project root folder
    pub fn project(project_root: impl Into<PathBuf>) -> Self {
        OpenRequest {
            target: None,
            line: None,
            column: None,
            project_root: project_root.into(),
            is_folder: true,
        }
    }
}

/// Wraps a path in double quotes so it stays one exact token.
///
/// Characters the shell treats specially inside double quotes (`\`, `"`,
/// `$` and `` ` ``) are backslash-escaped.
#[cfg(not(windows))]
pub fn quote_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Wraps a path in double quotes so it stays one exact token.
///
/// Follows the Windows command-line rules: a run of backslashes is doubled
/// when it precedes an embedded `"` or the closing quote, and `"` itself is
/// backslash-escaped.
#[cfg(windows)]
pub fn quote_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    let mut backslashes = 0;
    for c in text.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                backslashes = 0;
            }
            _ => {
                quoted.extend(std::iter::repeat('\\').take(backslashes));
                backslashes = 0;
            }
        }
        if c != '\\' {
            quoted.push(c);
        }
    }
    quoted.extend(std::iter::repeat('\\').take(backslashes * 2));
    quoted.push('"');
    quoted
}

/// Builds the argument string for an [`OpenRequest`].
///
/// - file with a line: `-r -g "<file>":<line>:<column> "<project>"`
/// - file without a line: `-r "<file>" "<project>"`
/// - folder, or no target: `-r "<folder>"`
pub fn build_arguments(request: &OpenRequest) -> String {
    match (&request.target, request.is_folder) {
        (Some(target), false) => {
            let project = quote_path(&request.project_root);
            match request.line.filter(|&line| line > 0) {
                Some(line) => {
                    let column = request
                        .column
                        .filter(|&column| column > 0)
                        .unwrap_or(DEFAULT_COLUMN);
                    format!(
                        "{} {} {}:{}:{} {}",
                        REUSE_WINDOW_FLAG,
                        GOTO_FLAG,
                        quote_path(target),
                        line,
                        column,
                        project
                    )
                }
                None => format!("{} {} {}", REUSE_WINDOW_FLAG, quote_path(target), project),
            }
        }
        (Some(folder), true) => format!("{} {}", REUSE_WINDOW_FLAG, quote_path(folder)),
        (None, _) => format!("{} {}", REUSE_WINDOW_FLAG, quote_path(&request.project_root)),
    }
}

/// Starts `executable` with `arguments` and returns its process id as soon as
/// it is spawned.
///
/// Standard streams are detached and the caller never waits; once spawned the
/// editor is independent of this process. The child is reaped on a background
/// thread so long-running hosts do not collect exited processes.
///
/// # Errors
///
/// Returns [`EditorError::SpawnFailed`] if the argument string cannot be
/// split or the operating system refuses to start the process.
pub fn spawn_detached(executable: &Path, arguments: &str) -> Result<u32> {
    let mut command = Command::new(executable);
    apply_arguments(&mut command, arguments)
        .map_err(|e| EditorError::spawn_failed(executable, e))?;

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // Keep Ctrl-C in the launching terminal away from the editor
    #[cfg(target_os = "linux")]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    debug!(executable = %executable.display(), arguments, "Starting editor");

    let mut child = command
        .spawn()
        .map_err(|e| EditorError::spawn_failed(executable, e))?;

    let pid = child.id();
    info!(pid, executable = %executable.display(), "Editor started");

    thread::spawn(move || match child.wait() {
        Ok(status) => debug!(pid, %status, "Editor process exited"),
        Err(e) => warn!(pid, "Could not reap editor process: {}", e),
    });

    Ok(pid)
}

/// Starts the editor, reporting any failure instead of returning it.
///
/// Returns `true` once the process has been spawned.
pub fn launch(executable: &Path, arguments: &str) -> bool {
    match spawn_detached(executable, arguments) {
        Ok(_) => true,
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

/// Windows receives the command line verbatim, as the shell would pass it.
#[cfg(windows)]
fn apply_arguments(command: &mut Command, arguments: &str) -> io::Result<()> {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;

    command.raw_arg(arguments).creation_flags(CREATE_NO_WINDOW);
    Ok(())
}

/// Elsewhere the command line is split with POSIX shell word rules.
#[cfg(not(windows))]
fn apply_arguments(command: &mut Command, arguments: &str) -> io::Result<()> {
    let args = shlex::split(arguments).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Malformed argument string: {}", arguments),
        )
    })?;
    command.args(args);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    #[test]
    fn test_goto_arguments() {
        let request = OpenRequest::file_at("/a/b c.cs", 10, Some(3), "/proj");
        let arguments = build_arguments(&request);

        assert_eq!(arguments, r#"-r -g "/a/b c.cs":10:3 "/proj""#);
        assert!(arguments.contains(r#""/a/b c.cs":10:3"#));
        assert!(arguments.ends_with(r#" "/proj""#));
        assert_eq!(arguments.matches("-r").count(), 1);
    }

    #[test]
    fn test_column_defaults_to_start_of_line() {
        let without_column = OpenRequest::file_at("/a/Player.cs", 42, None, "/proj");
        assert_eq!(
            build_arguments(&without_column),
            r#"-r -g "/a/Player.cs":42:1 "/proj""#
        );

        let zero_column = OpenRequest::file_at("/a/Player.cs", 42, Some(0), "/proj");
        assert_eq!(build_arguments(&zero_column), build_arguments(&without_column));
    }

    #[test]
    fn test_file_without_line_has_no_location() {
        let request = OpenRequest::file("/a/b c.cs", "/proj");
        let arguments = build_arguments(&request);

        assert_eq!(arguments, r#"-r "/a/b c.cs" "/proj""#);
        assert!(!arguments.contains("-g"));
        assert!(!arguments.contains(":10"));
    }

    #[test]
    fn test_line_zero_is_no_line() {
        let request = OpenRequest::file_at("/a/b.cs", 0, Some(5), "/proj");
        assert_eq!(build_arguments(&request), r#"-r "/a/b.cs" "/proj""#);
    }

    #[test]
    fn test_folder_omits_project_root() {
        let request = OpenRequest::folder("/proj/Assets", "/proj");
        assert_eq!(build_arguments(&request), r#"-r "/proj/Assets""#);

        let request = OpenRequest::project("/my proj");
        assert_eq!(build_arguments(&request), r#"-r "/my proj""#);
    }

    #[test]
    fn test_folder_ignores_line() {
        let mut request = OpenRequest::folder("/proj/Assets", "/proj");
        request.line = Some(12);
        assert_eq!(build_arguments(&request), r#"-r "/proj/Assets""#);
    }

    #[test]
    fn test_paths_are_always_quoted() {
        assert_eq!(quote_path(Path::new("/plain")), r#""/plain""#);
        assert_eq!(quote_path(Path::new("/with space")), r#""/with space""#);
        assert_eq!(quote_path(Path::new(r#"/odd"name"#)), r#""/odd\"name""#);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_arguments_split_like_a_shell() {
        let request = OpenRequest::file_at("/a/b c.cs", 10, Some(3), "/my proj");
        let split = shlex::split(&build_arguments(&request)).unwrap();
        assert_eq!(split, vec!["-r", "-g", "/a/b c.cs:10:3", "/my proj"]);

        let request = OpenRequest::file(r#"/odd"name.cs"#, "/proj");
        let split = shlex::split(&build_arguments(&request)).unwrap();
        assert_eq!(split, vec!["-r", r#"/odd"name.cs"#, "/proj"]);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_shell_sensitive_paths_survive_splitting() {
        for path in [
            r"/tmp/a\\b.cs",
            r"/tmp/x\$HOME.cs",
            "/tmp/$HOME/`id`.cs",
            r#"/tmp/quote\"mix.cs"#,
        ] {
            let request = OpenRequest::file(path, "/proj");
            let split = shlex::split(&build_arguments(&request)).unwrap();
            assert_eq!(split, vec!["-r", path, "/proj"], "path {} changed", path);
        }

        let request = OpenRequest::file_at(r"/tmp/dir\\name.cs", 7, Some(2), "/my proj");
        let split = shlex::split(&build_arguments(&request)).unwrap();
        assert_eq!(split, vec!["-r", "-g", r"/tmp/dir\\name.cs:7:2", "/my proj"]);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_trailing_backslash_folder_stays_one_token() {
        let request = OpenRequest::folder(r"/tmp/trailing\", "/proj");
        let arguments = build_arguments(&request);
        assert_eq!(arguments, r#"-r "/tmp/trailing\\""#);
        assert_eq!(
            shlex::split(&arguments).unwrap(),
            vec!["-r", r"/tmp/trailing\"]
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_quoting_protects_closing_quote() {
        assert_eq!(quote_path(Path::new(r"C:\")), r#""C:\\""#);
        assert_eq!(
            quote_path(Path::new(r"C:\Program Files\Antigravity")),
            r#""C:\Program Files\Antigravity""#
        );
        assert_eq!(quote_path(Path::new(r#"C:\odd\"name"#)), r#""C:\odd\\\"name""#);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_exited_editor_is_reaped() {
        let pid = spawn_detached(Path::new("/bin/sh"), r#"-c "exit 0""#).unwrap();
        let proc_entry = PathBuf::from(format!("/proc/{}", pid));

        let deadline = Instant::now() + Duration::from_secs(10);
        while proc_entry.exists() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(20));
        }
        assert!(!proc_entry.exists(), "process {} was not reaped", pid);
    }

    #[test]
    fn test_launch_missing_executable_returns_false() {
        crate::logging::init_test();
        let dir = tempdir().unwrap();
        let missing = dir.path().join("antigravity");

        assert!(!launch(&missing, r#"-r "/proj""#));

        let err = spawn_detached(&missing, r#"-r "/proj""#).unwrap_err();
        match err {
            EditorError::SpawnFailed { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_malformed_arguments_are_spawn_failures() {
        let err = spawn_detached(Path::new("/bin/sh"), r#"-r "/unterminated"#).unwrap_err();
        match err {
            EditorError::SpawnFailed { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidInput)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_passes_each_path_as_one_argument() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("args.txt");
        let staging = dir.path().join("args.txt.partial");
        let script = dir.path().join("record.sh");
        fs::write(
            &script,
            format!(
                "printf '%s\\n' \"$@\" > '{}' && mv '{}' '{}'\n",
                staging.display(),
                staging.display(),
                output.display()
            ),
        )
        .unwrap();

        let request = OpenRequest::file_at("/a/b c.cs", 10, Some(3), "/my proj");
        let arguments = format!("{} {}", quote_path(&script), build_arguments(&request));
        assert!(launch(Path::new("/bin/sh"), &arguments));

        let deadline = Instant::now() + Duration::from_secs(10);
        while !output.exists() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(20));
        }

        let recorded = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = recorded.lines().collect();
        assert_eq!(lines, vec!["-r", "-g", "/a/b c.cs:10:3", "/my proj"]);
    }
}
