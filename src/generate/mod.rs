//! Writes editor configuration files into a project.
//!
//! Each file has fixed contents and is always overwritten in full; existing
//! content is never merged.

mod templates;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// OmniSharp settings file name
pub const OMNISHARP_FILENAME: &str = ".omnisharp.json";

/// EditorConfig file name
pub const EDITORCONFIG_FILENAME: &str = ".editorconfig";

/// Workspace settings directory
pub const VSCODE_DIR: &str = ".vscode";

/// Workspace settings file name inside [`VSCODE_DIR`]
pub const VSCODE_SETTINGS_FILENAME: &str = "settings.json";

/// Writes `.omnisharp.json` for C# IntelliSense.
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn generate_omnisharp_config<P: AsRef<Path>>(project_root: P) -> io::Result<PathBuf> {
    let path = project_root.as_ref().join(OMNISHARP_FILENAME);
    write_generated(&path, templates::OMNISHARP_JSON)?;
    Ok(path)
}

/// Writes `.editorconfig` with Unity C# conventions.
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn generate_editor_config<P: AsRef<Path>>(project_root: P) -> io::Result<PathBuf> {
    let path = project_root.as_ref().join(EDITORCONFIG_FILENAME);
    write_generated(&path, templates::EDITORCONFIG)?;
    Ok(path)
}

/// Writes `.vscode/settings.json`, creating `.vscode` if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn generate_vscode_settings<P: AsRef<Path>>(project_root: P) -> io::Result<PathBuf> {
    let vscode_dir = project_root.as_ref().join(VSCODE_DIR);
    fs::create_dir_all(&vscode_dir)?;

    let path = vscode_dir.join(VSCODE_SETTINGS_FILENAME);
    write_generated(&path, templates::VSCODE_SETTINGS_JSON)?;
    Ok(path)
}

/// Writes all configuration files and returns their paths in write order.
///
/// # Errors
///
/// Stops at the first file that cannot be written
pub fn generate_all<P: AsRef<Path>>(project_root: P) -> io::Result<Vec<PathBuf>> {
    let project_root = project_root.as_ref();
    let written = vec![
        generate_omnisharp_config(project_root)?,
        generate_editor_config(project_root)?,
        generate_vscode_settings(project_root)?,
    ];
    info!(count = written.len(), "All configuration files generated");
    Ok(written)
}

fn write_generated(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)?;
    info!(path = %path.display(), "Generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_all_writes_three_files() {
        let dir = tempdir().unwrap();
        let written = generate_all(dir.path()).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join(".omnisharp.json"),
                dir.path().join(".editorconfig"),
                dir.path().join(".vscode").join("settings.json"),
            ]
        );
        for path in &written {
            assert!(path.is_file(), "{} missing", path.display());
        }
    }

    #[test]
    fn test_omnisharp_config_is_valid_json() {
        let dir = tempdir().unwrap();
        let path = generate_omnisharp_config(dir.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(
            value["FormattingOptions"]["enableEditorConfigSupport"],
            serde_json::Value::Bool(true)
        );
        assert_eq!(
            value["FileOptions"]["excludeSearchPatterns"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
    }

    #[test]
    fn test_editor_config_contents() {
        let dir = tempdir().unwrap();
        let path = generate_editor_config(dir.path()).unwrap();
        let content = fs::read_to_string(path).unwrap();

        assert!(content.starts_with("# Unity C# EditorConfig\n"));
        assert!(content.contains("root = true"));
        assert!(content.contains("[*.cs]"));
        assert!(content.contains("dotnet_naming_style.underscore_prefix.required_prefix = _"));
        assert!(content.ends_with("indent_size = 2\n"));
    }

    #[test]
    fn test_vscode_settings_creates_directory() {
        let dir = tempdir().unwrap();
        assert!(!dir.path().join(".vscode").exists());

        let path = generate_vscode_settings(dir.path()).unwrap();
        let content = fs::read_to_string(path).unwrap();

        assert!(content.contains(r#""**/*.meta": false"#));
        assert!(content.contains(r#""editor.rulers": [120]"#));
        assert!(content.contains(r#""[meta]""#));
    }

    #[test]
    fn test_existing_files_are_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".editorconfig");
        fs::write(&path, "root = false\n[*]\nindent_size = 8\n").unwrap();

        generate_editor_config(dir.path()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("indent_size = 8"));
        assert!(!content.contains("root = false"));

        // Regenerating is stable
        generate_editor_config(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_missing_project_root_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = generate_omnisharp_config(&missing).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
