//! Persistent preferences for the editor integration.
//!
//! Preferences are a flat string map stored as JSON in the platform
//! configuration directory. The editor path lives under a single fixed key
//! and is read back whenever the in-memory cache is empty.

pub mod io;
pub mod path;
pub mod store;
pub mod structure;

pub use io::{load_preferences_from_file, modify_preferences_file, save_preferences_to_file};
pub use path::{get_preferences_file_path, CONFIG_DIR_ENV};
pub use store::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use structure::Preferences;

#[cfg(test)]
mod tests {
    use super::{
        load_preferences_from_file, modify_preferences_file, save_preferences_to_file,
        JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences,
    };
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_preferences_set_get_remove() {
        let mut preferences = Preferences::new();
        assert!(preferences.is_empty());

        assert!(preferences.set("Antigravity_EditorPath", "/usr/bin/antigravity"));
        assert_eq!(
            preferences.get("Antigravity_EditorPath"),
            Some("/usr/bin/antigravity")
        );
        assert_eq!(preferences.len(), 1);

        // Same value again is not a change
        assert!(!preferences.set("Antigravity_EditorPath", "/usr/bin/antigravity"));

        assert!(preferences.remove("Antigravity_EditorPath"));
        assert!(!preferences.remove("Antigravity_EditorPath"));
        assert!(preferences.get("Antigravity_EditorPath").is_none());
    }

    #[test]
    fn test_preferences_serialize_as_flat_map() {
        let mut preferences = Preferences::new();
        preferences.set("Antigravity_EditorPath", "/opt/antigravity/antigravity");

        let json = serde_json::to_string(&preferences).unwrap();
        assert_eq!(
            json,
            r#"{"Antigravity_EditorPath":"/opt/antigravity/antigravity"}"#
        );

        let parsed: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, preferences);
    }

    #[test]
    fn test_save_and_load_preferences() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("preferences.json");

        let mut preferences = Preferences::new();
        preferences.set("a", "1");
        preferences.set("b", "two words");
        save_preferences_to_file(&preferences, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_preferences_from_file(&path).unwrap();
        assert_eq!(loaded, preferences);
    }

    #[test]
    fn test_load_missing_or_blank_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("preferences.json");

        assert!(load_preferences_from_file(&path).unwrap().is_empty());

        fs::write(&path, "  \n\t").unwrap();
        assert!(load_preferences_from_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("preferences.json");
        fs::write(&path, "this is not json").unwrap();

        let result = load_preferences_from_file(&path);
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::InvalidData);
            assert!(e.to_string().contains("preferences.json"));
        }
    }

    #[test]
    fn test_modify_only_writes_on_change() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("preferences.json");

        let changed = modify_preferences_file(&path, |_| false).unwrap();
        assert!(!changed);
        assert!(!path.exists());

        let changed = modify_preferences_file(&path, |p| p.set("key", "value")).unwrap();
        assert!(changed);
        assert_eq!(
            load_preferences_from_file(&path).unwrap().get("key"),
            Some("value")
        );
    }

    #[test]
    fn test_save_permission_denied() {
        let temp_dir = tempdir().unwrap();
        let readonly_dir = temp_dir.path().join("readonly");
        fs::create_dir(&readonly_dir).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o555)).unwrap();
        }
        #[cfg(not(unix))]
        {
            let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
            perms.set_readonly(true);
            fs::set_permissions(&readonly_dir, perms).unwrap();
        }

        let path = readonly_dir.join("preferences.json");
        let result = save_preferences_to_file(&Preferences::new(), &path);

        // Root ignores directory permissions, so only check the failure kind
        if let Err(e) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied);
        }
    }

    #[test]
    fn test_json_store_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("preferences.json");
        let mut store = JsonPreferenceStore::at(&path);

        assert!(store.get_string("Antigravity_EditorPath").is_none());

        store
            .set_string("Antigravity_EditorPath", "/usr/local/bin/antigravity")
            .unwrap();

        // A fresh store sees the persisted value
        let reopened = JsonPreferenceStore::at(&path);
        assert_eq!(
            reopened.get_string("Antigravity_EditorPath").as_deref(),
            Some("/usr/local/bin/antigravity")
        );

        assert!(store.remove("Antigravity_EditorPath").unwrap());
        assert!(!store.remove("Antigravity_EditorPath").unwrap());
        assert!(reopened.get_string("Antigravity_EditorPath").is_none());
    }

    #[test]
    fn test_json_store_tolerates_corrupt_file_on_read() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("preferences.json");
        fs::write(&path, "{ broken").unwrap();

        let mut store = JsonPreferenceStore::at(&path);
        assert!(store.get_string("anything").is_none());
        assert!(store.set_string("anything", "value").is_err());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferenceStore::new();
        store.set_string("k", "v").unwrap();
        assert_eq!(store.get_string("k").as_deref(), Some("v"));
        assert_eq!(store.preferences().len(), 1);
        assert!(store.remove("k").unwrap());
        assert!(store.preferences().is_empty());
    }

    #[test]
    fn test_config_dir_override() {
        let temp_dir = tempdir().unwrap();
        let original = std::env::var_os(super::CONFIG_DIR_ENV);
        std::env::set_var(super::CONFIG_DIR_ENV, temp_dir.path());

        let path = super::get_preferences_file_path().unwrap();
        assert_eq!(path, temp_dir.path().join("preferences.json"));

        match original {
            Some(value) => std::env::set_var(super::CONFIG_DIR_ENV, value),
            None => std::env::remove_var(super::CONFIG_DIR_ENV),
        }
    }
}
