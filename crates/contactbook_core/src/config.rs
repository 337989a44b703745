//! Application configuration and user preferences.
//!
//! # Responsibility
//! - Define `config.json` (`Config`) and `preferences.json` (`UserPrefs`).
//! - Load them with defaults for missing or malformed files.
//!
//! # Invariants
//! - Loading never fails the application; problems downgrade to defaults and
//!   a warning log.
//! - Relative paths inside the documents are resolved against the data
//!   directory by the caller, not here.

use crate::repo::json_file::{read_json_file, save_json_file};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_PREFS_FILE: &str = "preferences.json";
pub const DEFAULT_ADDRESS_BOOK_FILE: &str = "data/addressbook.json";
pub const DEFAULT_EVENT_BOOK_FILE: &str = "data/eventbook.json";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Process-level settings from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// One of `trace|debug|info|warn|error`; empty means build default.
    pub log_level: String,
    pub user_prefs_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: String::new(),
            user_prefs_file_path: PathBuf::from(DEFAULT_PREFS_FILE),
        }
    }
}

/// User-editable preferences from `preferences.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    pub address_book_file_path: PathBuf,
    pub event_book_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE),
            event_book_file_path: PathBuf::from(DEFAULT_EVENT_BOOK_FILE),
        }
    }
}

impl UserPrefs {
    /// Returns a copy with relative paths joined onto `base`.
    pub fn resolved_against(&self, base: &Path) -> Self {
        Self {
            address_book_file_path: resolve(base, &self.address_book_file_path),
            event_book_file_path: resolve(base, &self.event_book_file_path),
        }
    }
}

/// Joins `path` onto `base` unless it is already absolute.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Loads `config.json`, writing defaults back when it is missing.
///
/// A malformed file is left untouched and defaults are used for this run.
pub fn load_config(path: &Path) -> Config {
    load_or_default(path, "config")
}

/// Loads `preferences.json` with the same policy as [`load_config`].
pub fn load_user_prefs(path: &Path) -> UserPrefs {
    load_or_default(path, "user_prefs")
}

fn load_or_default<T>(path: &Path, kind: &str) -> T
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    match read_json_file::<T>(path) {
        Ok(Some(value)) => value,
        Ok(None) => {
            let value = T::default();
            if let Err(err) = save_json_file(&value, path) {
                warn!(
                    "event=config_write module=config status=error kind={} error_code={}",
                    kind,
                    err.code()
                );
            }
            value
        }
        Err(err) => {
            warn!(
                "event=config_load module=config status=fallback kind={} error_code={}",
                kind,
                err.code()
            );
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let config = load_config(&path);
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn malformed_prefs_fall_back_without_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PREFS_FILE);
        std::fs::write(&path, "[1, 2").unwrap();
        assert_eq!(load_user_prefs(&path), UserPrefs::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2");
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let value = serde_json::json!({ "logLevel": "debug" });
        let config: Config = serde_json::from_value(value).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.user_prefs_file_path, PathBuf::from(DEFAULT_PREFS_FILE));
    }

    #[test]
    fn prefs_resolve_relative_paths_only() {
        let prefs = UserPrefs {
            address_book_file_path: PathBuf::from("data/a.json"),
            event_book_file_path: PathBuf::from("/abs/e.json"),
        };
        let resolved = prefs.resolved_against(Path::new("/home/me"));
        assert_eq!(resolved.address_book_file_path, PathBuf::from("/home/me/data/a.json"));
        assert_eq!(resolved.event_book_file_path, PathBuf::from("/abs/e.json"));
    }
}
