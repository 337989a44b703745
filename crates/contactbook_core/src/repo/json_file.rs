//! JSON file read/write helpers.
//!
//! # Responsibility
//! - Read optional JSON documents and write them back atomically.
//!
//! # Invariants
//! - A missing file reads as `Ok(None)`; unreadable or malformed files are errors.
//! - Writes go to a sibling temp file first and are renamed into place, so a
//!   crash never leaves a half-written document behind.

use crate::repo::{RepoError, RepoResult};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reads and deserializes `path`, returning `None` when it does not exist.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> RepoResult<Option<T>> {
    let started_at = Instant::now();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=json_read module=repo status=missing path={}",
                path.display()
            );
            return Ok(None);
        }
        Err(err) => {
            error!(
                "event=json_read module=repo status=error error_code=io_failed path={} error={}",
                path.display(),
                err
            );
            return Err(RepoError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let value = serde_json::from_str(&text).map_err(|err| {
        error!(
            "event=json_read module=repo status=error error_code=malformed_json path={} line={} column={}",
            path.display(),
            err.line(),
            err.column()
        );
        RepoError::DataLoading {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    info!(
        "event=json_read module=repo status=ok path={} bytes={} duration_ms={}",
        path.display(),
        text.len(),
        started_at.elapsed().as_millis()
    );
    Ok(Some(value))
}

/// Serializes `value` as pretty JSON into `path`, creating parent directories.
pub fn save_json_file<T: Serialize>(value: &T, path: &Path) -> RepoResult<()> {
    let started_at = Instant::now();
    let io_error = |source: std::io::Error| RepoError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut text = serde_json::to_string_pretty(value).map_err(|err| RepoError::Serialize {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    text.push('\n');

    let temp_path = temp_sibling(path);
    fs::write(&temp_path, text.as_bytes()).map_err(io_error)?;
    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        error!(
            "event=json_write module=repo status=error error_code=rename_failed path={} error={}",
            path.display(),
            err
        );
        return Err(io_error(err));
    }

    info!(
        "event=json_write module=repo status=ok path={} bytes={} duration_ms={}",
        path.display(),
        text.len(),
        started_at.elapsed().as_millis()
    );
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::{read_json_file, save_json_file};
    use crate::repo::RepoError;
    use std::collections::BTreeMap;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<BTreeMap<String, u32>> =
            read_json_file(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_creates_parent_directories_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");
        let mut value = BTreeMap::new();
        value.insert("answer".to_string(), 42_u32);

        save_json_file(&value, &path).unwrap();
        let loaded: BTreeMap<String, u32> = read_json_file(&path).unwrap().unwrap();
        assert_eq!(loaded, value);
        assert!(!path.with_file_name("data.json.tmp").exists());
    }

    #[test]
    fn malformed_json_is_a_data_loading_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_json_file::<BTreeMap<String, u32>>(&path).unwrap_err();
        assert!(matches!(err, RepoError::DataLoading { .. }));
    }
}
