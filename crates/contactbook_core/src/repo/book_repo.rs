//! Storage contracts and JSON file implementations.
//!
//! # Responsibility
//! - Read/save the address book, event book and user preferences.
//!
//! # Invariants
//! - Reads return `Ok(None)` only when the file does not exist.
//! - Illegal persisted values surface as `RepoError::DataLoading`.

use crate::config::UserPrefs;
use crate::model::book::{AddressBook, EventBook};
use crate::repo::json_adapted::{JsonSerializableAddressBook, JsonSerializableEventBook};
use crate::repo::json_file::{read_json_file, save_json_file};
use crate::repo::{RepoError, RepoResult};
use log::error;
use std::path::{Path, PathBuf};

pub trait AddressBookStorage {
    fn address_book_path(&self) -> &Path;
    fn read_address_book(&self) -> RepoResult<Option<AddressBook>>;
    fn save_address_book(&self, book: &AddressBook) -> RepoResult<()>;
}

pub trait EventBookStorage {
    fn event_book_path(&self) -> &Path;
    fn read_event_book(&self) -> RepoResult<Option<EventBook>>;
    fn save_event_book(&self, book: &EventBook) -> RepoResult<()>;
}

pub trait UserPrefsStorage {
    fn user_prefs_path(&self) -> &Path;
    fn read_user_prefs(&self) -> RepoResult<Option<UserPrefs>>;
    fn save_user_prefs(&self, prefs: &UserPrefs) -> RepoResult<()>;
}

/// Address book persisted as `{"persons": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    fn address_book_path(&self) -> &Path {
        &self.path
    }

    fn read_address_book(&self) -> RepoResult<Option<AddressBook>> {
        let Some(document) = read_json_file::<JsonSerializableAddressBook>(&self.path)? else {
            return Ok(None);
        };
        let book = document.to_model().map_err(|err| {
            error!(
                "event=address_book_read module=repo status=error error_code=illegal_value path={}",
                self.path.display()
            );
            RepoError::DataLoading {
                path: self.path.clone(),
                message: err.to_string(),
            }
        })?;
        Ok(Some(book))
    }

    fn save_address_book(&self, book: &AddressBook) -> RepoResult<()> {
        save_json_file(&JsonSerializableAddressBook::from(book), &self.path)
    }
}

/// Event book persisted as `{"events": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonEventBookStorage {
    path: PathBuf,
}

impl JsonEventBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventBookStorage for JsonEventBookStorage {
    fn event_book_path(&self) -> &Path {
        &self.path
    }

    fn read_event_book(&self) -> RepoResult<Option<EventBook>> {
        let Some(document) = read_json_file::<JsonSerializableEventBook>(&self.path)? else {
            return Ok(None);
        };
        let book = document.to_model().map_err(|err| {
            error!(
                "event=event_book_read module=repo status=error error_code=illegal_value path={}",
                self.path.display()
            );
            RepoError::DataLoading {
                path: self.path.clone(),
                message: err.to_string(),
            }
        })?;
        Ok(Some(book))
    }

    fn save_event_book(&self, book: &EventBook) -> RepoResult<()> {
        save_json_file(&JsonSerializableEventBook::from(book), &self.path)
    }
}

#[derive(Debug, Clone)]
pub struct JsonUserPrefsStorage {
    path: PathBuf,
}

impl JsonUserPrefsStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserPrefsStorage for JsonUserPrefsStorage {
    fn user_prefs_path(&self) -> &Path {
        &self.path
    }

    fn read_user_prefs(&self) -> RepoResult<Option<UserPrefs>> {
        read_json_file(&self.path)
    }

    fn save_user_prefs(&self, prefs: &UserPrefs) -> RepoResult<()> {
        save_json_file(prefs, &self.path)
    }
}
