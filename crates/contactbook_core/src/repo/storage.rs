//! Composite storage used by the service layer.

use crate::config::UserPrefs;
use crate::model::book::{AddressBook, EventBook};
use crate::repo::book_repo::{
    AddressBookStorage, EventBookStorage, JsonAddressBookStorage, JsonEventBookStorage,
    JsonUserPrefsStorage, UserPrefsStorage,
};
use crate::repo::RepoResult;
use std::path::{Path, PathBuf};

/// Everything the logic layer persists.
pub trait Storage: AddressBookStorage + EventBookStorage + UserPrefsStorage {}

impl<T: AddressBookStorage + EventBookStorage + UserPrefsStorage> Storage for T {}

/// JSON-backed storage for both books and the preferences file.
#[derive(Debug, Clone)]
pub struct StorageManager {
    address_book: JsonAddressBookStorage,
    event_book: JsonEventBookStorage,
    user_prefs: JsonUserPrefsStorage,
}

impl StorageManager {
    pub fn new(
        address_book: JsonAddressBookStorage,
        event_book: JsonEventBookStorage,
        user_prefs: JsonUserPrefsStorage,
    ) -> Self {
        Self {
            address_book,
            event_book,
            user_prefs,
        }
    }

    /// Builds storage at the paths named by `prefs`.
    pub fn from_prefs(prefs: &UserPrefs, prefs_path: impl Into<PathBuf>) -> Self {
        Self::new(
            JsonAddressBookStorage::new(prefs.address_book_file_path.clone()),
            JsonEventBookStorage::new(prefs.event_book_file_path.clone()),
            JsonUserPrefsStorage::new(prefs_path),
        )
    }
}

impl AddressBookStorage for StorageManager {
    fn address_book_path(&self) -> &Path {
        self.address_book.address_book_path()
    }

    fn read_address_book(&self) -> RepoResult<Option<AddressBook>> {
        self.address_book.read_address_book()
    }

    fn save_address_book(&self, book: &AddressBook) -> RepoResult<()> {
        self.address_book.save_address_book(book)
    }
}

impl EventBookStorage for StorageManager {
    fn event_book_path(&self) -> &Path {
        self.event_book.event_book_path()
    }

    fn read_event_book(&self) -> RepoResult<Option<EventBook>> {
        self.event_book.read_event_book()
    }

    fn save_event_book(&self, book: &EventBook) -> RepoResult<()> {
        self.event_book.save_event_book(book)
    }
}

impl UserPrefsStorage for StorageManager {
    fn user_prefs_path(&self) -> &Path {
        self.user_prefs.user_prefs_path()
    }

    fn read_user_prefs(&self) -> RepoResult<Option<UserPrefs>> {
        self.user_prefs.read_user_prefs()
    }

    fn save_user_prefs(&self, prefs: &UserPrefs) -> RepoResult<()> {
        self.user_prefs.save_user_prefs(prefs)
    }
}
