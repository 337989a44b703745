//! Persistence layer: JSON documents for books and preferences.
//!
//! # Responsibility
//! - Define storage contracts used by the service layer.
//! - Keep JSON wire shapes and file handling out of the domain model.
//!
//! # Invariants
//! - Reads validate every record through the domain constructors; invalid
//!   persisted state is reported, never silently repaired.
//! - Repository APIs distinguish "no data yet" (`Ok(None)`) from bad data.

pub mod book_repo;
pub mod json_adapted;
pub mod json_file;
pub mod storage;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub use book_repo::{
    AddressBookStorage, EventBookStorage, JsonAddressBookStorage, JsonEventBookStorage,
    JsonUserPrefsStorage, UserPrefsStorage,
};
pub use storage::{Storage, StorageManager};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure.
#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File exists but holds malformed JSON or illegal values.
    DataLoading { path: PathBuf, message: String },
    Serialize { path: PathBuf, message: String },
}

impl RepoError {
    /// Stable metadata-only code for logs; messages may quote file content.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::DataLoading { .. } => "data_loading",
            Self::Serialize { .. } => "serialize",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::DataLoading { path, .. }
            | Self::Serialize { path, .. } => path,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            Self::DataLoading { path, message } => {
                write!(f, "invalid data in `{}`: {message}", path.display())
            }
            Self::Serialize { path, message } => {
                write!(f, "failed to serialize `{}`: {message}", path.display())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::DataLoading { .. } | Self::Serialize { .. } => None,
        }
    }
}
