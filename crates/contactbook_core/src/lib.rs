//! Core domain logic for the hackathon contact book.
//! This crate owns every business rule; the CLI only reads input and prints.

pub mod command;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::parser::{parse_command, ParseError};
pub use command::{Command, CommandError, CommandResult};
pub use config::{Config, UserPrefs};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{AddressBook, BookError, EventBook};
pub use model::event::Event;
pub use model::fields::{
    Category, Comment, Email, EventCategory, EventDate, EventName, Group, Name, Phone,
    ValidationError,
};
pub use model::manager::Model;
pub use model::person::{Person, PersonError};
pub use repo::{RepoError, RepoResult, Storage, StorageManager};
pub use service::logic_service::{LogicError, LogicService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
