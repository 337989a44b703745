//! Command pipeline: parse → execute → persist.
//!
//! # Responsibility
//! - Provide the single entry point the shell feeds raw input into.
//! - Persist both books after every command that may change them.
//! - Bootstrap the in-memory model from storage at start-up.
//!
//! # Invariants
//! - A failed parse or execution never touches storage.
//! - User-entered text is never written to logs; only command words are.

use crate::command::parser::{parse_command, ParseError};
use crate::command::{CommandError, CommandResult};
use crate::model::book::{AddressBook, EventBook};
use crate::model::event::Event;
use crate::model::manager::Model;
use crate::model::person::Person;
use crate::model::sample::{sample_address_book, sample_event_book};
use crate::repo::{RepoError, Storage};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

#[derive(Debug)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
    /// The command applied in memory but could not be saved.
    Storage(RepoError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "Could not save data to file: {err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ParseError> for LogicError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<RepoError> for LogicError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

/// Service facade over the model and a storage implementation.
pub struct LogicService<S: Storage> {
    model: Model,
    storage: S,
}

impl<S: Storage> LogicService<S> {
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    /// Loads the model from `storage` (see [`load_model`]) and wraps both.
    pub fn load(storage: S) -> Self {
        let model = load_model(&storage);
        Self::new(model, storage)
    }

    /// Parses and executes one line of user input.
    ///
    /// # Errors
    /// - `LogicError::Parse` / `LogicError::Command` leave storage untouched.
    /// - `LogicError::Storage` when the change applied but saving failed.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        let started_at = Instant::now();
        let command = parse_command(input).map_err(|err| {
            info!(
                "event=command_parse module=service status=rejected error_code={}",
                parse_error_code(&err)
            );
            err
        })?;

        let result = command.execute(&mut self.model).map_err(|err| {
            info!(
                "event=command_execute module=service status=rejected command={}",
                command.word()
            );
            err
        })?;

        if command.mutates_data() {
            self.save()?;
        }

        info!(
            "event=command_execute module=service status=ok command={} persons={} events={} duration_ms={}",
            command.word(),
            self.model.address_book().len(),
            self.model.event_book().len(),
            started_at.elapsed().as_millis()
        );
        Ok(result)
    }

    /// Writes the address book, then the event book.
    ///
    /// Each file is replaced atomically but the pair is not: when the event
    /// book fails, the address book on disk is already updated. The model
    /// stays authoritative and the next successful save rewrites both.
    pub fn save(&self) -> Result<(), LogicError> {
        self.storage.save_address_book(self.model.address_book())?;
        self.storage.save_event_book(self.model.event_book())?;
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    pub fn filtered_events(&self) -> Vec<&Event> {
        self.model.filtered_events()
    }
}

/// Builds the start-up model from storage.
///
/// - Missing files load sample data.
/// - Unreadable or invalid files load an empty book and log a warning; the
///   bad file is only replaced once a command saves.
pub fn load_model<S: Storage>(storage: &S) -> Model {
    let address_book = match storage.read_address_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!("event=model_load module=service status=sample kind=address_book");
            sample_address_book().unwrap_or_default()
        }
        Err(err) => {
            warn!(
                "event=model_load module=service status=fallback kind=address_book error_code={} path={}",
                err.code(),
                err.path().display()
            );
            AddressBook::new()
        }
    };

    let event_book = match storage.read_event_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!("event=model_load module=service status=sample kind=event_book");
            sample_event_book().unwrap_or_default()
        }
        Err(err) => {
            warn!(
                "event=model_load module=service status=fallback kind=event_book error_code={} path={}",
                err.code(),
                err.path().display()
            );
            EventBook::new()
        }
    };

    info!(
        "event=model_load module=service status=ok persons={} events={}",
        address_book.len(),
        event_book.len()
    );
    Model::new(address_book, event_book)
}

fn parse_error_code(err: &ParseError) -> &'static str {
    match err {
        ParseError::UnknownCommand(_) => "unknown_command",
        ParseError::InvalidFormat(_) => "invalid_format",
        ParseError::InvalidIndex(_) => "invalid_index",
        ParseError::DuplicatePrefixes(_) => "duplicate_prefixes",
        ParseError::NotEdited => "not_edited",
        ParseError::Field(_) => "invalid_field",
    }
}
