//! User commands, their execution and reversal.
//!
//! # Responsibility
//! - Represent every user action as one `Command` variant.
//! - Execute commands against a `Model` and record reversible ones.
//!
//! # Invariants
//! - A command either fully applies (and records itself when reversible) or
//!   leaves the model untouched.
//! - Indexes are 1-based and resolved against the filtered views at execution
//!   time.

pub mod event_commands;
pub mod history;
pub mod messages;
pub mod parser;
pub mod person_commands;
pub mod reversible;

use crate::model::book::{BookError, RecordKind};
use crate::model::event::Event;
use crate::model::fields::{
    Category, Comment, Email, EventCategory, EventDate, EventName, Group, Name, Phone,
};
use crate::model::filter::PersonFilter;
use crate::model::manager::Model;
use crate::model::person::{Person, PersonError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

/// Outcome shown to the user after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The shell should print the command reference.
    pub show_help: bool,
    /// The shell should terminate.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// Failure while executing, undoing or redoing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidPersonIndex,
    InvalidEventIndex,
    DuplicatePerson,
    DuplicateEvent,
    NotEdited,
    NothingToUndo,
    NothingToRedo,
    Person(PersonError),
    Book(BookError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPersonIndex => f.write_str(messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX),
            Self::InvalidEventIndex => f.write_str(messages::MESSAGE_INVALID_EVENT_DISPLAYED_INDEX),
            Self::DuplicatePerson => f.write_str(messages::MESSAGE_DUPLICATE_PERSON),
            Self::DuplicateEvent => f.write_str(messages::MESSAGE_DUPLICATE_EVENT),
            Self::NotEdited => f.write_str(messages::MESSAGE_NOT_EDITED),
            Self::NothingToUndo => f.write_str(messages::MESSAGE_NOTHING_TO_UNDO),
            Self::NothingToRedo => f.write_str(messages::MESSAGE_NOTHING_TO_REDO),
            Self::Person(err) => write!(f, "{err}"),
            Self::Book(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Person(err) => Some(err),
            Self::Book(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BookError> for CommandError {
    fn from(value: BookError) -> Self {
        match value {
            BookError::Duplicate(RecordKind::Person) => Self::DuplicatePerson,
            BookError::Duplicate(RecordKind::Event) => Self::DuplicateEvent,
            other => Self::Book(other),
        }
    }
}

impl From<PersonError> for CommandError {
    fn from(value: PersonError) -> Self {
        Self::Person(value)
    }
}

/// 1-based position in a displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields to overwrite on an existing person; `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub category: Option<Category>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.email.is_some() || self.category.is_some()
    }

    /// Builds the edited person; comment and group carry over.
    pub fn apply(&self, person: &Person) -> Person {
        Person::from_parts(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.category.unwrap_or(person.category()),
            person.comment().clone(),
            person.group(),
        )
    }
}

/// Fields to overwrite on an existing event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditEventDescriptor {
    pub name: Option<EventName>,
    pub category: Option<EventCategory>,
    pub date: Option<EventDate>,
}

impl EditEventDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.category.is_some() || self.date.is_some()
    }

    pub fn apply(&self, event: &Event) -> Event {
        Event::new(
            self.name.clone().unwrap_or_else(|| event.name().clone()),
            self.category.clone().unwrap_or_else(|| event.category().clone()),
            self.date.unwrap_or(event.date()),
        )
    }
}

/// One parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Edit {
        index: Index,
        descriptor: EditPersonDescriptor,
    },
    Delete(Index),
    Comment {
        index: Index,
        comment: Comment,
    },
    Group {
        index: Index,
        group: Option<Group>,
    },
    Clear,
    List(PersonFilter),
    Find(Vec<String>),
    AddEvent(Event),
    EditEvent {
        index: Index,
        descriptor: EditEventDescriptor,
    },
    DeleteEvent(Index),
    ListEvents,
    FindEvent(Vec<String>),
    Undo,
    Redo,
    Help,
    Exit,
}

impl Command {
    /// Command word as typed by the user.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => person_commands::ADD_WORD,
            Self::Edit { .. } => person_commands::EDIT_WORD,
            Self::Delete(_) => person_commands::DELETE_WORD,
            Self::Comment { .. } => person_commands::COMMENT_WORD,
            Self::Group { .. } => person_commands::GROUP_WORD,
            Self::Clear => person_commands::CLEAR_WORD,
            Self::List(_) => person_commands::LIST_WORD,
            Self::Find(_) => person_commands::FIND_WORD,
            Self::AddEvent(_) => event_commands::ADD_EVENT_WORD,
            Self::EditEvent { .. } => event_commands::EDIT_EVENT_WORD,
            Self::DeleteEvent(_) => event_commands::DELETE_EVENT_WORD,
            Self::ListEvents => event_commands::LIST_EVENTS_WORD,
            Self::FindEvent(_) => event_commands::FIND_EVENT_WORD,
            Self::Undo => UNDO_WORD,
            Self::Redo => REDO_WORD,
            Self::Help => HELP_WORD,
            Self::Exit => EXIT_WORD,
        }
    }

    /// Whether a successful execution lands in the undo history.
    pub fn is_reversible(&self) -> bool {
        matches!(
            self,
            Self::Add(_)
                | Self::Edit { .. }
                | Self::Delete(_)
                | Self::Comment { .. }
                | Self::Group { .. }
                | Self::Clear
                | Self::AddEvent(_)
                | Self::EditEvent { .. }
                | Self::DeleteEvent(_)
        )
    }

    /// Whether executing this command may change persisted data.
    pub fn mutates_data(&self) -> bool {
        self.is_reversible() || matches!(self, Self::Undo | Self::Redo)
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(person) => person_commands::add(model, person),
            Self::Edit { index, descriptor } => person_commands::edit(model, *index, descriptor),
            Self::Delete(index) => person_commands::delete(model, *index),
            Self::Comment { index, comment } => person_commands::comment(model, *index, comment),
            Self::Group { index, group } => person_commands::group(model, *index, *group),
            Self::Clear => person_commands::clear(model),
            Self::List(filter) => person_commands::list(model, filter),
            Self::Find(keywords) => person_commands::find(model, keywords),
            Self::AddEvent(event) => event_commands::add_event(model, event),
            Self::EditEvent { index, descriptor } => {
                event_commands::edit_event(model, *index, descriptor)
            }
            Self::DeleteEvent(index) => event_commands::delete_event(model, *index),
            Self::ListEvents => event_commands::list_events(model),
            Self::FindEvent(keywords) => event_commands::find_event(model, keywords),
            Self::Undo => model.undo(),
            Self::Redo => model.redo(),
            Self::Help => Ok(CommandResult {
                show_help: true,
                ..CommandResult::new(messages::MESSAGE_SHOWING_HELP)
            }),
            Self::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new(messages::MESSAGE_EXITING)
            }),
        }
    }
}

pub const UNDO_WORD: &str = "undo";
pub const REDO_WORD: &str = "redo";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const UNDO_USAGE: &str = "undo: Reverts the most recent change.\nExample: undo";
pub const REDO_USAGE: &str = "redo: Re-applies the most recently reverted change.\nExample: redo";
pub const HELP_USAGE: &str = "help: Shows the command reference.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Saves and exits.\nExample: exit";

/// Usage text of every command, in help order.
pub fn usage_reference() -> Vec<&'static str> {
    vec![
        person_commands::ADD_USAGE,
        person_commands::EDIT_USAGE,
        person_commands::DELETE_USAGE,
        person_commands::COMMENT_USAGE,
        person_commands::GROUP_USAGE,
        person_commands::CLEAR_USAGE,
        person_commands::LIST_USAGE,
        person_commands::FIND_USAGE,
        event_commands::ADD_EVENT_USAGE,
        event_commands::EDIT_EVENT_USAGE,
        event_commands::DELETE_EVENT_USAGE,
        event_commands::LIST_EVENTS_USAGE,
        event_commands::FIND_EVENT_USAGE,
        UNDO_USAGE,
        REDO_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
}

/// Resolves a displayed index against the filtered person view.
pub(crate) fn person_at(model: &Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_persons()
        .get(index.zero_based())
        .map(|person| (*person).clone())
        .ok_or(CommandError::InvalidPersonIndex)
}

pub(crate) fn event_at(model: &Model, index: Index) -> Result<Event, CommandError> {
    model
        .filtered_events()
        .get(index.zero_based())
        .map(|event| (*event).clone())
        .ok_or(CommandError::InvalidEventIndex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_converts_between_bases() {
        assert!(Index::from_one_based(0).is_none());
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
    }

    #[test]
    fn book_duplicates_map_to_command_errors() {
        assert_eq!(
            CommandError::from(BookError::Duplicate(RecordKind::Event)),
            CommandError::DuplicateEvent
        );
        assert_eq!(
            CommandError::from(BookError::NotFound(RecordKind::Person)).to_string(),
            "The person could not be found"
        );
    }

    #[test]
    fn help_and_exit_set_flags() {
        let mut model = Model::default();
        assert!(Command::Help.execute(&mut model).unwrap().show_help);
        assert!(Command::Exit.execute(&mut model).unwrap().exit);
        assert!(!Command::Help.mutates_data());
        assert!(Command::Undo.mutates_data());
    }
}
