//! Text → `Command` parsing.
//!
//! # Responsibility
//! - Split raw input into command word and arguments.
//! - Tokenize `prefix/value` arguments and validate every field.
//!
//! # Invariants
//! - A prefix is only recognised at the start of the arguments or right after
//!   whitespace, so `e/` inside `john@e/x` is plain text.
//! - Single-valued prefixes given more than once are rejected, never merged.
//! - Parsing never touches the model; index range checks happen at execution.

use crate::command::{
    event_commands, messages, person_commands, Command, EditEventDescriptor,
    EditPersonDescriptor, Index, EXIT_WORD, HELP_USAGE, HELP_WORD, REDO_WORD, UNDO_WORD,
};
use crate::model::event::Event;
use crate::model::fields::{
    Category, Comment, Email, EventCategory, EventDate, EventName, Group, Name, Phone,
    ValidationError,
};
use crate::model::filter::PersonFilter;
use crate::model::person::Person;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const PREFIX_NAME: &str = "n/";
pub const PREFIX_PHONE: &str = "p/";
pub const PREFIX_EMAIL: &str = "e/";
pub const PREFIX_CATEGORY: &str = "c/";
pub const PREFIX_COMMENT: &str = "r/";
pub const PREFIX_GROUP: &str = "g/";
pub const PREFIX_DATE: &str = "d/";

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    /// Arguments do not match the command's shape; carries its usage text.
    InvalidFormat(&'static str),
    InvalidIndex(String),
    DuplicatePrefixes(Vec<&'static str>),
    NotEdited,
    Field(ValidationError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(_) => f.write_str(messages::MESSAGE_UNKNOWN_COMMAND),
            Self::InvalidFormat(usage) => f.write_str(&messages::invalid_command_format(usage)),
            Self::InvalidIndex(_) => f.write_str(messages::MESSAGE_INVALID_INDEX),
            Self::DuplicatePrefixes(prefixes) => f.write_str(&messages::duplicate_fields(prefixes)),
            Self::NotEdited => f.write_str(messages::MESSAGE_NOT_EDITED),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ParseError {
    fn from(value: ValidationError) -> Self {
        Self::Field(value)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenized arguments: preamble plus every value seen per prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<&'static str, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: &str) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, prefix: &str) -> bool {
        self.values.contains_key(prefix)
    }

    /// Fails when any of `prefixes` was given more than once.
    pub fn verify_no_duplicates(&self, prefixes: &[&'static str]) -> ParseResult<()> {
        let duplicated: Vec<&'static str> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(prefix).len() > 1)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Splits `args` into preamble and prefixed values.
pub fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, &'static str)> = Vec::new();
    for &prefix in prefixes {
        for (at, _) in args.match_indices(prefix) {
            let starts_token = args[..at]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if starts_token {
                positions.push((at, prefix));
            }
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (idx, (at, prefix)) in positions.iter().enumerate() {
        let value_start = at + prefix.len();
        let value_end = positions.get(idx + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }
    multimap
}

/// Parses a 1-based index.
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex(raw.to_string()));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(raw.to_string()))
}

/// Parses one line of user input into a command.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat(HELP_USAGE));
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(at) => trimmed.split_at(at),
        None => (trimmed, ""),
    };

    match word {
        person_commands::ADD_WORD => parse_add(args),
        person_commands::EDIT_WORD => parse_edit(args),
        person_commands::DELETE_WORD => {
            parse_index_only(args, person_commands::DELETE_USAGE).map(Command::Delete)
        }
        person_commands::COMMENT_WORD => parse_comment(args),
        person_commands::GROUP_WORD => parse_group(args),
        person_commands::CLEAR_WORD => Ok(Command::Clear),
        person_commands::LIST_WORD => parse_list(args),
        person_commands::FIND_WORD => {
            parse_keywords(args, person_commands::FIND_USAGE).map(Command::Find)
        }
        event_commands::ADD_EVENT_WORD => parse_add_event(args),
        event_commands::EDIT_EVENT_WORD => parse_edit_event(args),
        event_commands::DELETE_EVENT_WORD => {
            parse_index_only(args, event_commands::DELETE_EVENT_USAGE).map(Command::DeleteEvent)
        }
        event_commands::LIST_EVENTS_WORD => Ok(Command::ListEvents),
        event_commands::FIND_EVENT_WORD => {
            parse_keywords(args, event_commands::FIND_EVENT_USAGE).map(Command::FindEvent)
        }
        UNDO_WORD => Ok(Command::Undo),
        REDO_WORD => Ok(Command::Redo),
        HELP_WORD => Ok(Command::Help),
        EXIT_WORD => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_add(args: &str) -> ParseResult<Command> {
    let prefixes = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_CATEGORY,
        PREFIX_COMMENT,
    ];
    let map = tokenize(args, &prefixes);
    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_CATEGORY];
    if !required.iter().all(|prefix| map.has(prefix)) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(person_commands::ADD_USAGE));
    }
    map.verify_no_duplicates(&prefixes)?;

    let person = Person::from_parts(
        Name::parse(map.value(PREFIX_NAME).unwrap_or_default())?,
        Phone::parse(map.value(PREFIX_PHONE).unwrap_or_default())?,
        Email::parse(map.value(PREFIX_EMAIL).unwrap_or_default())?,
        Category::parse(map.value(PREFIX_CATEGORY).unwrap_or_default())?,
        map.value(PREFIX_COMMENT).map(Comment::new).unwrap_or_default(),
        None,
    );
    Ok(Command::Add(person))
}

fn parse_edit(args: &str) -> ParseResult<Command> {
    let prefixes = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_CATEGORY];
    let map = tokenize(args, &prefixes);
    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidFormat(person_commands::EDIT_USAGE))?;
    map.verify_no_duplicates(&prefixes)?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        category: map.value(PREFIX_CATEGORY).map(Category::parse).transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(Command::Edit { index, descriptor })
}

fn parse_comment(args: &str) -> ParseResult<Command> {
    let trimmed = args.trim();
    let (raw_index, text) = match trimmed.find(char::is_whitespace) {
        Some(at) => trimmed.split_at(at),
        None => (trimmed, ""),
    };
    let index = parse_index(raw_index)
        .map_err(|_| ParseError::InvalidFormat(person_commands::COMMENT_USAGE))?;
    Ok(Command::Comment {
        index,
        comment: Comment::new(text),
    })
}

fn parse_group(args: &str) -> ParseResult<Command> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let (raw_index, raw_group) = match tokens.as_slice() {
        [index] => (*index, None),
        [index, group] => (*index, Some(*group)),
        _ => return Err(ParseError::InvalidFormat(person_commands::GROUP_USAGE)),
    };
    let index = parse_index(raw_index)
        .map_err(|_| ParseError::InvalidFormat(person_commands::GROUP_USAGE))?;
    let group = raw_group.map(Group::parse).transpose()?;
    Ok(Command::Group { index, group })
}

fn parse_list(args: &str) -> ParseResult<Command> {
    let prefixes = [PREFIX_CATEGORY, PREFIX_GROUP];
    let map = tokenize(args, &prefixes);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(person_commands::LIST_USAGE));
    }
    map.verify_no_duplicates(&prefixes)?;

    let category = map.value(PREFIX_CATEGORY).map(Category::parse).transpose()?;
    let group = map.value(PREFIX_GROUP).map(Group::parse).transpose()?;
    let filter = match (category, group) {
        (None, None) => PersonFilter::All,
        (Some(category), None) => PersonFilter::Category(category),
        (None, Some(group)) => PersonFilter::Group(group),
        (Some(category), Some(group)) => PersonFilter::CategoryAndGroup(category, group),
    };
    Ok(Command::List(filter))
}

fn parse_add_event(args: &str) -> ParseResult<Command> {
    let prefixes = [PREFIX_NAME, PREFIX_CATEGORY, PREFIX_DATE];
    let map = tokenize(args, &prefixes);
    if !prefixes.iter().all(|prefix| map.has(prefix)) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(event_commands::ADD_EVENT_USAGE));
    }
    map.verify_no_duplicates(&prefixes)?;

    let event = Event::new(
        EventName::parse(map.value(PREFIX_NAME).unwrap_or_default())?,
        EventCategory::parse(map.value(PREFIX_CATEGORY).unwrap_or_default())?,
        EventDate::parse(map.value(PREFIX_DATE).unwrap_or_default())?,
    );
    Ok(Command::AddEvent(event))
}

fn parse_edit_event(args: &str) -> ParseResult<Command> {
    let prefixes = [PREFIX_NAME, PREFIX_CATEGORY, PREFIX_DATE];
    let map = tokenize(args, &prefixes);
    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidFormat(event_commands::EDIT_EVENT_USAGE))?;
    map.verify_no_duplicates(&prefixes)?;

    let descriptor = EditEventDescriptor {
        name: map.value(PREFIX_NAME).map(EventName::parse).transpose()?,
        category: map
            .value(PREFIX_CATEGORY)
            .map(EventCategory::parse)
            .transpose()?,
        date: map.value(PREFIX_DATE).map(EventDate::parse).transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(Command::EditEvent { index, descriptor })
}

fn parse_index_only(args: &str, usage: &'static str) -> ParseResult<Index> {
    parse_index(args).map_err(|_| ParseError::InvalidFormat(usage))
}

fn parse_keywords(args: &str, usage: &'static str) -> ParseResult<Vec<String>> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(usage));
    }
    Ok(keywords)
}
