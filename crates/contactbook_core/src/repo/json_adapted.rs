//! JSON wire shapes for persons, events and their books.
//!
//! # Responsibility
//! - Mirror domain records with plain, optional fields for lenient decoding.
//! - Convert back to domain records with field-specific error messages.
//!
//! # Invariants
//! - Field names are camelCase.
//! - `to_model` never accepts what the command parser would reject.

use crate::model::book::{AddressBook, EventBook};
use crate::model::event::Event;
use crate::model::fields::{
    Category, Comment, Email, EventCategory, EventDate, EventName, Group, Name, Phone,
    ValidationError,
};
use crate::model::person::Person;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_DUPLICATE_PERSON: &str = "Persons list contains duplicate person(s).";
pub const MESSAGE_DUPLICATE_EVENT: &str = "Events list contains duplicate event(s).";

/// A stored value that cannot become a domain record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalValueError(pub String);

impl Display for IllegalValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for IllegalValueError {}

impl From<ValidationError> for IllegalValueError {
    fn from(value: ValidationError) -> Self {
        Self(value.to_string())
    }
}

fn missing(owner: &str, field: &str) -> IllegalValueError {
    IllegalValueError(format!("{owner}'s {field} field is missing!"))
}

fn required<'a>(value: &'a Option<String>, owner: &str, field: &str) -> Result<&'a str, IllegalValueError> {
    value.as_deref().ok_or_else(|| missing(owner, field))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPerson {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub group: Option<u32>,
}

impl From<&Person> for JsonAdaptedPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            category: Some(person.category().to_string()),
            comment: Some(person.comment().to_string()),
            group: person.group().map(Group::number),
        }
    }
}

impl JsonAdaptedPerson {
    pub fn to_model(&self) -> Result<Person, IllegalValueError> {
        const OWNER: &str = "Person";
        let name = Name::parse(required(&self.name, OWNER, "Name")?)?;
        let phone = Phone::parse(required(&self.phone, OWNER, "Phone")?)?;
        let email = Email::parse(required(&self.email, OWNER, "Email")?)?;
        let category = Category::parse(required(&self.category, OWNER, "Category")?)?;
        let comment = self.comment.as_deref().map(Comment::new).unwrap_or_default();
        let group = self.group.map(Group::new).transpose()?;

        Person::from_parts(name, phone, email, category, comment, None)
            .with_group(group)
            .map_err(|err| IllegalValueError(err.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedEvent {
    pub name: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl From<&Event> for JsonAdaptedEvent {
    fn from(event: &Event) -> Self {
        Self {
            name: Some(event.name().to_string()),
            category: Some(event.category().to_string()),
            date: Some(event.date().to_string()),
        }
    }
}

impl JsonAdaptedEvent {
    pub fn to_model(&self) -> Result<Event, IllegalValueError> {
        const OWNER: &str = "Event";
        Ok(Event::new(
            EventName::parse(required(&self.name, OWNER, "Name")?)?,
            EventCategory::parse(required(&self.category, OWNER, "Category")?)?,
            EventDate::parse(required(&self.date, OWNER, "Date")?)?,
        ))
    }
}

/// Address book document: `{"persons": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            persons: book.items().iter().map(JsonAdaptedPerson::from).collect(),
        }
    }
}

impl JsonSerializableAddressBook {
    pub fn to_model(&self) -> Result<AddressBook, IllegalValueError> {
        let mut book = AddressBook::new();
        for adapted in &self.persons {
            book.add(adapted.to_model()?)
                .map_err(|_| IllegalValueError(MESSAGE_DUPLICATE_PERSON.to_string()))?;
        }
        Ok(book)
    }
}

/// Event book document: `{"events": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableEventBook {
    #[serde(default)]
    pub events: Vec<JsonAdaptedEvent>,
}

impl From<&EventBook> for JsonSerializableEventBook {
    fn from(book: &EventBook) -> Self {
        Self {
            events: book.items().iter().map(JsonAdaptedEvent::from).collect(),
        }
    }
}

impl JsonSerializableEventBook {
    pub fn to_model(&self) -> Result<EventBook, IllegalValueError> {
        let mut book = EventBook::new();
        for adapted in &self.events {
            book.add(adapted.to_model()?)
                .map_err(|_| IllegalValueError(MESSAGE_DUPLICATE_EVENT.to_string()))?;
        }
        Ok(book)
    }
}
