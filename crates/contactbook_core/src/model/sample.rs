//! Seed data used when no data files exist yet.

use crate::model::book::{AddressBook, BookError, EventBook};
use crate::model::event::Event;
use crate::model::fields::{
    Category, Comment, Email, EventCategory, EventDate, EventName, Group, Name, Phone,
    ValidationError,
};
use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `(name, phone, email, category, comment, group)`
type PersonRow = (&'static str, &'static str, &'static str, &'static str, &'static str, Option<u32>);

const SAMPLE_PERSONS: &[PersonRow] = &[
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "PARTICIPANT", "", Some(1)),
    ("Bernice Yu", "99272758", "berniceyu@example.com", "PARTICIPANT", "Team lead", Some(1)),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", "PARTICIPANT", "", Some(2)),
    ("David Li", "91031282", "lidavid@example.com", "STAFF", "Venue logistics", None),
    ("Irfan Ibrahim", "92492021", "irfan@example.com", "STAFF", "", None),
    ("Roy Balakrishnan", "92624417", "royb@example.com", "SPONSOR", "Cloud credits", None),
];

const SAMPLE_EVENTS: &[(&str, &str, &str)] = &[
    ("Opening Ceremony", "Talk", "2024-03-01"),
    ("Intro to Rust", "Workshop", "2024-03-01"),
    ("Final Pitches", "Judging", "2024-03-03"),
];

/// Seed data that failed to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleDataError {
    Field(ValidationError),
    Book(BookError),
}

impl Display for SampleDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(err) => write!(f, "invalid sample field: {err}"),
            Self::Book(err) => write!(f, "invalid sample book: {err}"),
        }
    }
}

impl Error for SampleDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::Book(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SampleDataError {
    fn from(value: ValidationError) -> Self {
        Self::Field(value)
    }
}

impl From<BookError> for SampleDataError {
    fn from(value: BookError) -> Self {
        Self::Book(value)
    }
}

/// Builds the sample address book.
pub fn sample_address_book() -> Result<AddressBook, SampleDataError> {
    let persons = SAMPLE_PERSONS
        .iter()
        .map(sample_person)
        .collect::<Result<Vec<_>, ValidationError>>()?;
    Ok(AddressBook::from_items(persons)?)
}

fn sample_person(row: &PersonRow) -> Result<Person, ValidationError> {
    let &(name, phone, email, category, comment, group) = row;
    Ok(Person::from_parts(
        Name::parse(name)?,
        Phone::parse(phone)?,
        Email::parse(email)?,
        Category::parse(category)?,
        Comment::new(comment),
        group.map(Group::new).transpose()?,
    ))
}

/// Builds the sample event book.
pub fn sample_event_book() -> Result<EventBook, SampleDataError> {
    let events = SAMPLE_EVENTS
        .iter()
        .map(|&(name, category, date)| -> Result<Event, ValidationError> {
            Ok(Event::new(
                EventName::parse(name)?,
                EventCategory::parse(category)?,
                EventDate::parse(date)?,
            ))
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;
    Ok(EventBook::from_items(events)?)
}

#[cfg(test)]
mod tests {
    use super::{
        sample_address_book, sample_event_book, SampleDataError, SAMPLE_EVENTS, SAMPLE_PERSONS,
    };
    use crate::model::book::{BookError, RecordKind};
    use std::error::Error;

    #[test]
    fn sample_data_is_valid_and_complete() {
        assert_eq!(sample_address_book().unwrap().len(), SAMPLE_PERSONS.len());
        assert_eq!(sample_event_book().unwrap().len(), SAMPLE_EVENTS.len());
    }

    #[test]
    fn sample_errors_keep_their_cause() {
        let err = SampleDataError::from(BookError::Duplicate(RecordKind::Person));
        assert_eq!(err.to_string(), "invalid sample book: This person already exists");
        assert!(err.source().is_some());
    }
}
