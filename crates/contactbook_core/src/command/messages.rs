//! User-facing feedback strings.

use crate::model::event::Event;
use crate::model::person::Person;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_EVENT_DISPLAYED_INDEX: &str = "The event index provided is invalid";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_DUPLICATE_EVENT: &str = "This event already exists in the event book";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_NOTHING_TO_UNDO: &str = "No more commands to undo!";
pub const MESSAGE_NOTHING_TO_REDO: &str = "No more commands to redo!";
pub const MESSAGE_CLEARED: &str = "Address book has been cleared!";
pub const MESSAGE_LISTED_ALL_PERSONS: &str = "Listed all persons";
pub const MESSAGE_LISTED_ALL_EVENTS: &str = "Listed all events";
pub const MESSAGE_SHOWING_HELP: &str = "Showing help.";
pub const MESSAGE_EXITING: &str = "Exiting address book as requested ...";

pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{usage}")
}

pub fn duplicate_fields(prefixes: &[&str]) -> String {
    format!("{MESSAGE_DUPLICATE_FIELDS}{}", prefixes.join(" "))
}

pub fn persons_listed(count: usize) -> String {
    format!("{count} persons listed!")
}

pub fn events_listed(count: usize) -> String {
    format!("{count} events listed!")
}

pub fn person_added(person: &Person) -> String {
    format!("New person added: {person}")
}

pub fn person_edited(person: &Person) -> String {
    format!("Edited Person: {person}")
}

pub fn person_deleted(person: &Person) -> String {
    format!("Deleted Person: {person}")
}

pub fn person_commented(person: &Person) -> String {
    format!("Commented Person: {person}")
}

pub fn person_grouped(person: &Person) -> String {
    match person.group() {
        Some(group) => format!("Grouped Person into group {group}: {person}"),
        None => format!("Removed Person from group: {person}"),
    }
}

pub fn event_added(event: &Event) -> String {
    format!("New event added: {event}")
}

pub fn event_edited(event: &Event) -> String {
    format!("Edited Event: {event}")
}

pub fn event_deleted(event: &Event) -> String {
    format!("Deleted Event: {event}")
}

pub fn changes_reverted(target: &str) -> String {
    format!("Changes reverted: {target}")
}
