//! In-memory application state.
//!
//! # Responsibility
//! - Own the address book, event book, display filters and command history.
//! - Provide the mutation primitives commands and their reversals build on.
//!
//! # Invariants
//! - Displayed indexes always refer to `filtered_persons`/`filtered_events`.
//! - Undo/redo reset both filters so the reverted record is visible.
//! - History only advances after a revert/re-apply succeeds.

use crate::command::history::CommandHistory;
use crate::command::reversible::ReversibleCommand;
use crate::command::{CommandError, CommandResult};
use crate::model::book::{AddressBook, BookError, EventBook};
use crate::model::event::Event;
use crate::model::fields::Group;
use crate::model::filter::{EventFilter, PersonFilter};
use crate::model::person::Person;
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct Model {
    address_book: AddressBook,
    event_book: EventBook,
    person_filter: PersonFilter,
    event_filter: EventFilter,
    history: CommandHistory,
}

impl Model {
    pub fn new(address_book: AddressBook, event_book: EventBook) -> Self {
        Self {
            address_book,
            event_book,
            ..Self::default()
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn event_book(&self) -> &EventBook {
        &self.event_book
    }

    /// Replaces all persons. History is kept; `clear` relies on this.
    pub fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book = address_book;
    }

    pub fn set_event_book(&mut self, event_book: EventBook) {
        self.event_book = event_book;
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), BookError> {
        self.address_book.add(person)
    }

    /// Inserts `person` at a book position, used to restore deletions.
    pub fn insert_person_at(&mut self, index: usize, person: Person) -> Result<(), BookError> {
        self.address_book.insert_at(index, person)
    }

    /// Deletes `target` and returns its former book position.
    pub fn delete_person(&mut self, target: &Person) -> Result<usize, BookError> {
        self.address_book.remove(target)
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), BookError> {
        self.address_book.replace(target, edited)
    }

    /// Assigns `target` to `group` (or ungroups it) and returns the new record.
    pub fn group_person(
        &mut self,
        target: &Person,
        group: Option<Group>,
    ) -> Result<Person, CommandError> {
        let grouped = target.with_group(group)?;
        self.address_book.replace(target, grouped.clone())?;
        Ok(grouped)
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.event_book.contains(event)
    }

    pub fn add_event(&mut self, event: Event) -> Result<(), BookError> {
        self.event_book.add(event)
    }

    pub fn insert_event_at(&mut self, index: usize, event: Event) -> Result<(), BookError> {
        self.event_book.insert_at(index, event)
    }

    pub fn delete_event(&mut self, target: &Event) -> Result<usize, BookError> {
        self.event_book.remove(target)
    }

    pub fn set_event(&mut self, target: &Event, edited: Event) -> Result<(), BookError> {
        self.event_book.replace(target, edited)
    }

    /// Persons visible under the current filter, in book order.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .items()
            .iter()
            .filter(|person| self.person_filter.matches(person))
            .collect()
    }

    pub fn filtered_events(&self) -> Vec<&Event> {
        self.event_book
            .items()
            .iter()
            .filter(|event| self.event_filter.matches(event))
            .collect()
    }

    pub fn person_filter(&self) -> &PersonFilter {
        &self.person_filter
    }

    pub fn event_filter(&self) -> &EventFilter {
        &self.event_filter
    }

    pub fn update_person_filter(&mut self, filter: PersonFilter) {
        self.person_filter = filter;
    }

    pub fn update_event_filter(&mut self, filter: EventFilter) {
        self.event_filter = filter;
    }

    pub fn show_all(&mut self) {
        self.person_filter = PersonFilter::All;
        self.event_filter = EventFilter::All;
    }

    /// Appends an executed reversible command to the history.
    pub fn record(&mut self, command: ReversibleCommand) {
        debug!(
            "event=history_record module=model status=ok command={} depth={}",
            command.word(),
            self.history.cursor() + 1
        );
        self.history.push(command);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Reverts the most recent applied command.
    ///
    /// # Errors
    /// - `CommandError::NothingToUndo` when no command is applied.
    /// - Any error from the revert itself; history is left unchanged.
    pub fn undo(&mut self) -> Result<CommandResult, CommandError> {
        let command = self.history.peek_undo()?.clone();
        let result = command.undo(self)?;
        self.history.mark_undone();
        self.show_all();
        Ok(result)
    }

    /// Re-applies the most recently undone command.
    pub fn redo(&mut self) -> Result<CommandResult, CommandError> {
        let command = self.history.peek_redo()?.clone();
        let result = command.redo(self)?;
        self.history.mark_redone();
        self.show_all();
        Ok(result)
    }
}
