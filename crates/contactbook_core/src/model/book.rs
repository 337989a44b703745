//! Ordered collections that reject identity duplicates.
//!
//! # Responsibility
//! - Hold the persons and events of one address book in display order.
//! - Reject inserts/replacements that would create identity duplicates.
//!
//! # Invariants
//! - No two elements satisfy `Unique::same_identity`.
//! - Element order is insertion order; `insert_at` restores exact positions.

use crate::model::event::Event;
use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record family held by a [`UniqueList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Person,
    Event,
}

impl RecordKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Event => "event",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    Duplicate(RecordKind),
    NotFound(RecordKind),
}

impl Display for BookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(kind) => write!(f, "This {} already exists", kind.as_str()),
            Self::NotFound(kind) => write!(f, "The {} could not be found", kind.as_str()),
        }
    }
}

impl Error for BookError {}

/// Records with a weaker identity notion than full equality.
pub trait Unique: Clone + PartialEq {
    const KIND: RecordKind;

    fn same_identity(&self, other: &Self) -> bool;
}

impl Unique for Person {
    const KIND: RecordKind = RecordKind::Person;

    fn same_identity(&self, other: &Self) -> bool {
        self.is_same_identity(other)
    }
}

impl Unique for Event {
    const KIND: RecordKind = RecordKind::Event;

    fn same_identity(&self, other: &Self) -> bool {
        self.is_same_event(other)
    }
}

/// Ordered list without identity duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Unique> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `items`, failing on the first identity duplicate.
    pub fn from_items(items: Vec<T>) -> Result<Self, BookError> {
        let mut list = Self::new();
        for item in items {
            list.add(item)?;
        }
        Ok(list)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if an element with the same identity exists.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.same_identity(item))
    }

    /// Position of the element fully equal to `item`.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    pub fn add(&mut self, item: T) -> Result<(), BookError> {
        self.insert_at(self.items.len(), item)
    }

    /// Inserts at `index`, clamped to the list length.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), BookError> {
        if self.contains(&item) {
            return Err(BookError::Duplicate(T::KIND));
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may share identity with `target` itself but not with any
    /// other element.
    pub fn replace(&mut self, target: &T, edited: T) -> Result<(), BookError> {
        let index = self.position(target).ok_or(BookError::NotFound(T::KIND))?;
        let clashes = self
            .items
            .iter()
            .enumerate()
            .any(|(idx, existing)| idx != index && existing.same_identity(&edited));
        if clashes {
            return Err(BookError::Duplicate(T::KIND));
        }
        self.items[index] = edited;
        Ok(())
    }

    /// Removes `target` and returns the position it occupied.
    pub fn remove(&mut self, target: &T) -> Result<usize, BookError> {
        let index = self.position(target).ok_or(BookError::NotFound(T::KIND))?;
        self.items.remove(index);
        Ok(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Persons of the address book.
pub type AddressBook = UniqueList<Person>;
/// Events of the address book.
pub type EventBook = UniqueList<Event>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::{Category, Email, Name, Phone};

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse("someone@example.com").unwrap(),
            Category::Participant,
        )
    }

    #[test]
    fn add_rejects_identity_duplicates() {
        let mut book = AddressBook::new();
        book.add(person("Alice", "111")).unwrap();
        let err = book.add(person("Alice", "111")).unwrap_err();
        assert_eq!(err, BookError::Duplicate(RecordKind::Person));
        book.add(person("Alice", "222")).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn remove_reports_position_and_insert_at_restores_it() {
        let mut book = AddressBook::new();
        for (name, phone) in [("Alice", "111"), ("Bob", "222"), ("Carl", "333")] {
            book.add(person(name, phone)).unwrap();
        }
        let bob = person("Bob", "222");
        let index = book.remove(&bob).unwrap();
        assert_eq!(index, 1);
        book.insert_at(index, bob.clone()).unwrap();
        assert_eq!(book.items()[1], bob);
    }

    #[test]
    fn replace_allows_self_identity_but_not_others() {
        let mut book = AddressBook::new();
        let alice = person("Alice", "111");
        book.add(alice.clone()).unwrap();
        book.add(person("Bob", "222")).unwrap();

        let renamed = person("Alice", "111").with_comment(crate::model::fields::Comment::new("x"));
        book.replace(&alice, renamed.clone()).unwrap();
        assert_eq!(book.items()[0], renamed);

        let err = book.replace(&renamed, person("Bob", "222")).unwrap_err();
        assert_eq!(err, BookError::Duplicate(RecordKind::Person));
    }

    #[test]
    fn missing_targets_are_reported() {
        let mut book = AddressBook::new();
        let ghost = person("Ghost", "000");
        assert_eq!(
            book.remove(&ghost).unwrap_err(),
            BookError::NotFound(RecordKind::Person)
        );
        assert!(AddressBook::from_items(vec![ghost.clone(), ghost]).is_err());
    }
}
