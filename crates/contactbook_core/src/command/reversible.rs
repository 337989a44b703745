//! Recorded state of executed mutations.
//!
//! # Responsibility
//! - Capture enough before/after state to revert and re-apply a command.
//!
//! # Invariants
//! - `undo` after `redo` (and vice versa) restores the exact same books.
//! - Deletions restore the record at its former position.
//! - Feedback: undo yields `Changes reverted: ...`, redo yields the original
//!   success message.

use crate::command::{messages, person_commands, event_commands, CommandError, CommandResult};
use crate::model::book::{AddressBook, EventBook};
use crate::model::event::Event;
use crate::model::manager::Model;
use crate::model::person::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReversibleCommand {
    AddPerson {
        person: Person,
    },
    DeletePerson {
        person: Person,
        /// Position in the address book before deletion.
        position: usize,
    },
    EditPerson {
        original: Person,
        edited: Person,
    },
    CommentPerson {
        original: Person,
        edited: Person,
    },
    GroupPerson {
        original: Person,
        edited: Person,
    },
    Clear {
        address_book: AddressBook,
        event_book: EventBook,
    },
    AddEvent {
        event: Event,
    },
    DeleteEvent {
        event: Event,
        position: usize,
    },
    EditEvent {
        original: Event,
        edited: Event,
    },
}

impl ReversibleCommand {
    /// Word of the command that produced this record.
    pub fn word(&self) -> &'static str {
        match self {
            Self::AddPerson { .. } => person_commands::ADD_WORD,
            Self::DeletePerson { .. } => person_commands::DELETE_WORD,
            Self::EditPerson { .. } => person_commands::EDIT_WORD,
            Self::CommentPerson { .. } => person_commands::COMMENT_WORD,
            Self::GroupPerson { .. } => person_commands::GROUP_WORD,
            Self::Clear { .. } => person_commands::CLEAR_WORD,
            Self::AddEvent { .. } => event_commands::ADD_EVENT_WORD,
            Self::DeleteEvent { .. } => event_commands::DELETE_EVENT_WORD,
            Self::EditEvent { .. } => event_commands::EDIT_EVENT_WORD,
        }
    }

    /// Reverts this command's effect on `model`.
    pub fn undo(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = match self {
            Self::AddPerson { person } => {
                model.delete_person(person)?;
                person.to_string()
            }
            Self::DeletePerson { person, position } => {
                model.insert_person_at(*position, person.clone())?;
                person.to_string()
            }
            Self::EditPerson { original, edited }
            | Self::CommentPerson { original, edited }
            | Self::GroupPerson { original, edited } => {
                model.set_person(edited, original.clone())?;
                original.to_string()
            }
            Self::Clear {
                address_book,
                event_book,
            } => {
                model.set_address_book(address_book.clone());
                model.set_event_book(event_book.clone());
                person_commands::CLEAR_WORD.to_string()
            }
            Self::AddEvent { event } => {
                model.delete_event(event)?;
                event.to_string()
            }
            Self::DeleteEvent { event, position } => {
                model.insert_event_at(*position, event.clone())?;
                event.to_string()
            }
            Self::EditEvent { original, edited } => {
                model.set_event(edited, original.clone())?;
                original.to_string()
            }
        };
        Ok(CommandResult::new(messages::changes_reverted(&target)))
    }

    /// Re-applies this command's effect on `model`.
    pub fn redo(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let feedback = match self {
            Self::AddPerson { person } => {
                model.add_person(person.clone())?;
                messages::person_added(person)
            }
            Self::DeletePerson { person, .. } => {
                model.delete_person(person)?;
                messages::person_deleted(person)
            }
            Self::EditPerson { original, edited } => {
                model.set_person(original, edited.clone())?;
                messages::person_edited(edited)
            }
            Self::CommentPerson { original, edited } => {
                model.set_person(original, edited.clone())?;
                messages::person_commented(edited)
            }
            Self::GroupPerson { original, edited } => {
                model.set_person(original, edited.clone())?;
                messages::person_grouped(edited)
            }
            Self::Clear { .. } => {
                model.set_address_book(AddressBook::new());
                model.set_event_book(EventBook::new());
                messages::MESSAGE_CLEARED.to_string()
            }
            Self::AddEvent { event } => {
                model.add_event(event.clone())?;
                messages::event_added(event)
            }
            Self::DeleteEvent { event, .. } => {
                model.delete_event(event)?;
                messages::event_deleted(event)
            }
            Self::EditEvent { original, edited } => {
                model.set_event(original, edited.clone())?;
                messages::event_edited(edited)
            }
        };
        Ok(CommandResult::new(feedback))
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, CommandError, EditPersonDescriptor, Index};
    use crate::model::event::Event;
    use crate::model::fields::{
        Category, Comment, Email, EventCategory, EventDate, EventName, Group, Name, Phone,
    };
    use crate::model::manager::Model;
    use crate::model::person::Person;

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse("someone@example.com").unwrap(),
            Category::Participant,
        )
    }

    fn seeded() -> Model {
        let mut model = Model::default();
        for (name, phone) in [("Alice", "111"), ("Bob", "222"), ("Carl", "333")] {
            model.add_person(person(name, phone)).unwrap();
        }
        model
            .add_event(Event::new(
                EventName::parse("Rust 101").unwrap(),
                EventCategory::parse("Workshop").unwrap(),
                EventDate::parse("2024-03-01").unwrap(),
            ))
            .unwrap();
        model
    }

    fn one() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn undo_delete_restores_original_position() {
        let mut model = seeded();
        let before = model.address_book().clone();
        Command::Delete(Index::from_one_based(2).unwrap())
            .execute(&mut model)
            .unwrap();

        let result = model.undo().unwrap();
        assert!(result.feedback.starts_with("Changes reverted: Bob"));
        assert_eq!(model.address_book(), &before);

        let redo = model.redo().unwrap();
        assert!(redo.feedback.starts_with("Deleted Person: Bob"));
        assert_eq!(model.address_book().len(), 2);
    }

    #[test]
    fn undo_walks_back_through_several_commands() {
        let mut model = seeded();
        let before = model.address_book().clone();
        Command::Comment {
            index: one(),
            comment: Comment::new("late"),
        }
        .execute(&mut model)
        .unwrap();
        Command::Group {
            index: one(),
            group: Some(Group::new(7).unwrap()),
        }
        .execute(&mut model)
        .unwrap();
        Command::Edit {
            index: one(),
            descriptor: EditPersonDescriptor {
                phone: Some(Phone::parse("999").unwrap()),
                ..EditPersonDescriptor::default()
            },
        }
        .execute(&mut model)
        .unwrap();

        let current = &model.address_book().items()[0];
        assert_eq!(current.phone().as_str(), "999");
        assert_eq!(current.group_number(), 7);
        assert_eq!(current.comment().as_str(), "late");

        model.undo().unwrap();
        model.undo().unwrap();
        model.undo().unwrap();
        assert_eq!(model.address_book(), &before);
        assert_eq!(model.undo().unwrap_err(), CommandError::NothingToUndo);

        model.redo().unwrap();
        model.redo().unwrap();
        model.redo().unwrap();
        assert_eq!(model.address_book().items()[0].phone().as_str(), "999");
        assert_eq!(model.redo().unwrap_err(), CommandError::NothingToRedo);
    }

    #[test]
    fn new_command_after_undo_discards_redo() {
        let mut model = seeded();
        Command::Delete(one()).execute(&mut model).unwrap();
        model.undo().unwrap();
        Command::Add(person("Dan", "444")).execute(&mut model).unwrap();
        assert!(!model.can_redo());
        assert_eq!(model.redo().unwrap_err(), CommandError::NothingToRedo);
    }

    #[test]
    fn clear_round_trips_both_books() {
        let mut model = seeded();
        let persons = model.address_book().clone();
        let events = model.event_book().clone();
        Command::Clear.execute(&mut model).unwrap();
        assert!(model.address_book().is_empty());
        assert!(model.event_book().is_empty());

        assert_eq!(model.undo().unwrap().feedback, "Changes reverted: clear");
        assert_eq!(model.address_book(), &persons);
        assert_eq!(model.event_book(), &events);

        model.redo().unwrap();
        assert!(model.address_book().is_empty());
    }

    #[test]
    fn undo_resets_filters() {
        let mut model = seeded();
        Command::Delete(one()).execute(&mut model).unwrap();
        Command::Find(vec!["carl".to_string()]).execute(&mut model).unwrap();
        assert_eq!(model.filtered_persons().len(), 1);
        model.undo().unwrap();
        assert_eq!(model.filtered_persons().len(), 3);
    }

    #[test]
    fn failed_revert_keeps_history_position() {
        let mut model = seeded();
        Command::Add(person("Dan", "444")).execute(&mut model).unwrap();
        // Remove the added record behind the history's back.
        let dan = person("Dan", "444");
        model.delete_person(&dan).unwrap();

        assert!(model.undo().is_err());
        assert!(model.can_undo());
        assert_eq!(model.history().cursor(), 1);
    }

    #[test]
    fn event_commands_are_reversible() {
        let mut model = seeded();
        Command::DeleteEvent(one()).execute(&mut model).unwrap();
        assert!(model.event_book().is_empty());
        model.undo().unwrap();
        assert_eq!(model.event_book().len(), 1);
    }
}
