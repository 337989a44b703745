//! Person-facing command execution.
//!
//! Reversible commands record the before/after state they produced so that
//! `ReversibleCommand` can revert and re-apply them without re-validating
//! user input.

use crate::command::reversible::ReversibleCommand;
use crate::command::{messages, person_at, CommandError, CommandResult, EditPersonDescriptor, Index};
use crate::model::book::{AddressBook, EventBook};
use crate::model::fields::{Comment, Group};
use crate::model::filter::PersonFilter;
use crate::model::manager::Model;
use crate::model::person::Person;

pub const ADD_WORD: &str = "add";
pub const EDIT_WORD: &str = "edit";
pub const DELETE_WORD: &str = "delete";
pub const COMMENT_WORD: &str = "comment";
pub const GROUP_WORD: &str = "group";
pub const CLEAR_WORD: &str = "clear";
pub const LIST_WORD: &str = "list";
pub const FIND_WORD: &str = "find";

pub const ADD_USAGE: &str = "add: Adds a person to the address book.\n\
Parameters: n/NAME p/PHONE e/EMAIL c/CATEGORY [r/COMMENT]\n\
Example: add n/John Doe p/98765432 e/johnd@example.com c/PARTICIPANT r/Vegetarian";
pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index \
number used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [c/CATEGORY]\n\
Example: edit 1 p/91234567 e/johndoe@example.com";
pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number used \
in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";
pub const COMMENT_USAGE: &str = "comment: Edits the comment of the person identified by the index \
number used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) COMMENT\n\
Example: comment 1 This is a comment.";
pub const GROUP_USAGE: &str = "group: Assigns the participant identified by the index number used \
in the displayed person list to a group. Omitting the group number removes the participant from its group.\n\
Parameters: INDEX (must be a positive integer) [GROUP_NUMBER]\n\
Example: group 1 3";
pub const CLEAR_USAGE: &str = "clear: Removes every person and event.\nExample: clear";
pub const LIST_USAGE: &str = "list: Lists all persons, optionally only one category and/or group.\n\
Parameters: [c/CATEGORY] [g/GROUP_NUMBER]\n\
Example: list c/PARTICIPANT g/2";
pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of the specified \
keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub(crate) fn add(model: &mut Model, person: &Person) -> Result<CommandResult, CommandError> {
    if model.has_person(person) {
        return Err(CommandError::DuplicatePerson);
    }
    model.add_person(person.clone())?;
    model.record(ReversibleCommand::AddPerson {
        person: person.clone(),
    });
    Ok(CommandResult::new(messages::person_added(person)))
}

pub(crate) fn edit(
    model: &mut Model,
    index: Index,
    descriptor: &EditPersonDescriptor,
) -> Result<CommandResult, CommandError> {
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::NotEdited);
    }
    let original = person_at(model, index)?;
    let edited = descriptor.apply(&original);
    model.set_person(&original, edited.clone())?;
    model.update_person_filter(PersonFilter::All);
    let feedback = messages::person_edited(&edited);
    model.record(ReversibleCommand::EditPerson { original, edited });
    Ok(CommandResult::new(feedback))
}

pub(crate) fn delete(model: &mut Model, index: Index) -> Result<CommandResult, CommandError> {
    let person = person_at(model, index)?;
    let position = model.delete_person(&person)?;
    let feedback = messages::person_deleted(&person);
    model.record(ReversibleCommand::DeletePerson { person, position });
    Ok(CommandResult::new(feedback))
}

pub(crate) fn comment(
    model: &mut Model,
    index: Index,
    comment: &Comment,
) -> Result<CommandResult, CommandError> {
    let original = person_at(model, index)?;
    let edited = original.with_comment(comment.clone());
    model.set_person(&original, edited.clone())?;
    model.update_person_filter(PersonFilter::All);
    let feedback = messages::person_commented(&edited);
    model.record(ReversibleCommand::CommentPerson { original, edited });
    Ok(CommandResult::new(feedback))
}

pub(crate) fn group(
    model: &mut Model,
    index: Index,
    group: Option<Group>,
) -> Result<CommandResult, CommandError> {
    let original = person_at(model, index)?;
    let edited = model.group_person(&original, group)?;
    model.update_person_filter(PersonFilter::All);
    let feedback = messages::person_grouped(&edited);
    model.record(ReversibleCommand::GroupPerson { original, edited });
    Ok(CommandResult::new(feedback))
}

pub(crate) fn clear(model: &mut Model) -> Result<CommandResult, CommandError> {
    let address_book = model.address_book().clone();
    let event_book = model.event_book().clone();
    model.set_address_book(AddressBook::new());
    model.set_event_book(EventBook::new());
    model.show_all();
    model.record(ReversibleCommand::Clear {
        address_book,
        event_book,
    });
    Ok(CommandResult::new(messages::MESSAGE_CLEARED))
}

pub(crate) fn list(model: &mut Model, filter: &PersonFilter) -> Result<CommandResult, CommandError> {
    model.update_person_filter(filter.clone());
    if *filter == PersonFilter::All {
        return Ok(CommandResult::new(messages::MESSAGE_LISTED_ALL_PERSONS));
    }
    Ok(CommandResult::new(messages::persons_listed(
        model.filtered_persons().len(),
    )))
}

pub(crate) fn find(model: &mut Model, keywords: &[String]) -> Result<CommandResult, CommandError> {
    model.update_person_filter(PersonFilter::NameKeywords(keywords.to_vec()));
    Ok(CommandResult::new(messages::persons_listed(
        model.filtered_persons().len(),
    )))
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, CommandError, EditPersonDescriptor, Index};
    use crate::model::fields::{Category, Comment, Email, Group, Name, Phone};
    use crate::model::filter::PersonFilter;
    use crate::model::manager::Model;
    use crate::model::person::{Person, PersonError};

    fn person(name: &str, phone: &str, category: Category) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse("someone@example.com").unwrap(),
            category,
        )
    }

    fn model_with(people: &[Person]) -> Model {
        let mut model = Model::default();
        for p in people {
            model.add_person(p.clone()).unwrap();
        }
        model
    }

    fn index(value: usize) -> Index {
        Index::from_one_based(value).unwrap()
    }

    #[test]
    fn add_records_history_and_rejects_duplicates() {
        let mut model = Model::default();
        let alice = person("Alice", "111", Category::Participant);
        Command::Add(alice.clone()).execute(&mut model).unwrap();
        assert!(model.can_undo());

        let err = Command::Add(alice).execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::DuplicatePerson);
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn edit_requires_a_field_and_a_valid_index() {
        let mut model = model_with(&[person("Alice", "111", Category::Participant)]);
        let empty = Command::Edit {
            index: index(1),
            descriptor: EditPersonDescriptor::default(),
        };
        assert_eq!(empty.execute(&mut model).unwrap_err(), CommandError::NotEdited);

        let out_of_range = Command::Edit {
            index: index(2),
            descriptor: EditPersonDescriptor {
                phone: Some(Phone::parse("999").unwrap()),
                ..EditPersonDescriptor::default()
            },
        };
        assert_eq!(
            out_of_range.execute(&mut model).unwrap_err(),
            CommandError::InvalidPersonIndex
        );
        assert!(!model.can_undo());
    }

    #[test]
    fn edit_into_existing_identity_is_rejected() {
        let mut model = model_with(&[
            person("Alice", "111", Category::Participant),
            person("Bob", "222", Category::Participant),
        ]);
        let command = Command::Edit {
            index: index(2),
            descriptor: EditPersonDescriptor {
                name: Some(Name::parse("Alice").unwrap()),
                phone: Some(Phone::parse("111").unwrap()),
                ..EditPersonDescriptor::default()
            },
        };
        assert_eq!(command.execute(&mut model).unwrap_err(), CommandError::DuplicatePerson);
    }

    #[test]
    fn edit_to_sponsor_drops_group() {
        let alice = person("Alice", "111", Category::Participant)
            .with_group(Some(Group::new(2).unwrap()))
            .unwrap();
        let mut model = model_with(&[alice]);
        Command::Edit {
            index: index(1),
            descriptor: EditPersonDescriptor {
                category: Some(Category::Sponsor),
                ..EditPersonDescriptor::default()
            },
        }
        .execute(&mut model)
        .unwrap();
        let edited = &model.address_book().items()[0];
        assert_eq!(edited.category(), Category::Sponsor);
        assert_eq!(edited.group(), None);
    }

    #[test]
    fn indexes_resolve_against_filtered_view() {
        let mut model = model_with(&[
            person("Alice", "111", Category::Participant),
            person("Bob", "222", Category::Participant),
        ]);
        Command::Find(vec!["bob".to_string()]).execute(&mut model).unwrap();
        let result = Command::Delete(index(1)).execute(&mut model).unwrap();
        assert!(result.feedback.contains("Bob"));
        assert_eq!(model.address_book().items()[0].name().as_str(), "Alice");
    }

    #[test]
    fn comment_replaces_and_clears() {
        let mut model = model_with(&[person("Alice", "111", Category::Staff)]);
        Command::Comment {
            index: index(1),
            comment: Comment::new("on call"),
        }
        .execute(&mut model)
        .unwrap();
        assert_eq!(model.address_book().items()[0].comment().as_str(), "on call");

        Command::Comment {
            index: index(1),
            comment: Comment::default(),
        }
        .execute(&mut model)
        .unwrap();
        assert!(model.address_book().items()[0].comment().is_empty());
        assert_eq!(model.history().len(), 2);
    }

    #[test]
    fn group_rejects_sponsors() {
        let mut model = model_with(&[person("Acme", "333", Category::Sponsor)]);
        let err = Command::Group {
            index: index(1),
            group: Some(Group::new(1).unwrap()),
        }
        .execute(&mut model)
        .unwrap_err();
        assert_eq!(err, CommandError::Person(PersonError::NotGroupable(Category::Sponsor)));
        assert!(!model.can_undo());
    }

    #[test]
    fn list_filters_by_category_and_group() {
        let grouped = person("Alice", "111", Category::Participant)
            .with_group(Some(Group::new(1).unwrap()))
            .unwrap();
        let mut model = model_with(&[
            grouped,
            person("Bob", "222", Category::Participant),
            person("Acme", "333", Category::Sponsor),
        ]);
        let result = Command::List(PersonFilter::Category(Category::Participant))
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback, "2 persons listed!");

        Command::List(PersonFilter::Group(Group::new(1).unwrap()))
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.filtered_persons().len(), 1);

        let all = Command::List(PersonFilter::All).execute(&mut model).unwrap();
        assert_eq!(all.feedback, "Listed all persons");
        assert_eq!(model.filtered_persons().len(), 3);
    }
}
