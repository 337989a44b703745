//! Event-facing command execution.

use crate::command::reversible::ReversibleCommand;
use crate::command::{event_at, messages, CommandError, CommandResult, EditEventDescriptor, Index};
use crate::model::event::Event;
use crate::model::filter::EventFilter;
use crate::model::manager::Model;

pub const ADD_EVENT_WORD: &str = "addevent";
pub const EDIT_EVENT_WORD: &str = "editevent";
pub const DELETE_EVENT_WORD: &str = "deleteevent";
pub const LIST_EVENTS_WORD: &str = "listevents";
pub const FIND_EVENT_WORD: &str = "findevent";

pub const ADD_EVENT_USAGE: &str = "addevent: Adds an event to the event book.\n\
Parameters: n/NAME c/CATEGORY d/DATE (YYYY-MM-DD)\n\
Example: addevent n/Opening Ceremony c/Talk d/2024-03-01";
pub const EDIT_EVENT_USAGE: &str = "editevent: Edits the event identified by the index number \
used in the displayed event list.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [c/CATEGORY] [d/DATE]\n\
Example: editevent 1 d/2024-03-02";
pub const DELETE_EVENT_USAGE: &str = "deleteevent: Deletes the event identified by the index \
number used in the displayed event list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: deleteevent 1";
pub const LIST_EVENTS_USAGE: &str = "listevents: Lists all events.\nExample: listevents";
pub const FIND_EVENT_USAGE: &str = "findevent: Finds all events whose names contain any of the \
specified keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: findevent workshop";

pub(crate) fn add_event(model: &mut Model, event: &Event) -> Result<CommandResult, CommandError> {
    if model.has_event(event) {
        return Err(CommandError::DuplicateEvent);
    }
    model.add_event(event.clone())?;
    model.record(ReversibleCommand::AddEvent {
        event: event.clone(),
    });
    Ok(CommandResult::new(messages::event_added(event)))
}

pub(crate) fn edit_event(
    model: &mut Model,
    index: Index,
    descriptor: &EditEventDescriptor,
) -> Result<CommandResult, CommandError> {
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::NotEdited);
    }
    let original = event_at(model, index)?;
    let edited = descriptor.apply(&original);
    model.set_event(&original, edited.clone())?;
    model.update_event_filter(EventFilter::All);
    let feedback = messages::event_edited(&edited);
    model.record(ReversibleCommand::EditEvent { original, edited });
    Ok(CommandResult::new(feedback))
}

pub(crate) fn delete_event(model: &mut Model, index: Index) -> Result<CommandResult, CommandError> {
    let event = event_at(model, index)?;
    let position = model.delete_event(&event)?;
    let feedback = messages::event_deleted(&event);
    model.record(ReversibleCommand::DeleteEvent { event, position });
    Ok(CommandResult::new(feedback))
}

pub(crate) fn list_events(model: &mut Model) -> Result<CommandResult, CommandError> {
    model.update_event_filter(EventFilter::All);
    Ok(CommandResult::new(messages::MESSAGE_LISTED_ALL_EVENTS))
}

pub(crate) fn find_event(
    model: &mut Model,
    keywords: &[String],
) -> Result<CommandResult, CommandError> {
    model.update_event_filter(EventFilter::NameKeywords(keywords.to_vec()));
    Ok(CommandResult::new(messages::events_listed(
        model.filtered_events().len(),
    )))
}
