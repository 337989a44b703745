//! Cursor-based undo/redo history.
//!
//! # Invariants
//! - `cursor <= entries.len()`; entries before the cursor are applied,
//!   entries at or after it have been undone.
//! - Pushing a new entry discards every undone entry.
//! - The cursor only moves through `mark_undone`/`mark_redone`, so a failed
//!   revert leaves history untouched.

use crate::command::reversible::ReversibleCommand;
use crate::command::CommandError;

#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<ReversibleCommand>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an executed command, dropping the redo tail.
    pub fn push(&mut self, command: ReversibleCommand) {
        self.entries.truncate(self.cursor);
        self.entries.push(command);
        self.cursor = self.entries.len();
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Returns the command the next undo must revert.
    pub fn peek_undo(&self) -> Result<&ReversibleCommand, CommandError> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .ok_or(CommandError::NothingToUndo)
    }

    /// Returns the command the next redo must re-apply.
    pub fn peek_redo(&self) -> Result<&ReversibleCommand, CommandError> {
        self.entries
            .get(self.cursor)
            .ok_or(CommandError::NothingToRedo)
    }

    pub fn mark_undone(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn mark_redone(&mut self) {
        self.cursor = (self.cursor + 1).min(self.entries.len());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries currently applied.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
