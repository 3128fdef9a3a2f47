//! Linear move history
//!
//! One append-only log of [`MoveRecord`]s plus a cursor. Records before the
//! cursor are applied (undo-eligible, newest last); records at or after it
//! were undone and are redo-eligible (next redo first). Recording a new move
//! truncates everything after the cursor, which is how a fresh move discards
//! pending redos.
//!
//! The history only does bookkeeping. Replaying records against the chart is
//! the manager's job, and the manager moves the cursor only after the replay
//! succeeds.

use crate::model::MoveRecord;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<MoveRecord>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly applied move
    ///
    /// Returns how many redo entries were discarded.
    pub fn record(&mut self, record: MoveRecord) -> usize {
        let discarded = self.entries.len() - self.cursor;
        self.entries.truncate(self.cursor);
        self.entries.push(record);
        self.cursor = self.entries.len();
        discarded
    }

    /// The move `undo` would reverse
    pub fn next_undo(&self) -> Option<&MoveRecord> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    /// The move `redo` would reapply
    pub fn next_redo(&self) -> Option<&MoveRecord> {
        self.entries.get(self.cursor)
    }

    /// Mark the newest applied move as undone
    pub(crate) fn step_back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Mark the next undone move as applied again
    pub(crate) fn step_forward(&mut self) {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Applied moves, oldest first
    pub fn applied(&self) -> &[MoveRecord] {
        &self.entries[..self.cursor]
    }

    /// Undone moves, next redo first
    pub fn undone(&self) -> &[MoveRecord] {
        &self.entries[self.cursor..]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
