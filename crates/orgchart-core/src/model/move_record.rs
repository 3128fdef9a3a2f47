use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::member::MemberId;

/// One relocation, as kept in the move history
///
/// A record holds both directions of the move: undo puts `member_id` back
/// under `from` at `from_index`; redo appends it under `to` again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub member_id: MemberId,

    /// Supervisor immediately before the move
    pub from: MemberId,

    /// Position within `from`'s subordinates immediately before the move
    pub from_index: usize,

    /// Supervisor the member was moved to
    pub to: MemberId,

    pub recorded_at: DateTime<Utc>,
}

impl MoveRecord {
    pub fn new(member_id: MemberId, from: MemberId, from_index: usize, to: MemberId) -> Self {
        Self {
            member_id,
            from,
            from_index,
            to,
            recorded_at: Utc::now(),
        }
    }

    /// True when the move left the member under the same supervisor
    pub fn is_same_supervisor(&self) -> bool {
        self.from == self.to
    }
}
