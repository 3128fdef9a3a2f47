//! Commands accepted by [`crate::apply::apply`]
//!
//! Commands serialize with an `op` tag so a script of them can be stored as
//! JSON or YAML and replayed against a manager:
//!
//! ```json
//! [
//!   { "op": "move", "member_id": 5, "supervisor_id": 3 },
//!   { "op": "undo" },
//!   { "op": "redo" }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::model::MemberId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Move a member under a supervisor; a missing `supervisor_id` means the root
    Move {
        member_id: MemberId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        supervisor_id: Option<MemberId>,
    },

    /// Reverse the most recent applied move
    Undo,

    /// Reapply the most recently undone move
    Redo,
}

impl Command {
    /// Operation name, matching the serde tag
    pub fn name(&self) -> &'static str {
        match self {
            Command::Move { .. } => "move",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }
}
