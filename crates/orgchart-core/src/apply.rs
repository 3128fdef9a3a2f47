//! Command boundary over [`HierarchyManager`]
//!
//! `apply()` maps each [`Command`] onto the matching manager operation and
//! reports what happened. It inherits the manager's atomicity: a command
//! either takes full effect or returns an error with chart and history
//! unchanged.

use serde::Serialize;

use crate::commands::Command;
use crate::errors::Result;
use crate::manager::HierarchyManager;
use crate::model::MoveRecord;

/// Result of applying one command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Moved { record: MoveRecord },
    Undone { record: MoveRecord },
    Redone { record: MoveRecord },
    NothingToUndo,
    NothingToRedo,
}

impl CommandOutcome {
    /// The record the command acted on, if it changed anything
    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            CommandOutcome::Moved { record }
            | CommandOutcome::Undone { record }
            | CommandOutcome::Redone { record } => Some(record),
            CommandOutcome::NothingToUndo | CommandOutcome::NothingToRedo => None,
        }
    }
}

impl std::fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutcome::Moved { record } => write!(
                f,
                "moved {} from {} to {}",
                record.member_id, record.from, record.to
            ),
            CommandOutcome::Undone { record } => write!(
                f,
                "undid move of {}: back under {}",
                record.member_id, record.from
            ),
            CommandOutcome::Redone { record } => write!(
                f,
                "redid move of {}: under {} again",
                record.member_id, record.to
            ),
            CommandOutcome::NothingToUndo => write!(f, "nothing to undo"),
            CommandOutcome::NothingToRedo => write!(f, "nothing to redo"),
        }
    }
}

/// Apply a single command to the manager
///
/// # Errors
///
/// Propagates the manager's errors (`MemberNotFound`, `SupervisorNotFound`,
/// `CycleDetected`). Undo and redo with nothing to do are not errors.
///
/// # Example
///
/// ```
/// use orgchart_core::{apply::{apply, CommandOutcome}, Command, HierarchyManager, Member, MemberId};
///
/// let root = Member::new(1, "root")
///     .with_subordinate(Member::new(2, "a"))
///     .with_subordinate(Member::new(3, "b"));
/// let mut manager = HierarchyManager::from_root(root).unwrap();
///
/// let cmd = Command::Move { member_id: MemberId(3), supervisor_id: Some(MemberId(2)) };
/// assert!(matches!(apply(&mut manager, cmd).unwrap(), CommandOutcome::Moved { .. }));
/// assert_eq!(apply(&mut manager, Command::Redo).unwrap(), CommandOutcome::NothingToRedo);
/// ```
pub fn apply(manager: &mut HierarchyManager, cmd: Command) -> Result<CommandOutcome> {
    match cmd {
        Command::Move {
            member_id,
            supervisor_id,
        } => manager
            .move_member(member_id, supervisor_id)
            .map(|record| CommandOutcome::Moved { record }),

        Command::Undo => Ok(match manager.undo()? {
            Some(record) => CommandOutcome::Undone { record },
            None => CommandOutcome::NothingToUndo,
        }),

        Command::Redo => Ok(match manager.redo()? {
            Some(record) => CommandOutcome::Redone { record },
            None => CommandOutcome::NothingToRedo,
        }),
    }
}

/// Apply commands in order, stopping at the first failure
///
/// Commands before the failing one stay applied (and undoable).
///
/// # Errors
///
/// Returns the index of the failing command together with its error.
pub fn apply_all<I>(
    manager: &mut HierarchyManager,
    commands: I,
) -> std::result::Result<Vec<CommandOutcome>, (usize, crate::errors::OrgChartError)>
where
    I: IntoIterator<Item = Command>,
{
    let mut outcomes = Vec::new();
    for (index, cmd) in commands.into_iter().enumerate() {
        let outcome = apply(manager, cmd).map_err(|e| (index, e))?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
