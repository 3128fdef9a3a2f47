//! Hierarchy manager: the chart plus its move history
//!
//! ## Logging Ownership
//!
//! The manager owns lifecycle logging for `move`, `undo` and `redo`:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (lookup, reparent, history) use only `tracing::debug!()`.

use std::time::Instant;

use crate::errors::Result;
use crate::history::History;
use crate::model::{Member, MemberId, MoveRecord};
use crate::ops::{reparent, Chart, Placement};
use crate::{log_op_end, log_op_error, log_op_start};

/// Owns one chart and the history of moves applied to it
///
/// Every mutation goes through `&mut self`, so a single manager is never
/// driven by two callers at once. Share it across threads behind a `Mutex`.
///
/// # Example
///
/// ```
/// use orgchart_core::{HierarchyManager, Member, MemberId};
///
/// let root = Member::new(1, "Shadab Ali")
///     .with_subordinate(Member::new(2, "2").with_subordinate(Member::new(5, "5")))
///     .with_subordinate(Member::new(3, "3"));
/// let mut manager = HierarchyManager::from_root(root).unwrap();
///
/// manager.move_member(MemberId(5), Some(MemberId(3))).unwrap();
/// assert_eq!(manager.chart().supervisor_of(MemberId(5)).unwrap().unwrap().id, MemberId(3));
///
/// manager.undo().unwrap();
/// assert_eq!(manager.chart().supervisor_of(MemberId(5)).unwrap().unwrap().id, MemberId(2));
/// ```
#[derive(Debug, Clone)]
pub struct HierarchyManager {
    chart: Chart,
    history: History,
}

impl HierarchyManager {
    pub fn new(chart: Chart) -> Self {
        Self {
            chart,
            history: History::new(),
        }
    }

    /// Validate a root and start with an empty history
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMemberId` if the tree reuses an identifier.
    pub fn from_root(root: Member) -> Result<Self> {
        Ok(Self::new(Chart::new(root)?))
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn root(&self) -> &Member {
        self.chart.root()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn into_chart(self) -> Chart {
        self.chart
    }

    /// Move a member (and its subtree) under a new supervisor
    ///
    /// `supervisor_id = None` moves the member directly under the root. A
    /// successful move is recorded and clears any pending redo.
    ///
    /// # Errors
    ///
    /// * `MemberNotFound` - If the member is not in the chart
    /// * `SupervisorNotFound` - If the target supervisor is not in the chart
    /// * `CycleDetected` - If the target is the member or one of its
    ///   subordinates, or the member is the root
    ///
    /// On error neither the chart nor the history changes.
    pub fn move_member(
        &mut self,
        member_id: MemberId,
        supervisor_id: Option<MemberId>,
    ) -> Result<MoveRecord> {
        log_op_start!(
            "move",
            member_id = member_id.0,
            supervisor_id = ?supervisor_id.map(|id| id.0)
        );
        let start = Instant::now();

        let record = self.move_member_impl(member_id, supervisor_id).map_err(|e| {
            log_op_error!(
                "move",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                member_id = member_id.0
            );
            e
        })?;

        log_op_end!(
            "move",
            duration_ms = start.elapsed().as_millis() as u64,
            member_id = member_id.0,
            supervisor_id = record.to.0,
            undo_depth = self.history.undo_depth()
        );

        Ok(record)
    }

    fn move_member_impl(
        &mut self,
        member_id: MemberId,
        supervisor_id: Option<MemberId>,
    ) -> Result<MoveRecord> {
        let outcome = reparent(&mut self.chart, member_id, supervisor_id, Placement::Append)?;

        let record = MoveRecord::new(member_id, outcome.from, outcome.from_index, outcome.to);
        let discarded = self.history.record(record.clone());
        if discarded > 0 {
            tracing::debug!(discarded, "new move discarded pending redo entries");
        }

        Ok(record)
    }

    /// Reverse the most recent applied move
    ///
    /// The member goes back under its previous supervisor at its previous
    /// position. Returns `Ok(None)` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Only fails if the recorded supervisor has disappeared from the chart,
    /// which cannot happen through this API. History is left as it was.
    pub fn undo(&mut self) -> Result<Option<MoveRecord>> {
        log_op_start!("undo", undo_depth = self.history.undo_depth());
        let start = Instant::now();

        let undone = self.undo_impl().map_err(|e| {
            log_op_error!(
                "undo",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "undo",
            duration_ms = start.elapsed().as_millis() as u64,
            member_id = ?undone.as_ref().map(|r| r.member_id.0),
            undo_depth = self.history.undo_depth(),
            redo_depth = self.history.redo_depth()
        );

        Ok(undone)
    }

    fn undo_impl(&mut self) -> Result<Option<MoveRecord>> {
        let Some(record) = self.history.next_undo().cloned() else {
            tracing::debug!("nothing to undo");
            return Ok(None);
        };

        reparent(
            &mut self.chart,
            record.member_id,
            Some(record.from),
            Placement::At(record.from_index),
        )?;
        self.history.step_back();

        Ok(Some(record))
    }

    /// Reapply the most recently undone move
    ///
    /// Returns `Ok(None)` when there is nothing to redo, including after a new
    /// move has discarded the redo entries.
    ///
    /// # Errors
    ///
    /// Only fails if the recorded supervisor has disappeared from the chart,
    /// which cannot happen through this API. History is left as it was.
    pub fn redo(&mut self) -> Result<Option<MoveRecord>> {
        log_op_start!("redo", redo_depth = self.history.redo_depth());
        let start = Instant::now();

        let redone = self.redo_impl().map_err(|e| {
            log_op_error!(
                "redo",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "redo",
            duration_ms = start.elapsed().as_millis() as u64,
            member_id = ?redone.as_ref().map(|r| r.member_id.0),
            undo_depth = self.history.undo_depth(),
            redo_depth = self.history.redo_depth()
        );

        Ok(redone)
    }

    fn redo_impl(&mut self) -> Result<Option<MoveRecord>> {
        let Some(record) = self.history.next_redo().cloned() else {
            tracing::debug!("nothing to redo");
            return Ok(None);
        };

        reparent(
            &mut self.chart,
            record.member_id,
            Some(record.to),
            Placement::Append,
        )?;
        self.history.step_forward();

        Ok(Some(record))
    }
}
