use super::{lookup, Chart};
use crate::errors::{OrgChartError, Result};
use crate::model::MemberId;

/// Where a relocated member lands in its new supervisor's subordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// After every existing subordinate
    Append,
    /// At the given index, clamped to the end of the list
    At(usize),
}

/// What a successful reparent did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReparentOutcome {
    pub member_id: MemberId,
    /// Supervisor before the move
    pub from: MemberId,
    /// Index within `from`'s subordinates before the move
    pub from_index: usize,
    /// Supervisor after the move
    pub to: MemberId,
    /// Index within `to`'s subordinates after the move
    pub to_index: usize,
}

impl ReparentOutcome {
    pub fn changed_supervisor(&self) -> bool {
        self.from != self.to
    }
}

/// Move a member (with its whole subtree) under a new supervisor
///
/// `new_supervisor = None` moves the member to the top level, directly under
/// the root. Every check runs before the tree is touched, so on `Err` the
/// chart is exactly as it was.
///
/// Moving a member to the supervisor it already has is not special-cased: the
/// member is detached and reinserted, so `Placement::Append` moves it to the
/// end of that supervisor's subordinates.
///
/// # Arguments
/// * `chart` - Chart to mutate
/// * `member_id` - Member to relocate
/// * `new_supervisor` - Target supervisor (None = root)
/// * `placement` - Position among the target's subordinates
///
/// # Errors
/// * `MemberNotFound` - If the member is not in the chart
/// * `SupervisorNotFound` - If the target supervisor is not in the chart
/// * `CycleDetected` - If the target is the member itself or one of its
///   subordinates (this includes any attempt to move the root)
pub fn reparent(
    chart: &mut Chart,
    member_id: MemberId,
    new_supervisor: Option<MemberId>,
    placement: Placement,
) -> Result<ReparentOutcome> {
    let root = chart.root();

    let member_path =
        lookup::find_path(root, member_id).ok_or(OrgChartError::MemberNotFound { member_id })?;

    let target_id = new_supervisor.unwrap_or(root.id);
    let mut target_path = lookup::find_path(root, target_id).ok_or(
        OrgChartError::SupervisorNotFound {
            supervisor_id: target_id,
        },
    )?;

    // The target lies inside the member's own subtree. The root's path is
    // empty and prefixes everything, so this also keeps the root in place.
    if target_path.starts_with(&member_path) {
        return Err(OrgChartError::CycleDetected {
            member_id,
            supervisor_id: target_id,
        });
    }

    let (from_index, parent_path) = match member_path.split_last() {
        Some((index, parent_path)) => (*index, parent_path.to_vec()),
        None => {
            return Err(OrgChartError::Internal {
                message: format!("member {} has no supervisor path", member_id),
            })
        }
    };
    let from = lookup::member_at(root, &parent_path)
        .map(|parent| parent.id)
        .ok_or_else(|| stale_path(member_id))?;

    // Removing the member shifts its later siblings left by one; correct the
    // target path if it runs through one of them.
    let depth = parent_path.len();
    if target_path.len() > depth
        && target_path.starts_with(&parent_path)
        && target_path[depth] > from_index
    {
        target_path[depth] -= 1;
    }

    let root = chart.root_mut();

    let parent = lookup::member_at_mut(root, &parent_path).ok_or_else(|| stale_path(member_id))?;
    if from_index >= parent.subordinates.len() {
        return Err(stale_path(member_id));
    }
    let member = parent.subordinates.remove(from_index);

    if lookup::member_at(root, &target_path).is_none() {
        // Unreachable for a valid chart; put the member back before failing.
        if let Some(parent) = lookup::member_at_mut(root, &parent_path) {
            parent.insert_subordinate(from_index, member);
        }
        return Err(stale_path(member_id));
    }
    let target = lookup::member_at_mut(root, &target_path).ok_or_else(|| stale_path(member_id))?;

    let to_index = match placement {
        Placement::Append => target.subordinates.len(),
        Placement::At(index) => index.min(target.subordinates.len()),
    };
    target.insert_subordinate(to_index, member);

    tracing::debug!(
        member_id = member_id.0,
        from = from.0,
        to = target_id.0,
        to_index,
        "reparented member"
    );

    Ok(ReparentOutcome {
        member_id,
        from,
        from_index,
        to: target_id,
        to_index,
    })
}

fn stale_path(member_id: MemberId) -> OrgChartError {
    OrgChartError::Internal {
        message: format!("tree path for member {} went stale during reparent", member_id),
    }
}
