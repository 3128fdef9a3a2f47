use serde::{Deserialize, Serialize};

use super::lookup;
use crate::errors::{OrgChartError, Result};
use crate::model::{Member, MemberId};
use crate::rules::validation;
use crate::traversal::PreOrder;

/// The member tree: one root owning every other member
///
/// A `Chart` can only be built from a root that passes validation, and the
/// only mutation path is [`crate::ops::reparent`], so every `Chart` value
/// satisfies the tree invariants. Not thread-safe by itself; callers sharing
/// one across threads wrap it (or the owning manager) in a lock.
///
/// Serializes as the bare root member. Deserializing runs the same validation
/// as [`Chart::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Member", into = "Member")]
pub struct Chart {
    root: Member,
}

impl Chart {
    /// Wrap an externally built root
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMemberId` if any identifier appears more than once.
    pub fn new(root: Member) -> Result<Self> {
        validation::validate_root(&root)?;
        Ok(Self { root })
    }

    /// Read-only view of the whole tree
    pub fn root(&self) -> &Member {
        &self.root
    }

    pub fn root_id(&self) -> MemberId {
        self.root.id
    }

    pub fn into_root(self) -> Member {
        self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Member {
        &mut self.root
    }

    pub fn find_member(&self, id: MemberId) -> Option<&Member> {
        lookup::find_member(&self.root, id)
    }

    /// Get a member by id
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the id is not in the chart.
    pub fn get_member(&self, id: MemberId) -> Result<&Member> {
        self.find_member(id)
            .ok_or(OrgChartError::MemberNotFound { member_id: id })
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.find_member(id).is_some()
    }

    /// Current supervisor of a member, `None` for the root
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the id is not in the chart.
    pub fn supervisor_of(&self, id: MemberId) -> Result<Option<&Member>> {
        if id == self.root.id {
            return Ok(None);
        }
        lookup::find_supervisor(&self.root, id)
            .map(Some)
            .ok_or(OrgChartError::MemberNotFound { member_id: id })
    }

    /// Number of members including the root
    pub fn member_count(&self) -> usize {
        PreOrder::new(&self.root).count()
    }

    /// Every member id in pre-order
    pub fn member_ids(&self) -> Vec<MemberId> {
        PreOrder::new(&self.root).map(|(_, m)| m.id).collect()
    }
}

impl TryFrom<Member> for Chart {
    type Error = OrgChartError;

    fn try_from(root: Member) -> Result<Self> {
        Chart::new(root)
    }
}

impl From<Chart> for Member {
    fn from(chart: Chart) -> Self {
        chart.root
    }
}
