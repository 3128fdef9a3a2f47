use serde::{Deserialize, Serialize};

use crate::traversal::PreOrder;

/// Stable identifier of a member, unique across one chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl From<u64> for MemberId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member - one node of the org chart
///
/// A member owns its direct subordinates. Who supervises a member is not
/// stored on the member: it is whichever node's `subordinates` holds it, and
/// is found by searching the tree (see [`crate::ops::lookup::find_supervisor`]).
///
/// `uniqueId` is accepted as an alias of `id` so charts exported by older
/// tooling load unchanged.
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack, so
/// arbitrarily deep charts can be copied, compared and freed.
#[derive(Debug, Serialize, Deserialize)]
pub struct Member {
    #[serde(alias = "uniqueId")]
    pub id: MemberId,

    /// Display name, never interpreted by the engine
    pub name: String,

    /// Direct reports, in chart order
    #[serde(default)]
    pub subordinates: Vec<Member>,
}

impl Member {
    /// Create a member with no subordinates
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subordinates: Vec::new(),
        }
    }

    /// Builder-style append of a direct report
    pub fn with_subordinate(mut self, subordinate: Member) -> Self {
        self.subordinates.push(subordinate);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.subordinates.is_empty()
    }

    /// Ids of the direct reports, in order
    pub fn subordinate_ids(&self) -> Vec<MemberId> {
        self.subordinates.iter().map(|m| m.id).collect()
    }

    /// Position of a direct report in `subordinates`
    pub fn position_of(&self, id: MemberId) -> Option<usize> {
        self.subordinates.iter().position(|m| m.id == id)
    }

    /// Insert a direct report at `index`, clamped to the end of the list
    pub(crate) fn insert_subordinate(&mut self, index: usize, subordinate: Member) {
        let index = index.min(self.subordinates.len());
        self.subordinates.insert(index, subordinate);
    }
}

impl Clone for Member {
    fn clone(&self) -> Self {
        // Rebuild from the pre-order sequence. `open` holds the chain of
        // members whose subordinate lists are still being filled.
        let mut open: Vec<Member> = Vec::new();
        for (depth, member) in PreOrder::new(self) {
            close_to_depth(&mut open, depth);
            open.push(Member::new(member.id, member.name.clone()));
        }
        close_to_depth(&mut open, 1);
        open.pop().unwrap_or_else(|| Member::new(self.id, self.name.clone()))
    }
}

/// Attach finished members to their supervisors until `open.len() == depth`
fn close_to_depth(open: &mut Vec<Member>, depth: usize) {
    while open.len() > depth {
        let Some(done) = open.pop() else { break };
        match open.last_mut() {
            Some(parent) => parent.subordinates.push(done),
            None => {
                open.push(done);
                break;
            }
        }
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        // Pre-order with depths determines the shape of a tree.
        PreOrder::new(self)
            .map(|(depth, m)| (depth, m.id, &m.name))
            .eq(PreOrder::new(other).map(|(depth, m)| (depth, m.id, &m.name)))
    }
}

impl Eq for Member {}

impl Drop for Member {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.subordinates);
        while let Some(mut member) = pending.pop() {
            pending.append(&mut member.subordinates);
        }
    }
}
