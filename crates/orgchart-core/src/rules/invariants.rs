use std::collections::{BTreeSet, HashMap, HashSet};

use crate::model::{Member, MemberId};
use crate::traversal::PreOrder;

/// Find identifiers that occur more than once in the subtree
///
/// Returned in ascending order, each id once.
pub fn find_duplicate_ids(root: &Member) -> Vec<MemberId> {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();

    for (_, member) in PreOrder::new(root) {
        if !seen.insert(member.id) {
            duplicates.insert(member.id);
        }
    }

    duplicates.into_iter().collect()
}

/// Count, for every member, how many subordinate lists hold it
///
/// In a valid chart every non-root member maps to exactly 1 and the root is
/// absent.
pub fn supervisor_counts(root: &Member) -> HashMap<MemberId, usize> {
    let mut counts = HashMap::new();

    for (_, member) in PreOrder::new(root) {
        for sub in &member.subordinates {
            *counts.entry(sub.id).or_insert(0) += 1;
        }
    }

    counts
}
