use orgchart_core::{HierarchyManager, Member, MemberId};

/// The reference chart: 1 "Shadab Ali" -> [2 -> [5], 3, 4]
#[allow(dead_code)]
pub fn sample_root() -> Member {
    Member::new(1, "Shadab Ali")
        .with_subordinate(Member::new(2, "Member 2").with_subordinate(Member::new(5, "Member 5")))
        .with_subordinate(Member::new(3, "Member 3"))
        .with_subordinate(Member::new(4, "Member 4"))
}

#[allow(dead_code)]
pub fn sample_manager() -> HierarchyManager {
    HierarchyManager::from_root(sample_root()).unwrap()
}

/// Build a chart of `size` members with ids `1..=size`
///
/// `parents[i]` picks the supervisor of member `i + 2` among the members
/// already placed (taken modulo their count), so any input yields a valid tree.
#[allow(dead_code)]
pub fn build_root(size: usize, parents: &[usize]) -> Member {
    let size = size.max(1);
    let mut parent_of: Vec<Option<usize>> = vec![None; size];
    for id in 2..=size {
        let choice = parents.get(id - 2).copied().unwrap_or(0);
        parent_of[id - 1] = Some(choice % (id - 1));
    }

    // Assemble bottom-up: children have larger indices than their parents.
    let mut nodes: Vec<Option<Member>> = (1..=size)
        .map(|id| Some(Member::new(id as u64, format!("Member {}", id))))
        .collect();
    for index in (1..size).rev() {
        let child = nodes[index].take().unwrap();
        let parent = parent_of[index].unwrap();
        let parent_node = nodes[parent].as_mut().unwrap();
        parent_node.subordinates.insert(0, child);
    }
    nodes[0].take().unwrap()
}

/// Supervisor id of a member, panicking on the root
#[allow(dead_code)]
pub fn supervisor_id(manager: &HierarchyManager, id: u64) -> MemberId {
    manager
        .chart()
        .supervisor_of(MemberId(id))
        .unwrap()
        .map(|m| m.id)
        .unwrap()
}

#[allow(dead_code)]
pub fn subordinate_ids(manager: &HierarchyManager, id: u64) -> Vec<MemberId> {
    manager
        .chart()
        .get_member(MemberId(id))
        .unwrap()
        .subordinate_ids()
}
