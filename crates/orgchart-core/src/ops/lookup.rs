//! Tree search over a member subtree
//!
//! Every search here is pre-order, left to right over `subordinates`, driven
//! by an explicit stack so deep charts cannot exhaust the call stack. When an
//! id occurs more than once (a malformed chart), the first pre-order match wins.

use crate::model::{Member, MemberId};
use crate::traversal::PreOrder;

/// Find the member with the given id in the subtree rooted at `root`
pub fn find_member(root: &Member, id: MemberId) -> Option<&Member> {
    PreOrder::new(root)
        .map(|(_, member)| member)
        .find(|member| member.id == id)
}

/// Child-index path from `root` to the member with the given id
///
/// The root itself has the empty path. `[1, 0]` is the first subordinate of
/// the root's second subordinate.
pub fn find_path(root: &Member, id: MemberId) -> Option<Vec<usize>> {
    // (node, depth, index within its supervisor's subordinates)
    let mut stack: Vec<(&Member, usize, usize)> = vec![(root, 0, 0)];
    let mut path = Vec::new();

    while let Some((node, depth, index)) = stack.pop() {
        // Pre-order: the last node visited at depth - 1 is this node's parent.
        if depth > 0 {
            path.truncate(depth - 1);
            path.push(index);
        }

        if node.id == id {
            return Some(path);
        }

        for (child_index, child) in node.subordinates.iter().enumerate().rev() {
            stack.push((child, depth + 1, child_index));
        }
    }

    None
}

/// Find the member whose `subordinates` currently holds `id`
///
/// This is the authoritative "current supervisor" query. Returns `None` for
/// the root and for ids not present in the tree.
pub fn find_supervisor(root: &Member, id: MemberId) -> Option<&Member> {
    PreOrder::new(root)
        .map(|(_, member)| member)
        .find(|member| member.subordinates.iter().any(|sub| sub.id == id))
}

/// Follow a child-index path down from `root`
pub fn member_at<'a>(root: &'a Member, path: &[usize]) -> Option<&'a Member> {
    let mut node = root;
    for &index in path {
        node = node.subordinates.get(index)?;
    }
    Some(node)
}

pub(crate) fn member_at_mut<'a>(root: &'a mut Member, path: &[usize]) -> Option<&'a mut Member> {
    let mut node = root;
    for &index in path {
        node = node.subordinates.get_mut(index)?;
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 -> [2 -> [5], 3, 4]
    fn sample() -> Member {
        Member::new(1, "Shadab Ali")
            .with_subordinate(Member::new(2, "2").with_subordinate(Member::new(5, "5")))
            .with_subordinate(Member::new(3, "3"))
            .with_subordinate(Member::new(4, "4"))
    }

    #[test]
    fn test_find_member_root_and_nested() {
        let root = sample();

        assert_eq!(find_member(&root, MemberId(1)).map(|m| m.id), Some(MemberId(1)));
        assert_eq!(find_member(&root, MemberId(5)).map(|m| m.id), Some(MemberId(5)));
        assert!(find_member(&root, MemberId(42)).is_none());
    }

    #[test]
    fn test_find_member_first_preorder_match_wins() {
        // Malformed on purpose: id 9 appears twice.
        let root = Member::new(1, "root")
            .with_subordinate(Member::new(2, "left").with_subordinate(Member::new(9, "deep")))
            .with_subordinate(Member::new(9, "shallow"));

        assert_eq!(find_member(&root, MemberId(9)).map(|m| m.name.as_str()), Some("deep"));
    }

    #[test]
    fn test_find_path() {
        let root = sample();

        assert_eq!(find_path(&root, MemberId(1)), Some(vec![]));
        assert_eq!(find_path(&root, MemberId(5)), Some(vec![0, 0]));
        assert_eq!(find_path(&root, MemberId(4)), Some(vec![2]));
        assert_eq!(find_path(&root, MemberId(42)), None);
    }

    #[test]
    fn test_find_supervisor_uses_tree_not_children() {
        let root = sample();

        // Member 2 has a subordinate (5), but its supervisor is the root.
        assert_eq!(find_supervisor(&root, MemberId(2)).map(|m| m.id), Some(MemberId(1)));
        assert_eq!(find_supervisor(&root, MemberId(5)).map(|m| m.id), Some(MemberId(2)));
        assert!(find_supervisor(&root, MemberId(1)).is_none());
        assert!(find_supervisor(&root, MemberId(42)).is_none());
    }

    #[test]
    fn test_member_at_follows_path() {
        let mut root = sample();

        assert_eq!(member_at(&root, &[0, 0]).map(|m| m.id), Some(MemberId(5)));
        assert!(member_at(&root, &[3]).is_none());

        if let Some(member) = member_at_mut(&mut root, &[1]) {
            member.name = "renamed".to_string();
        }
        assert_eq!(root.subordinates[1].name, "renamed");
    }

    #[test]
    fn test_find_path_after_backtracking() {
        // 1 -> [2 -> [5 -> [6]], 3 -> [7]]
        let root = Member::new(1, "r")
            .with_subordinate(
                Member::new(2, "a")
                    .with_subordinate(Member::new(5, "a1").with_subordinate(Member::new(6, "a2"))),
            )
            .with_subordinate(Member::new(3, "b").with_subordinate(Member::new(7, "b1")));

        assert_eq!(find_path(&root, MemberId(6)), Some(vec![0, 0, 0]));
        assert_eq!(find_path(&root, MemberId(7)), Some(vec![1, 0]));
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let depth = 100_000u64;
        let mut node = Member::new(depth, "leaf");
        for id in (0..depth).rev() {
            node = Member::new(id, "link").with_subordinate(node);
        }

        let path = find_path(&node, MemberId(depth)).unwrap();
        assert_eq!(path.len(), depth as usize);
        assert_eq!(find_supervisor(&node, MemberId(depth)).map(|m| m.id), Some(MemberId(depth - 1)));
    }
}
