use crate::model::Member;

/// Pre-order walk of a member subtree, yielding `(depth, member)`
///
/// The root is depth 0. Subordinates are visited left to right. The walk keeps
/// its own stack, so it is safe on arbitrarily deep charts.
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Member)>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a Member) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Member);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, member) = self.stack.pop()?;
        self.stack
            .extend(member.subordinates.iter().rev().map(|sub| (depth + 1, sub)));
        Some((depth, member))
    }
}
