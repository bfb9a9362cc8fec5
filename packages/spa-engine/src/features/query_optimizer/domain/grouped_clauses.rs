//! Grouped clauses (evaluation plan)
//!
//! A partition of clause indices into groups. Each group is evaluated as a
//! unit in the stored order; groups are evaluated in list order.

use super::query::Clause;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedClauses {
    groups: Vec<Vec<usize>>,
}

impl GroupedClauses {
    pub fn new(groups: Vec<Vec<usize>>) -> Self {
        Self { groups }
    }

    /// One group per clause, in written order
    pub fn singletons(clause_count: usize) -> Self {
        Self {
            groups: (0..clause_count).map(|i| vec![i]).collect(),
        }
    }

    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&[usize]> {
        self.groups.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clause_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Clause indices in evaluation order
    pub fn evaluation_order(&self) -> Vec<usize> {
        self.groups.iter().flatten().copied().collect()
    }

    /// Replace the order inside one group with `order` (positions into it)
    pub(crate) fn reorder_group(&mut self, group: usize, order: &[usize]) {
        if let Some(members) = self.groups.get_mut(group) {
            debug_assert_eq!(members.len(), order.len());
            let reordered: Vec<usize> = order.iter().map(|&pos| members[pos]).collect();
            *members = reordered;
        }
    }

    /// Stable sort of the groups.
    ///
    /// Groups without synonyms first, then groups not touching any selected
    /// synonym, then the rest; ties broken by ascending size.
    pub(crate) fn sort_groups(&mut self, clauses: &[Clause], is_selected: impl Fn(&str) -> bool) {
        let rank = |group: &Vec<usize>| -> (u8, usize) {
            let names: Vec<&str> = group
                .iter()
                .filter_map(|&i| clauses.get(i))
                .flat_map(Clause::synonyms)
                .collect();
            let tier = if names.is_empty() {
                0
            } else if !names.iter().any(|n| is_selected(n)) {
                1
            } else {
                2
            };
            (tier, group.len())
        };
        self.groups.sort_by_cached_key(rank);
    }

    /// Number the clauses 0.. in evaluation order, keeping group shape
    pub(crate) fn renumbered(&self) -> Self {
        let mut next = 0;
        let groups = self
            .groups
            .iter()
            .map(|g| {
                let start = next;
                next += g.len();
                (start..next).collect()
            })
            .collect();
        Self { groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::query_optimizer::domain::query::{
        DesignEntityType, Reference, RelationshipKind, Synonym,
    };

    fn follows(l: &str, r: &str) -> Clause {
        Clause::such_that(
            RelationshipKind::Follows,
            Reference::Synonym(Synonym::new(l, DesignEntityType::Stmt)),
            Reference::Synonym(Synonym::new(r, DesignEntityType::Stmt)),
        )
    }

    #[test]
    fn test_singletons_and_order() {
        let plan = GroupedClauses::singletons(3);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.evaluation_order(), vec![0, 1, 2]);
        assert_eq!(plan.clause_count(), 3);
    }

    #[test]
    fn test_reorder_group() {
        let mut plan = GroupedClauses::new(vec![vec![4, 7, 9]]);
        plan.reorder_group(0, &[2, 0, 1]);
        assert_eq!(plan.group(0), Some(&[9, 4, 7][..]));
    }

    #[test]
    fn test_sort_groups_tiers() {
        let clauses = vec![
            follows("a", "b"),
            follows("b", "c"),
            follows("x", "y"),
            Clause::with(Reference::Integer(1), Reference::Integer(1)),
        ];
        let mut plan = GroupedClauses::new(vec![vec![0, 1], vec![2], vec![3]]);
        plan.sort_groups(&clauses, |n| n == "a" || n == "x");
        // literal-only first, then by size among groups with selected synonyms
        assert_eq!(plan.groups(), &[vec![3], vec![2], vec![0, 1]]);

        let mut plan = GroupedClauses::new(vec![vec![0, 1], vec![2], vec![3]]);
        plan.sort_groups(&clauses, |n| n == "a");
        assert_eq!(plan.groups(), &[vec![3], vec![2], vec![0, 1]]);

        let mut plan = GroupedClauses::new(vec![vec![2], vec![0, 1], vec![3]]);
        plan.sort_groups(&clauses, |n| n == "y");
        assert_eq!(plan.groups(), &[vec![3], vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_renumbered() {
        let plan = GroupedClauses::new(vec![vec![3], vec![2, 0, 1]]);
        assert_eq!(plan.renumbered().groups(), &[vec![0], vec![1, 2, 3]]);
    }
}
