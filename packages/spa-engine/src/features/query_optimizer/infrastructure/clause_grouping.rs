//! Clause grouping
//!
//! Clauses are connected when they share a synonym; each connected
//! component becomes one group. Clauses without synonyms each form their
//! own group. Groups are listed by their first clause, members ascending.

use crate::features::query_optimizer::domain::{Clause, GroupedClauses};
use petgraph::unionfind::UnionFind;
use rustc_hash::FxHashMap;

pub fn group_clauses(clauses: &[Clause]) -> GroupedClauses {
    let mut components = UnionFind::<usize>::new(clauses.len());
    let mut first_user: FxHashMap<&str, usize> = FxHashMap::default();

    for (index, clause) in clauses.iter().enumerate() {
        for name in clause.synonyms() {
            match first_user.get(name) {
                Some(&first) => {
                    components.union(first, index);
                }
                None => {
                    first_user.insert(name, index);
                }
            }
        }
    }

    let mut group_of_root: FxHashMap<usize, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (index, clause) in clauses.iter().enumerate() {
        if !clause.has_synonym() {
            groups.push(vec![index]);
            continue;
        }
        let root = components.find(index);
        match group_of_root.get(&root) {
            Some(&g) => groups[g].push(index),
            None => {
                group_of_root.insert(root, groups.len());
                groups.push(vec![index]);
            }
        }
    }

    GroupedClauses::new(groups)
}
