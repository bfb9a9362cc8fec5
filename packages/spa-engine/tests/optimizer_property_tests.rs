//! Property-based tests for clause grouping and ordering
//!
//! - Grouping: the partition is exactly the shared-synonym components
//! - Feasibility: every clause after the first in a group shares a synonym
//!   with an earlier one
//! - Optimality: for groups of up to 6 clauses the DP cost equals the
//!   brute-force minimum over feasible orders

mod common;

use common::*;
use proptest::prelude::*;
use spa_engine::config::{OptimizerConfig, Preset, SeedStrategy};
use spa_engine::features::query_optimizer::infrastructure::{group_clauses, ClauseGroupSorter};
use spa_engine::features::query_optimizer::{
    optimise_query, AbstractQuery, Clause, DesignEntityType, Reference, RelationshipKind,
};

fn reference() -> impl Strategy<Value = Reference> {
    prop_oneof![
        3 => (0usize..6).prop_map(|i| syn(&format!("s{i}"), DesignEntityType::Stmt)),
        1 => Just(Reference::Wildcard),
        1 => (1i64..10).prop_map(Reference::Integer),
    ]
}

fn clause() -> impl Strategy<Value = Clause> {
    (0..RelationshipKind::ALL.len(), reference(), reference())
        .prop_map(|(kind, left, right)| Clause::such_that(RelationshipKind::ALL[kind], left, right))
}

fn clauses(max: usize) -> impl Strategy<Value = Vec<Clause>> {
    prop::collection::vec(clause(), 0..max)
}

/// Connected under shared synonyms
fn is_connected(members: &[&Clause]) -> bool {
    if members.is_empty() {
        return true;
    }
    let mut reached = vec![false; members.len()];
    reached[0] = true;
    let mut stack = vec![0];
    while let Some(i) = stack.pop() {
        for j in 0..members.len() {
            if !reached[j] && members[i].shares_synonym(members[j]) {
                reached[j] = true;
                stack.push(j);
            }
        }
    }
    reached.into_iter().all(|r| r)
}

fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for perm in permutations(n - 1) {
        for pos in 0..=perm.len() {
            let mut p = perm.clone();
            p.insert(pos, n - 1);
            out.push(p);
        }
    }
    out
}

fn brute_force_min(sorter: &ClauseGroupSorter, first: impl Fn(usize) -> bool) -> Option<u64> {
    permutations(sorter.len())
        .iter()
        .filter(|p| p.first().map_or(true, |&f| first(f)))
        .filter_map(|p| sorter.cost_of(p))
        .min()
}

/// Random weights and a symmetric adjacency over `n` nodes
fn weighted_graph() -> impl Strategy<Value = (Vec<u64>, Vec<u64>)> {
    (1usize..=6).prop_flat_map(|n| {
        (
            prop::collection::vec(0u64..300, n),
            prop::collection::vec(any::<bool>(), n * n),
        )
            .prop_map(move |(weights, edges)| {
                let mut adjacency = vec![0u64; n];
                for i in 0..n {
                    for j in (i + 1)..n {
                        if edges[i * n + j] {
                            adjacency[i] |= 1 << j;
                            adjacency[j] |= 1 << i;
                        }
                    }
                }
                (weights, adjacency)
            })
    })
}

proptest! {
    #[test]
    fn prop_grouping_is_component_partition(clauses in clauses(16)) {
        let plan = group_clauses(&clauses);

        let mut seen = plan.evaluation_order();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..clauses.len()).collect::<Vec<_>>());

        for (g, group) in plan.groups().iter().enumerate() {
            let members: Vec<&Clause> = group.iter().map(|&i| &clauses[i]).collect();
            prop_assert!(is_connected(&members));
            if members.iter().any(|c| !c.has_synonym()) {
                prop_assert_eq!(members.len(), 1);
            }
            for other in plan.groups().iter().skip(g + 1) {
                for &i in group {
                    for &j in other {
                        prop_assert!(!clauses[i].shares_synonym(&clauses[j]));
                    }
                }
            }
        }
    }

    #[test]
    fn prop_optimised_groups_are_feasible(clauses in clauses(14), all_nodes in any::<bool>()) {
        let strategy = if all_nodes { SeedStrategy::AllNodes } else { SeedStrategy::MinWeight };
        let config = OptimizerConfig::from_preset(Preset::Balanced).seed_strategy(strategy);
        let mut query = AbstractQuery::new(vec![], clauses);
        let plan = optimise_query(&mut query, &config);

        prop_assert_eq!(plan.clause_count(), query.clauses.len());
        prop_assert_eq!(plan.evaluation_order(), (0..query.clauses.len()).collect::<Vec<_>>());

        for group in plan.groups() {
            for (k, &i) in group.iter().enumerate().skip(1) {
                let joined = group[..k]
                    .iter()
                    .any(|&j| query.clauses[i].shares_synonym(&query.clauses[j]));
                prop_assert!(joined, "clause {} joins nothing before it", i);
            }
        }
    }

    #[test]
    fn prop_optimisation_keeps_clause_multiset(clauses in clauses(12)) {
        let config = OptimizerConfig::default().remove_duplicate_clauses(false);
        let mut query = AbstractQuery::new(vec![], clauses.clone());
        optimise_query(&mut query, &config);

        let mut before: Vec<String> = clauses.iter().map(Clause::to_string).collect();
        let mut after: Vec<String> = query.clauses.iter().map(Clause::to_string).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_dp_matches_brute_force((weights, adjacency) in weighted_graph()) {
        let mut sorter = ClauseGroupSorter::from_parts(weights.clone(), adjacency.clone());
        let exact = sorter.arrange(SeedStrategy::AllNodes);
        prop_assert_eq!(sorter.cost_of(&exact.order), Some(exact.cost));
        prop_assert_eq!(Some(exact.cost), brute_force_min(&sorter, |_| true));

        let mut sorter = ClauseGroupSorter::from_parts(weights.clone(), adjacency);
        let seeded = sorter.arrange(SeedStrategy::MinWeight);
        let min = weights.iter().copied().min().unwrap_or(0);
        prop_assert_eq!(weights[seeded.order[0]], min);
        prop_assert_eq!(
            Some(seeded.cost),
            brute_force_min(&sorter, |first| weights[first] == min)
        );
        prop_assert!(exact.cost <= seeded.cost);
    }

    #[test]
    fn prop_greedy_is_feasible((weights, adjacency) in weighted_graph()) {
        let sorter = ClauseGroupSorter::from_parts(weights, adjacency);
        let greedy = sorter.arrange_greedy();
        prop_assert_eq!(sorter.cost_of(&greedy.order), Some(greedy.cost));
    }
}
