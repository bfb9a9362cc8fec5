//! Optimise use case: AbstractQuery -> GroupedClauses
//!
//! 1. with-value substitution
//! 2. duplicate removal
//! 3. grouping by shared synonyms
//! 4. per-group ordering (exact DP, greedy above `max_group_size`)
//! 5. group ordering
//! 6. rewrite the query's clause list to the plan order

use crate::config::OptimizerConfig;
use crate::features::query_optimizer::domain::{AbstractQuery, Clause, GroupedClauses};
use crate::features::query_optimizer::infrastructure::{
    group_clauses, remove_duplicate_clauses, substitute_with_values, ClauseGroupSorter,
    MAX_SORTABLE,
};
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

pub struct OptimiseQueryUseCase {
    config: OptimizerConfig,
}

impl OptimiseQueryUseCase {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Returns the plan over the rewritten `query.clauses`
    pub fn execute(&self, query: &mut AbstractQuery) -> GroupedClauses {
        if !self.config.enabled || query.clauses.len() <= 1 {
            return GroupedClauses::singletons(query.clauses.len());
        }

        if self.config.substitute_with_values {
            substitute_with_values(&mut query.clauses);
        }
        if self.config.remove_duplicate_clauses {
            remove_duplicate_clauses(&mut query.clauses);
        }

        let mut plan = group_clauses(&query.clauses);
        for group in 0..plan.len() {
            let members: Vec<&Clause> = plan.groups()[group]
                .iter()
                .map(|&i| &query.clauses[i])
                .collect();
            if members.len() < 2 {
                continue;
            }
            if members.len() > MAX_SORTABLE {
                warn!(group, size = members.len(), "Clause group too large to sort, keeping written order");
                continue;
            }

            let mut sorter = ClauseGroupSorter::new(&members);
            let (arrangement, seeds) = if members.len() > self.config.max_group_size {
                (sorter.arrange_greedy(), 0)
            } else {
                let seeds = sorter.seeds(self.config.seed_strategy).len();
                (sorter.arrange(self.config.seed_strategy), seeds)
            };
            debug!(
                group,
                size = members.len(),
                seeds,
                states = sorter.states_explored(),
                cost = arrangement.cost,
                "Sorted clause group"
            );
            plan.reorder_group(group, &arrangement.order);
        }

        if self.config.sort_groups {
            let selected: FxHashSet<&str> =
                query.selected.iter().map(|s| s.name.as_str()).collect();
            plan.sort_groups(&query.clauses, |name| selected.contains(name));
        }

        let mut slots: Vec<Option<Clause>> = std::mem::take(&mut query.clauses)
            .into_iter()
            .map(Some)
            .collect();
        query.clauses = plan
            .evaluation_order()
            .into_iter()
            .filter_map(|i| slots.get_mut(i).and_then(Option::take))
            .collect();

        let plan = plan.renumbered();
        info!(
            clauses = query.clauses.len(),
            groups = plan.len(),
            "Query optimised"
        );
        plan
    }
}

/// Rewrite `query` in place and return its evaluation plan
pub fn optimise_query(query: &mut AbstractQuery, config: &OptimizerConfig) -> GroupedClauses {
    OptimiseQueryUseCase::new(config.clone()).execute(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Preset, SeedStrategy};
    use crate::features::query_optimizer::domain::{
        AttributeType, DesignEntityType, ExpressionSpec, PatternKind, Reference, RelationshipKind,
        Synonym,
    };
    use pretty_assertions::assert_eq;

    fn syn(name: &str, entity: DesignEntityType) -> Synonym {
        Synonym::new(name, entity)
    }

    fn r(name: &str, entity: DesignEntityType) -> Reference {
        Reference::Synonym(syn(name, entity))
    }

    fn such_that(kind: RelationshipKind, left: Reference, right: Reference) -> Clause {
        Clause::such_that(kind, left, right)
    }

    /// Select a such that Affects(a, a2) and Parent(w, a) and Follows(x, y)
    ///   and pattern a(_, _) and with 1 = 1
    fn sample_query() -> AbstractQuery {
        use DesignEntityType::*;
        AbstractQuery::new(
            vec![syn("a", Assign)],
            vec![
                such_that(RelationshipKind::Affects, r("a", Assign), r("a2", Assign)),
                such_that(RelationshipKind::Parent, r("w", While), r("a", Assign)),
                such_that(RelationshipKind::Follows, r("x", Stmt), r("y", Stmt)),
                Clause::pattern(
                    PatternKind::Assign(ExpressionSpec::Any),
                    syn("a", Assign),
                    Reference::Wildcard,
                ),
                Clause::with(Reference::Integer(1), Reference::Integer(1)),
            ],
        )
    }

    #[test]
    fn test_disabled_keeps_written_order() {
        let config = OptimizerConfig::default()
            .enabled(false)
            .substitute_with_values(false)
            .remove_duplicate_clauses(false);
        let mut query = sample_query();
        let original = query.clone();
        let plan = optimise_query(&mut query, &config);
        assert_eq!(query, original);
        assert_eq!(plan, GroupedClauses::singletons(5));
    }

    #[test]
    fn test_single_clause_passthrough() {
        let mut query = AbstractQuery::new(
            vec![],
            vec![Clause::with(Reference::Integer(1), Reference::Integer(2))],
        );
        let plan = optimise_query(&mut query, &OptimizerConfig::default());
        assert_eq!(plan.groups(), &[vec![0]]);
    }

    #[test]
    fn test_full_pipeline() {
        let mut query = sample_query();
        let plan = optimise_query(&mut query, &OptimizerConfig::from_preset(Preset::Balanced));

        // literal group, then the group not touching `a`, then the `a` group
        assert_eq!(plan.groups(), &[vec![0], vec![1], vec![2, 3, 4]]);
        assert_eq!(query.clauses[0], Clause::with(Reference::Integer(1), Reference::Integer(1)));
        assert!(matches!(
            query.clauses[1],
            Clause::SuchThat { relationship: RelationshipKind::Follows, .. }
        ));
        // cheapest first: pattern (4), Parent (104), Affects (200)
        assert!(matches!(query.clauses[2], Clause::Pattern(_)));
        assert!(matches!(
            query.clauses[3],
            Clause::SuchThat { relationship: RelationshipKind::Parent, .. }
        ));
        assert!(matches!(
            query.clauses[4],
            Clause::SuchThat { relationship: RelationshipKind::Affects, .. }
        ));
    }

    #[test]
    fn test_substitution_then_dedup() {
        use DesignEntityType::*;
        let n = || r("n", ProgLine);
        let mut query = AbstractQuery::new(
            vec![syn("s", Stmt)],
            vec![
                Clause::with(n(), Reference::Integer(5)),
                such_that(RelationshipKind::Next, n(), r("s", Stmt)),
                such_that(RelationshipKind::Next, Reference::Integer(5), r("s", Stmt)),
            ],
        );
        let config = OptimizerConfig::default().seed_strategy(SeedStrategy::MinWeight);
        let plan = optimise_query(&mut query, &config);

        assert_eq!(query.clauses.len(), 2);
        assert_eq!(plan.clause_count(), 2);
        assert!(query
            .clauses
            .contains(&such_that(RelationshipKind::Next, Reference::Integer(5), r("s", Stmt))));
    }

    #[test]
    fn test_oversized_group_uses_greedy_order() {
        use DesignEntityType::*;
        let mut query = AbstractQuery::new(
            vec![],
            vec![
                such_that(RelationshipKind::NextStar, r("s1", Stmt), r("s2", Stmt)),
                such_that(RelationshipKind::Follows, r("s2", Stmt), Reference::Integer(3)),
                Clause::with(
                    Reference::Attribute(syn("s1", Stmt), AttributeType::StmtNumber),
                    r("n", ProgLine),
                ),
            ],
        );
        let config = OptimizerConfig::default().max_group_size(2);
        let plan = optimise_query(&mut query, &config);
        assert_eq!(plan.groups(), &[vec![0, 1, 2]]);
        // greedy: Follows (2), then its only neighbour NextStar (200), then with (100)
        assert!(matches!(
            query.clauses[0],
            Clause::SuchThat { relationship: RelationshipKind::Follows, .. }
        ));
        assert!(matches!(
            query.clauses[1],
            Clause::SuchThat { relationship: RelationshipKind::NextStar, .. }
        ));
    }

    /// Follows(s0, s1), Next*(s1, s2), Parent(s2, s3), Parent(s3, s4): a path
    /// weighted 102, 200, 104, 104
    fn path_query() -> AbstractQuery {
        use DesignEntityType::*;
        AbstractQuery::new(
            vec![syn("s0", Stmt)],
            vec![
                such_that(RelationshipKind::Follows, r("s0", Stmt), r("s1", Stmt)),
                such_that(RelationshipKind::NextStar, r("s1", Stmt), r("s2", Stmt)),
                such_that(RelationshipKind::Parent, r("s2", Stmt), r("s3", Stmt)),
                such_that(RelationshipKind::Parent, r("s3", Stmt), r("s4", Stmt)),
            ],
        )
    }

    fn relationships(query: &AbstractQuery) -> Vec<RelationshipKind> {
        query
            .clauses
            .iter()
            .filter_map(|c| match c {
                Clause::SuchThat { relationship, .. } => Some(*relationship),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_default_seeds_from_min_weight_clause() {
        use RelationshipKind::*;

        // Only Follows (102) may open the group: cost 4*102 + 3*200 + 2*104 + 104
        let mut query = path_query();
        optimise_query(&mut query, &OptimizerConfig::default());
        assert_eq!(relationships(&query), vec![Follows, NextStar, Parent, Parent]);
        assert_eq!(
            query.clauses[2],
            such_that(Parent, r("s2", DesignEntityType::Stmt), r("s3", DesignEntityType::Stmt))
        );

        // Every seed: opening at Parent(s2, s3) is cheaper (1230 < 1320)
        let mut query = path_query();
        optimise_query(&mut query, &OptimizerConfig::from_preset(Preset::Thorough));
        assert_eq!(relationships(&query), vec![Parent, Parent, NextStar, Follows]);
        assert_eq!(
            query.clauses[0],
            such_that(Parent, r("s2", DesignEntityType::Stmt), r("s3", DesignEntityType::Stmt))
        );
    }

    #[test]
    fn test_plan_serializes() {
        let mut query = sample_query();
        let plan = optimise_query(&mut query, &OptimizerConfig::default());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["groups"][2], serde_json::json!([2, 3, 4]));
    }
}
