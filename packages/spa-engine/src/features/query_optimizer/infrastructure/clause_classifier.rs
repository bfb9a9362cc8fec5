//! Clause weights
//!
//! `weight = 100 * (synonym_count - 1) + kind_weight`. A clause with two
//! free synonyms produces a cross product of candidates and dominates any
//! relation-kind difference; within the same synonym count the relation
//! kind decides.

use crate::features::query_optimizer::domain::{Clause, RelationshipKind};

/// Weight of each extra synonym beyond the first
pub const SYNONYM_WEIGHT: u64 = 100;

const CHEAP: u64 = 2;
const MODERATE: u64 = 4;
const EXPENSIVE: u64 = 100;
const INTERPROCEDURAL: u64 = 150;

/// Evaluation cost class of a relationship kind
pub fn relationship_weight(kind: RelationshipKind) -> u64 {
    use RelationshipKind::*;
    match kind {
        Follows | ModifiesStatement | ModifiesProcedure => CHEAP,
        FollowsStar | Parent | ParentStar | UsesStatement | UsesProcedure | Calls | CallsStar
        | Next => MODERATE,
        NextStar | Affects | AffectsStar => EXPENSIVE,
        NextBip | NextBipStar | AffectsBip | AffectsBipStar => INTERPROCEDURAL,
    }
}

fn kind_weight(clause: &Clause) -> u64 {
    match clause {
        Clause::SuchThat { relationship, .. } => relationship_weight(*relationship),
        Clause::Pattern(_) => MODERATE,
        Clause::With { .. } => 0,
    }
}

/// Estimated evaluation cost of one clause
pub fn clause_weight(clause: &Clause) -> u64 {
    let extra_synonyms = clause.synonym_count().saturating_sub(1) as u64;
    SYNONYM_WEIGHT * extra_synonyms + kind_weight(clause)
}
