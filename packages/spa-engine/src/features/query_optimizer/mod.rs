// Query optimizer
//
// Hexagonal Architecture:
// - domain: AbstractQuery and clause model, GroupedClauses plan
// - infrastructure: weights, grouping, group sorter, clause rewrites
// - application: optimise use case (query -> plan)

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{optimise_query, OptimiseQueryUseCase};

pub use domain::{
    AbstractQuery, AttributeType, Clause, DesignEntityType, ExpressionSpec, GroupedClauses,
    PatternClause, PatternKind, Reference, RelationshipKind, Synonym,
};
