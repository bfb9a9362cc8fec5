pub mod grouped_clauses;
pub mod query;

pub use grouped_clauses::GroupedClauses;
pub use query::{
    AbstractQuery, AttributeType, Clause, DesignEntityType, ExpressionSpec, PatternClause,
    PatternKind, Reference, RelationshipKind, Synonym,
};
