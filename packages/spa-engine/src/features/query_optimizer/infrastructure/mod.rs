//! Clause analysis: weights, grouping, ordering, rewrites

pub mod clause_classifier;
pub mod clause_group_sorter;
pub mod clause_grouping;
pub mod preprocessing;

pub use clause_classifier::{clause_weight, relationship_weight, SYNONYM_WEIGHT};
pub use clause_group_sorter::{Arrangement, ClauseGroupSorter, MAX_SORTABLE};
pub use clause_grouping::group_clauses;
pub use preprocessing::{remove_duplicate_clauses, substitute_with_values};
