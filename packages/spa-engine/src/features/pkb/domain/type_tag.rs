//! Type tags for relation table keys
//!
//! A relation table indexes each side of a fact by a type tag. Every tag
//! enumeration carries one wildcard sentinel that doubles as the
//! aggregation bucket.

use crate::shared::models::StatementType;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

pub trait TypeTag: Copy + Eq + Hash + Debug {
    /// The wildcard sentinel
    fn any() -> Self;

    fn is_any(&self) -> bool {
        *self == Self::any()
    }
}

impl TypeTag for StatementType {
    fn any() -> Self {
        StatementType::Any
    }
}

/// Tag for the non-statement side of Uses/Modifies/Calls facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityTag {
    Any,
    Variable,
    Procedure,
}

impl TypeTag for EntityTag {
    fn any() -> Self {
        EntityTag::Any
    }
}
