//! Statement numbering and statement types

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based line number of a SIMPLE statement
pub type StatementNumber = u32;

/// Statement type
///
/// `Any` is the wildcard sentinel: it is used as a query key and as the
/// aggregation bucket every concrete fact is mirrored into. It never
/// describes an actual statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementType {
    Any,
    Assign,
    Call,
    If,
    Print,
    Read,
    While,
}

impl StatementType {
    /// Every concrete (non-sentinel) statement type
    pub const CONCRETE: [StatementType; 6] = [
        StatementType::Assign,
        StatementType::Call,
        StatementType::If,
        StatementType::Print,
        StatementType::Read,
        StatementType::While,
    ];

    pub fn is_any(&self) -> bool {
        matches!(self, StatementType::Any)
    }

    /// If and while statements own nested statement lists
    pub fn is_container(&self) -> bool {
        matches!(self, StatementType::If | StatementType::While)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementType::Any => "stmt",
            StatementType::Assign => "assign",
            StatementType::Call => "call",
            StatementType::If => "if",
            StatementType::Print => "print",
            StatementType::Read => "read",
            StatementType::While => "while",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
