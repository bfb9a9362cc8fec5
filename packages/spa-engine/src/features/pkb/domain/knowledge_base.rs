//! Program Knowledge Base facade
//!
//! Aggregates every relation table and entity table behind one read-only
//! surface. Built once by the design extractor, then shared freely: nothing
//! here takes `&mut self` outside the crate.

use super::entity_tables::{ConstantTable, ProcedureTable, StatementTable, VariableTable};
use super::relation_table::{RelationTable, StatementRelationTable};
use super::type_tag::EntityTag;
use crate::shared::{Name, StatementNumber, StatementType};
use serde::Serialize;
use std::fmt;

/// (statement, variable) facts: Uses, Modifies
pub type StatementVariableTable = RelationTable<StatementNumber, Name, StatementType, EntityTag>;

/// (procedure, name) facts: procedure Uses/Modifies, Calls
pub type NameRelationTable = RelationTable<Name, Name, EntityTag, EntityTag>;

/// Relations between two statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatementRelation {
    Follows,
    FollowsStar,
    Parent,
    ParentStar,
    Next,
    NextStar,
    NextBip,
    NextBipStar,
    Affects,
    AffectsStar,
    AffectsBip,
    AffectsBipStar,
}

impl StatementRelation {
    pub const ALL: [StatementRelation; 12] = [
        StatementRelation::Follows,
        StatementRelation::FollowsStar,
        StatementRelation::Parent,
        StatementRelation::ParentStar,
        StatementRelation::Next,
        StatementRelation::NextStar,
        StatementRelation::NextBip,
        StatementRelation::NextBipStar,
        StatementRelation::Affects,
        StatementRelation::AffectsStar,
        StatementRelation::AffectsBip,
        StatementRelation::AffectsBipStar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementRelation::Follows => "Follows",
            StatementRelation::FollowsStar => "Follows*",
            StatementRelation::Parent => "Parent",
            StatementRelation::ParentStar => "Parent*",
            StatementRelation::Next => "Next",
            StatementRelation::NextStar => "Next*",
            StatementRelation::NextBip => "NextBip",
            StatementRelation::NextBipStar => "NextBip*",
            StatementRelation::Affects => "Affects",
            StatementRelation::AffectsStar => "Affects*",
            StatementRelation::AffectsBip => "AffectsBip",
            StatementRelation::AffectsBipStar => "AffectsBip*",
        }
    }
}

impl fmt::Display for StatementRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Distinct fact counts per relation, for logging and reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeBaseStats {
    pub statements: usize,
    pub variables: usize,
    pub constants: usize,
    pub procedures: usize,
    pub follows: usize,
    pub follows_star: usize,
    pub parent: usize,
    pub parent_star: usize,
    pub uses: usize,
    pub modifies: usize,
    pub calls: usize,
    pub calls_star: usize,
    pub next: usize,
    pub next_star: usize,
    pub next_bip: usize,
    pub next_bip_star: usize,
    pub affects: usize,
    pub affects_star: usize,
    pub affects_bip: usize,
    pub affects_bip_star: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ProgramKnowledgeBase {
    pub(crate) statements: StatementTable,
    pub(crate) variables: VariableTable,
    pub(crate) constants: ConstantTable,
    pub(crate) procedures: ProcedureTable,

    pub(crate) follows: StatementRelationTable,
    pub(crate) follows_star: StatementRelationTable,
    pub(crate) parent: StatementRelationTable,
    pub(crate) parent_star: StatementRelationTable,
    pub(crate) next: StatementRelationTable,
    pub(crate) next_star: StatementRelationTable,
    pub(crate) next_bip: StatementRelationTable,
    pub(crate) next_bip_star: StatementRelationTable,
    pub(crate) affects: StatementRelationTable,
    pub(crate) affects_star: StatementRelationTable,
    pub(crate) affects_bip: StatementRelationTable,
    pub(crate) affects_bip_star: StatementRelationTable,

    pub(crate) uses_statement: StatementVariableTable,
    pub(crate) modifies_statement: StatementVariableTable,
    pub(crate) uses_procedure: NameRelationTable,
    pub(crate) modifies_procedure: NameRelationTable,
    pub(crate) calls: NameRelationTable,
    pub(crate) calls_star: NameRelationTable,
}

impl ProgramKnowledgeBase {
    // ═══════════════════════════════════════════════════════════════════════
    // Entity tables
    // ═══════════════════════════════════════════════════════════════════════

    pub fn statements(&self) -> &StatementTable {
        &self.statements
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn procedures(&self) -> &ProcedureTable {
        &self.procedures
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Relation tables
    // ═══════════════════════════════════════════════════════════════════════

    pub fn statement_relation(&self, relation: StatementRelation) -> &StatementRelationTable {
        match relation {
            StatementRelation::Follows => &self.follows,
            StatementRelation::FollowsStar => &self.follows_star,
            StatementRelation::Parent => &self.parent,
            StatementRelation::ParentStar => &self.parent_star,
            StatementRelation::Next => &self.next,
            StatementRelation::NextStar => &self.next_star,
            StatementRelation::NextBip => &self.next_bip,
            StatementRelation::NextBipStar => &self.next_bip_star,
            StatementRelation::Affects => &self.affects,
            StatementRelation::AffectsStar => &self.affects_star,
            StatementRelation::AffectsBip => &self.affects_bip,
            StatementRelation::AffectsBipStar => &self.affects_bip_star,
        }
    }

    pub fn follows(&self) -> &StatementRelationTable {
        &self.follows
    }

    pub fn follows_star(&self) -> &StatementRelationTable {
        &self.follows_star
    }

    pub fn parent(&self) -> &StatementRelationTable {
        &self.parent
    }

    pub fn parent_star(&self) -> &StatementRelationTable {
        &self.parent_star
    }

    pub fn next(&self) -> &StatementRelationTable {
        &self.next
    }

    pub fn next_star(&self) -> &StatementRelationTable {
        &self.next_star
    }

    pub fn next_bip(&self) -> &StatementRelationTable {
        &self.next_bip
    }

    pub fn next_bip_star(&self) -> &StatementRelationTable {
        &self.next_bip_star
    }

    pub fn affects(&self) -> &StatementRelationTable {
        &self.affects
    }

    pub fn affects_star(&self) -> &StatementRelationTable {
        &self.affects_star
    }

    pub fn affects_bip(&self) -> &StatementRelationTable {
        &self.affects_bip
    }

    pub fn affects_bip_star(&self) -> &StatementRelationTable {
        &self.affects_bip_star
    }

    pub fn uses_statement(&self) -> &StatementVariableTable {
        &self.uses_statement
    }

    pub fn modifies_statement(&self) -> &StatementVariableTable {
        &self.modifies_statement
    }

    pub fn uses_procedure(&self) -> &NameRelationTable {
        &self.uses_procedure
    }

    pub fn modifies_procedure(&self) -> &NameRelationTable {
        &self.modifies_procedure
    }

    pub fn calls(&self) -> &NameRelationTable {
        &self.calls
    }

    pub fn calls_star(&self) -> &NameRelationTable {
        &self.calls_star
    }

    pub fn stats(&self) -> KnowledgeBaseStats {
        KnowledgeBaseStats {
            statements: self.statements.len(),
            variables: self.variables.len(),
            constants: self.constants.len(),
            procedures: self.procedures.len(),
            follows: self.follows.len(),
            follows_star: self.follows_star.len(),
            parent: self.parent.len(),
            parent_star: self.parent_star.len(),
            uses: self.uses_statement.len(),
            modifies: self.modifies_statement.len(),
            calls: self.calls.len(),
            calls_star: self.calls_star.len(),
            next: self.next.len(),
            next_star: self.next_star.len(),
            next_bip: self.next_bip.len(),
            next_bip_star: self.next_bip_star.len(),
            affects: self.affects.len(),
            affects_star: self.affects_star.len(),
            affects_bip: self.affects_bip.len(),
            affects_bip_star: self.affects_bip_star.len(),
        }
    }
}
