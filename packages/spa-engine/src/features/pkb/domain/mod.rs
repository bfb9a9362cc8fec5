//! PKB domain: relation tables, entity tables, the knowledge base facade

mod entity_tables;
mod knowledge_base;
mod relation_table;
mod type_tag;

pub use entity_tables::{ConstantTable, ProcedureTable, StatementTable, VariableTable};
pub use knowledge_base::{
    KnowledgeBaseStats, NameRelationTable, ProgramKnowledgeBase, StatementRelation,
    StatementVariableTable,
};
pub use relation_table::{RelationTable, StatementRelationTable};
pub use type_tag::{EntityTag, TypeTag};
