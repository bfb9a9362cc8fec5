// Program Knowledge Base
//
// Hexagonal Architecture:
// - domain: RelationTable, entity tables, ProgramKnowledgeBase facade
// - infrastructure: semantic validation and design extractors
// - application: build use case (AST -> knowledge base)

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::{build_knowledge_base, BuildKnowledgeBaseUseCase};

// Re-export domain types
pub use domain::{
    EntityTag, KnowledgeBaseStats, NameRelationTable, ProgramKnowledgeBase, RelationTable,
    StatementRelation, StatementRelationTable, StatementVariableTable, TypeTag,
};
