mod build_knowledge_base;

pub use build_knowledge_base::{build_knowledge_base, BuildKnowledgeBaseUseCase};
