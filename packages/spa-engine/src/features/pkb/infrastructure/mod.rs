//! Design extraction: populates the knowledge base from a validated AST

pub mod affects_extractor;
pub mod call_graph;
pub mod next_extractor;
pub mod semantic_validator;
pub mod structure_extractor;
pub mod uses_modifies_extractor;

pub use affects_extractor::{compute_affects, load_affects, KillPolicy};
pub use call_graph::CallGraph;
pub use next_extractor::{load_flow_closure, load_flow_edges};
pub use semantic_validator::validate_program;
pub use structure_extractor::{extract_entities, extract_follows_and_parent};
pub use uses_modifies_extractor::{extract_calls, extract_uses_modifies};
