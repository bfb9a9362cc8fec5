//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - application/ - Use cases
//! - infrastructure/ - Algorithms and builders behind the use cases

pub mod flow_graph;
pub mod pkb;
pub mod query_optimizer;
