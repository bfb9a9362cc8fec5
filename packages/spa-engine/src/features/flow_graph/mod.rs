// Control flow graphs for Next / NextBip and the Affects families
//
// Hexagonal Architecture:
// - domain: FlowGraph, ControlFlowGraph (per-procedure entry/exits, call sites)
// - infrastructure: CFG and Bip graph builders
// - application: build both graphs for a program

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{build_flow_graphs, ProgramFlowGraphs};
pub use domain::{CallSite, ControlFlowGraph, FlowEdgeKind, FlowGraph, ProcedureFlow};
