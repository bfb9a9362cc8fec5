pub mod cfg;

pub use cfg::{CallSite, ControlFlowGraph, FlowEdgeKind, FlowGraph, ProcedureFlow};
