mod build_flow_graphs;

pub use build_flow_graphs::{build_flow_graphs, ProgramFlowGraphs};
