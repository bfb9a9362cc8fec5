use crate::features::flow_graph::domain::{ControlFlowGraph, FlowGraph};
use crate::features::flow_graph::infrastructure::{BipGraphBuilder, CfgBuilder};
use crate::shared::Program;

pub struct ProgramFlowGraphs {
    pub cfg: ControlFlowGraph,
    /// Present only when interprocedural relations are requested
    pub bip: Option<FlowGraph>,
}

pub fn build_flow_graphs(program: &Program, with_bip: bool) -> ProgramFlowGraphs {
    let cfg = CfgBuilder::new().build(program);
    let bip = with_bip.then(|| BipGraphBuilder::new(&cfg).build());
    ProgramFlowGraphs { cfg, bip }
}
