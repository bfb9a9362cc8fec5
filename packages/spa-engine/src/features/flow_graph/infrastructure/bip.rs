/*
 * Branch-into-procedure (Bip) graph builder
 *
 * Starts from the intraprocedural CFG and reroutes every call statement:
 * - call -> first statement of the callee
 * - every exit of the callee -> each intraprocedural successor of the call
 *
 * A callee exit that is itself a call contributes the exits of its own
 * callee instead. A call with no successor (last statement of its
 * procedure) returns wherever its procedure returns; that case is covered
 * because the call is then an exit of the caller. No call-string context
 * is kept, so returns go to every caller.
 */

use crate::features::flow_graph::domain::{CallSite, ControlFlowGraph, FlowEdgeKind, FlowGraph};
use crate::shared::{Name, StatementNumber};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

pub struct BipGraphBuilder<'a> {
    cfg: &'a ControlFlowGraph,
    call_sites: FxHashMap<StatementNumber, &'a CallSite>,
    exits: FxHashMap<Name, Vec<StatementNumber>>,
}

impl<'a> BipGraphBuilder<'a> {
    pub fn new(cfg: &'a ControlFlowGraph) -> Self {
        let call_sites = cfg.call_sites.iter().map(|c| (c.statement, c)).collect();
        Self {
            cfg,
            call_sites,
            exits: FxHashMap::default(),
        }
    }

    pub fn build(mut self) -> FlowGraph {
        let cfg = self.cfg;
        let mut bip = FlowGraph::new();

        for stmt in cfg.flow.statements() {
            bip.add_statement(stmt);
        }
        for (from, to, kind) in cfg.flow.edges() {
            if !self.call_sites.contains_key(&from) {
                bip.add_edge(from, to, kind);
            }
        }

        for site in &cfg.call_sites {
            if let Some(callee) = cfg.procedure(&site.callee) {
                bip.add_edge(site.statement, callee.entry, FlowEdgeKind::Call);
            }

            let returns = cfg.flow.successors(site.statement);
            if returns.is_empty() {
                continue;
            }
            let exits = self.effective_exits(&site.callee, &mut FxHashSet::default());
            for exit in exits {
                for &target in &returns {
                    bip.add_edge(exit, target, FlowEdgeKind::Return);
                }
            }
        }

        debug!(
            nodes = bip.node_count(),
            edges = bip.edge_count(),
            call_sites = cfg.call_sites.len(),
            edge_kinds = %bip.edge_summary(),
            "Built Bip graph"
        );

        bip
    }

    /// Last statements actually executed before `procedure` returns
    fn effective_exits(
        &mut self,
        procedure: &str,
        in_progress: &mut FxHashSet<Name>,
    ) -> Vec<StatementNumber> {
        if let Some(done) = self.exits.get(procedure) {
            return done.clone();
        }
        let cfg = self.cfg;
        let Some(flow) = cfg.procedure(procedure) else {
            return Vec::new();
        };
        // Recursive programs are rejected before this point
        if !in_progress.insert(procedure.to_string()) {
            return Vec::new();
        }

        let mut out = Vec::new();
        for &exit in &flow.exits {
            match self.call_sites.get(&exit).copied() {
                Some(site) => out.extend(self.effective_exits(&site.callee, in_progress)),
                None => out.push(exit),
            }
        }
        out.sort_unstable();
        out.dedup();

        self.exits.insert(procedure.to_string(), out.clone());
        out
    }
}
