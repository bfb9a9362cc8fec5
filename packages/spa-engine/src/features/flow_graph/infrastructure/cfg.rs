/*
 * CFG builder
 *
 * One node per statement. Edges:
 * - consecutive statements of a list: sequential
 * - while header -> first body statement, body ends -> header,
 *   header -> follower
 * - if header -> first statement of each branch, both branch ends -> follower
 *
 * The "ends" of a statement list are the statements control can leave the
 * list from; the ends of a procedure body are its exits.
 */

use crate::features::flow_graph::domain::{
    CallSite, ControlFlowGraph, FlowEdgeKind, FlowGraph, ProcedureFlow,
};
use crate::shared::{Procedure, Program, Statement, StatementKind, StatementNumber};
use tracing::debug;

/// Exit of a statement still waiting for its successor
#[derive(Debug, Clone, Copy)]
struct PendingExit {
    from: StatementNumber,
    kind: FlowEdgeKind,
}

pub struct CfgBuilder {
    flow: FlowGraph,
    call_sites: Vec<CallSite>,
}

impl CfgBuilder {
    pub fn new() -> Self {
        Self {
            flow: FlowGraph::new(),
            call_sites: Vec::new(),
        }
    }

    pub fn build(mut self, program: &Program) -> ControlFlowGraph {
        let mut procedures = Vec::with_capacity(program.procedures.len());

        for proc in &program.procedures {
            if let Some(flow) = self.build_procedure(proc) {
                procedures.push(flow);
            }
        }

        debug!(
            procedures = procedures.len(),
            nodes = self.flow.node_count(),
            edges = self.flow.edge_count(),
            edge_kinds = %self.flow.edge_summary(),
            "Built intraprocedural CFG"
        );

        ControlFlowGraph {
            flow: self.flow,
            procedures,
            call_sites: self.call_sites,
        }
    }

    fn build_procedure(&mut self, proc: &Procedure) -> Option<ProcedureFlow> {
        let entry = proc.body.first()?.number;
        let ends = self.build_list(&proc.body, &proc.name);
        let mut exits: Vec<StatementNumber> = ends.iter().map(|e| e.from).collect();
        exits.sort_unstable();
        exits.dedup();

        Some(ProcedureFlow {
            name: proc.name.clone(),
            entry,
            exits,
        })
    }

    /// Wire a statement list and return its pending exits
    fn build_list(&mut self, list: &[Statement], procedure: &str) -> Vec<PendingExit> {
        let mut pending: Vec<PendingExit> = Vec::new();

        for stmt in list {
            self.flow.add_statement(stmt.number);
            for exit in pending.drain(..) {
                self.flow.add_edge(exit.from, stmt.number, exit.kind);
            }
            pending = self.build_statement(stmt, procedure);
        }

        pending
    }

    fn build_statement(&mut self, stmt: &Statement, procedure: &str) -> Vec<PendingExit> {
        let header = stmt.number;

        match &stmt.kind {
            StatementKind::While { body, .. } => {
                if let Some(first) = body.first() {
                    self.flow.add_edge(header, first.number, FlowEdgeKind::LoopEnter);
                }
                for end in self.build_list(body, procedure) {
                    self.flow.add_edge(end.from, header, FlowEdgeKind::LoopBack);
                }
                vec![PendingExit {
                    from: header,
                    kind: FlowEdgeKind::LoopExit,
                }]
            }
            StatementKind::If {
                then_branch,
                else_branch,
                ..
            } => {
                let mut ends = Vec::new();
                for (branch, kind) in [
                    (then_branch, FlowEdgeKind::TrueBranch),
                    (else_branch, FlowEdgeKind::FalseBranch),
                ] {
                    match branch.first() {
                        Some(first) => {
                            self.flow.add_edge(header, first.number, kind);
                            ends.extend(self.build_list(branch, procedure));
                        }
                        // Empty branch falls through to the follower
                        None => ends.push(PendingExit { from: header, kind }),
                    }
                }
                ends
            }
            StatementKind::Call(callee) => {
                self.call_sites.push(CallSite {
                    statement: header,
                    caller: procedure.to_string(),
                    callee: callee.clone(),
                });
                vec![PendingExit {
                    from: header,
                    kind: FlowEdgeKind::Sequential,
                }]
            }
            StatementKind::Read(_) | StatementKind::Print(_) | StatementKind::Assign { .. } => {
                vec![PendingExit {
                    from: header,
                    kind: FlowEdgeKind::Sequential,
                }]
            }
        }
    }
}
