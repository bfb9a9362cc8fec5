//! Statement-level control flow graphs
//!
//! Nodes are statement numbers (one node per statement, no basic blocks).
//! The same [`FlowGraph`] type carries both the intraprocedural CFG and the
//! branch-into-procedure graph.

use crate::shared::{reachable_weights, Name, StatementNumber};
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowEdgeKind {
    Sequential,
    TrueBranch,
    FalseBranch,
    LoopEnter,
    LoopBack,
    LoopExit,
    /// Call statement to the callee's first statement
    Call,
    /// Callee exit to the statement after the call
    Return,
}

impl FlowEdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowEdgeKind::Sequential => "SEQUENTIAL",
            FlowEdgeKind::TrueBranch => "TRUE",
            FlowEdgeKind::FalseBranch => "FALSE",
            FlowEdgeKind::LoopEnter => "LOOP_ENTER",
            FlowEdgeKind::LoopBack => "LOOP_BACK",
            FlowEdgeKind::LoopExit => "LOOP_EXIT",
            FlowEdgeKind::Call => "CALL",
            FlowEdgeKind::Return => "RETURN",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    graph: DiGraph<StatementNumber, FlowEdgeKind>,
    nodes: FxHashMap<StatementNumber, NodeIndex>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `stmt`
    pub fn add_statement(&mut self, stmt: StatementNumber) -> NodeIndex {
        if let Some(idx) = self.nodes.get(&stmt) {
            return *idx;
        }
        let idx = self.graph.add_node(stmt);
        self.nodes.insert(stmt, idx);
        idx
    }

    /// Add `from -> to` unless an edge between them already exists
    pub fn add_edge(&mut self, from: StatementNumber, to: StatementNumber, kind: FlowEdgeKind) {
        let a = self.add_statement(from);
        let b = self.add_statement(to);
        if self.graph.find_edge(a, b).is_none() {
            self.graph.add_edge(a, b, kind);
        }
    }

    pub fn contains(&self, stmt: StatementNumber) -> bool {
        self.nodes.contains_key(&stmt)
    }

    /// Direct successors, ascending
    pub fn successors(&self, stmt: StatementNumber) -> Vec<StatementNumber> {
        let Some(idx) = self.nodes.get(&stmt) else {
            return Vec::new();
        };
        let mut out: Vec<StatementNumber> =
            self.graph.neighbors(*idx).map(|n| self.graph[n]).collect();
        out.sort_unstable();
        out
    }

    /// Statements reachable by a path of one or more edges, ascending
    pub fn reachable_from(&self, stmt: StatementNumber) -> Vec<StatementNumber> {
        match self.nodes.get(&stmt) {
            Some(idx) => reachable_weights(&self.graph, *idx),
            None => Vec::new(),
        }
    }

    /// All statements, ascending
    pub fn statements(&self) -> Vec<StatementNumber> {
        let mut out: Vec<StatementNumber> = self.nodes.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Every edge as `(from, to, kind)`
    pub fn edges(&self) -> impl Iterator<Item = (StatementNumber, StatementNumber, FlowEdgeKind)> + '_ {
        use petgraph::visit::EdgeRef;
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()], *e.weight()))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edge count per kind, e.g. `CALL=1 SEQUENTIAL=3` (kinds by name)
    pub fn edge_summary(&self) -> String {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for kind in self.graph.edge_weights() {
            *counts.entry(kind.as_str()).or_default() += 1;
        }
        counts
            .iter()
            .map(|(kind, n)| format!("{}={}", kind, n))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Entry and exit statements of one procedure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureFlow {
    pub name: Name,
    pub entry: StatementNumber,
    /// Statements after which control leaves the procedure
    pub exits: Vec<StatementNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub statement: StatementNumber,
    pub caller: Name,
    pub callee: Name,
}

/// Intraprocedural CFG of every procedure, plus what the Bip builder needs
#[derive(Debug, Clone, Default)]
pub struct ControlFlowGraph {
    pub flow: FlowGraph,
    pub procedures: Vec<ProcedureFlow>,
    pub call_sites: Vec<CallSite>,
}

impl ControlFlowGraph {
    pub fn procedure(&self, name: &str) -> Option<&ProcedureFlow> {
        self.procedures.iter().find(|p| p.name == name)
    }

    pub fn call_site(&self, stmt: StatementNumber) -> Option<&CallSite> {
        self.call_sites.iter().find(|c| c.statement == stmt)
    }
}
