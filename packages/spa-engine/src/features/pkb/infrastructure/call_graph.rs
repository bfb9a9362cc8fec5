//! Procedure call graph
//!
//! One node per declared procedure, one edge per (caller, callee) pair no
//! matter how many call statements connect them. Calls to undeclared
//! procedures are left out; the semantic validator reports them.

use crate::errors::{Result, SpaError};
use crate::shared::{reachable_from, Name, Program, StatementKind};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct CallGraph {
    graph: DiGraph<Name, ()>,
    nodes: FxHashMap<Name, NodeIndex>,
}

impl CallGraph {
    pub fn build(program: &Program) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = FxHashMap::default();

        for proc in &program.procedures {
            nodes
                .entry(proc.name.clone())
                .or_insert_with(|| graph.add_node(proc.name.clone()));
        }

        for proc in &program.procedures {
            let caller = nodes[&proc.name];
            proc.for_each_statement(|stmt| {
                if let StatementKind::Call(callee) = &stmt.kind {
                    if let Some(&target) = nodes.get(callee) {
                        if graph.find_edge(caller, target).is_none() {
                            graph.add_edge(caller, target, ());
                        }
                    }
                }
            });
        }

        Self { graph, nodes }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Procedures with callers before callees
    ///
    /// Fails with a semantic error naming a procedure on a call cycle.
    pub fn topological_order(&self) -> Result<Vec<&str>> {
        toposort(&self.graph, None)
            .map(|order| order.into_iter().map(|idx| self.graph[idx].as_str()).collect())
            .map_err(|cycle| {
                SpaError::semantic(format!(
                    "recursive call chain through procedure '{}'",
                    self.graph[cycle.node_id()]
                ))
            })
    }

    /// Direct callees in declaration order
    pub fn callees(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.nodes.get(name) else {
            return Vec::new();
        };
        let mut out: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        out.sort_unstable();
        out.into_iter().map(|n| self.graph[n].as_str()).collect()
    }

    /// Every procedure reachable through one or more calls, in declaration order
    pub fn transitive_callees(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.nodes.get(name) else {
            return Vec::new();
        };
        let mut out = reachable_from(&self.graph, idx);
        out.sort_unstable();
        out.into_iter().map(|n| self.graph[n].as_str()).collect()
    }
}
