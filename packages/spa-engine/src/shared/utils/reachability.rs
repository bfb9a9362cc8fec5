//! Reachability over petgraph graphs
//!
//! Closure facts (Calls*, Next*, Affects*, ...) are the nodes reachable by a
//! path of one or more edges. A node reaches itself only through a cycle.

use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Nodes reachable from `start` by a non-empty path, in BFS discovery order
pub fn reachable_from<N, E>(graph: &DiGraph<N, E>, start: NodeIndex) -> Vec<NodeIndex> {
    let mut reachable = Vec::new();
    let mut visited = FxHashSet::default();
    let mut queue: VecDeque<NodeIndex> = graph.neighbors(start).collect();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        reachable.push(node);
        queue.extend(graph.neighbors(node).filter(|n| !visited.contains(n)));
    }

    reachable
}

/// `reachable_from` mapped to node weights and sorted ascending
pub fn reachable_weights<N, E>(graph: &DiGraph<N, E>, start: NodeIndex) -> Vec<N>
where
    N: Copy + Ord,
{
    let mut weights: Vec<N> = reachable_from(graph, start)
        .into_iter()
        .map(|idx| graph[idx])
        .collect();
    weights.sort_unstable();
    weights
}
