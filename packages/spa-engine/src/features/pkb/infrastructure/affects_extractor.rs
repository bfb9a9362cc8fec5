//! Affects / Affects* and AffectsBip / AffectsBip*
//!
//! `a1` affects `a2` when both are assignments, `a1` modifies `v`, `a2`
//! uses `v`, and some flow path `a1 -> a2` has no intermediate statement
//! that kills `v`. Over the intraprocedural CFG, assign, read and call
//! statements kill. Over the Bip graph only assign and read kill: the path
//! walks through the callee body instead of skipping the call.

use crate::features::flow_graph::FlowGraph;
use crate::features::pkb::domain::{EntityTag, ProgramKnowledgeBase, StatementRelationTable};
use crate::shared::{reachable_weights, StatementNumber, StatementType};
use petgraph::graph::DiGraph;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillPolicy {
    /// Intraprocedural: calls kill every variable the callee modifies
    CallsKill,
    /// Interprocedural: calls are transparent
    CallsTransparent,
}

impl KillPolicy {
    fn kills(&self, ty: StatementType) -> bool {
        match ty {
            StatementType::Assign | StatementType::Read => true,
            StatementType::Call => matches!(self, KillPolicy::CallsKill),
            _ => false,
        }
    }
}

/// Affects facts as `(a1, [a2 ascending])`, `a1` ascending
pub fn compute_affects(
    flow: &FlowGraph,
    kb: &ProgramKnowledgeBase,
    policy: KillPolicy,
) -> Vec<(StatementNumber, Vec<StatementNumber>)> {
    let mut facts = Vec::new();

    for &a1 in kb.statements.all(StatementType::Assign) {
        let Some(var) = kb
            .modifies_statement
            .all_after(&a1, EntityTag::Variable)
            .first()
        else {
            continue;
        };

        let mut affected = Vec::new();
        let mut visited = FxHashSet::default();
        let mut stack = flow.successors(a1);

        while let Some(stmt) = stack.pop() {
            if !visited.insert(stmt) {
                continue;
            }
            let Some(ty) = kb.statements.type_of(stmt) else {
                continue;
            };

            if ty == StatementType::Assign && kb.uses_statement.holds(&stmt, var) {
                affected.push(stmt);
            }
            if policy.kills(ty) && kb.modifies_statement.holds(&stmt, var) {
                continue;
            }
            stack.extend(flow.successors(stmt));
        }

        if !affected.is_empty() {
            affected.sort_unstable();
            facts.push((a1, affected));
        }
    }

    facts
}

/// Load base facts into `base` and their closure into `star`
pub fn load_affects(
    facts: &[(StatementNumber, Vec<StatementNumber>)],
    base: &mut StatementRelationTable,
    star: Option<&mut StatementRelationTable>,
) {
    for (a1, targets) in facts {
        for a2 in targets {
            base.add(*a1, StatementType::Assign, *a2, StatementType::Assign);
        }
    }

    let Some(star) = star else {
        return;
    };

    let mut graph: DiGraph<StatementNumber, ()> = DiGraph::new();
    let mut nodes = FxHashMap::default();
    let mut node = |graph: &mut DiGraph<StatementNumber, ()>, s: StatementNumber| {
        *nodes.entry(s).or_insert_with(|| graph.add_node(s))
    };
    let mut sources = Vec::with_capacity(facts.len());
    for (a1, targets) in facts {
        let from = node(&mut graph, *a1);
        sources.push((*a1, from));
        for a2 in targets {
            let to = node(&mut graph, *a2);
            graph.add_edge(from, to, ());
        }
    }

    for (a1, idx) in sources {
        let closure: Vec<(StatementNumber, StatementType)> = reachable_weights(&graph, idx)
            .into_iter()
            .map(|a2| (a2, StatementType::Assign))
            .collect();
        star.add_closure(a1, StatementType::Assign, &closure);
    }
}
