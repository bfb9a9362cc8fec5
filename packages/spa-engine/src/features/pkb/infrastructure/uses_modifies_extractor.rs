//! Uses, Modifies and Calls
//!
//! Procedures are summarised callee-first (reverse topological call order)
//! so a call statement can take its callee's complete sets. Facts are then
//! written in program order.

use super::call_graph::CallGraph;
use crate::errors::Result;
use crate::features::pkb::domain::{EntityTag, ProgramKnowledgeBase};
use crate::shared::{DedupList, Name, Program, Statement, StatementKind, StatementNumber};
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct VariableSets {
    uses: DedupList<Name>,
    modifies: DedupList<Name>,
}

impl VariableSets {
    fn absorb(&mut self, other: &VariableSets) {
        for v in other.uses.iter() {
            self.uses.insert(v.clone());
        }
        for v in other.modifies.iter() {
            self.modifies.insert(v.clone());
        }
    }
}

#[derive(Default)]
struct Summaries {
    procedures: FxHashMap<Name, VariableSets>,
    statements: FxHashMap<StatementNumber, VariableSets>,
}

impl Summaries {
    fn summarise_list(&mut self, list: &[Statement]) -> VariableSets {
        let mut sets = VariableSets::default();
        for stmt in list {
            let own = self.summarise_statement(stmt);
            sets.absorb(&own);
            self.statements.insert(stmt.number, own);
        }
        sets
    }

    fn summarise_statement(&mut self, stmt: &Statement) -> VariableSets {
        let mut sets = VariableSets::default();

        if let Some(target) = stmt.kind.modified_variable() {
            sets.modifies.insert(target.to_string());
        }
        for var in stmt.kind.used_variables() {
            sets.uses.insert(var.to_string());
        }

        match &stmt.kind {
            StatementKind::Call(callee) => {
                if let Some(summary) = self.procedures.get(callee) {
                    sets.absorb(summary);
                }
            }
            StatementKind::While { .. } | StatementKind::If { .. } => {
                for child in stmt.kind.child_lists() {
                    let nested = self.summarise_list(child);
                    sets.absorb(&nested);
                }
            }
            _ => {}
        }

        sets
    }
}

pub fn extract_uses_modifies(
    program: &Program,
    call_graph: &CallGraph,
    kb: &mut ProgramKnowledgeBase,
) -> Result<()> {
    let mut summaries = Summaries::default();

    for name in call_graph.topological_order()?.into_iter().rev() {
        if let Some(proc) = program.procedure(name) {
            let sets = summaries.summarise_list(&proc.body);
            summaries.procedures.insert(proc.name.clone(), sets);
        }
    }

    for proc in &program.procedures {
        proc.for_each_statement(|stmt| {
            let Some(sets) = summaries.statements.get(&stmt.number) else {
                return;
            };
            let ty = stmt.statement_type();
            for v in sets.uses.iter() {
                kb.uses_statement
                    .add(stmt.number, ty, v.clone(), EntityTag::Variable);
            }
            for v in sets.modifies.iter() {
                kb.modifies_statement
                    .add(stmt.number, ty, v.clone(), EntityTag::Variable);
            }
        });

        if let Some(sets) = summaries.procedures.get(&proc.name) {
            for v in sets.uses.iter() {
                kb.uses_procedure.add(
                    proc.name.clone(),
                    EntityTag::Procedure,
                    v.clone(),
                    EntityTag::Variable,
                );
            }
            for v in sets.modifies.iter() {
                kb.modifies_procedure.add(
                    proc.name.clone(),
                    EntityTag::Procedure,
                    v.clone(),
                    EntityTag::Variable,
                );
            }
        }
    }

    debug!(
        uses = kb.uses_statement.len(),
        modifies = kb.modifies_statement.len(),
        uses_procedure = kb.uses_procedure.len(),
        modifies_procedure = kb.modifies_procedure.len(),
        "Extracted Uses/Modifies"
    );
    Ok(())
}

pub fn extract_calls(program: &Program, call_graph: &CallGraph, kb: &mut ProgramKnowledgeBase) {
    for proc in &program.procedures {
        for callee in call_graph.callees(&proc.name) {
            kb.calls.add(
                proc.name.clone(),
                EntityTag::Procedure,
                callee.to_string(),
                EntityTag::Procedure,
            );
        }

        let closure: Vec<(Name, EntityTag)> = call_graph
            .transitive_callees(&proc.name)
            .into_iter()
            .map(|callee| (callee.to_string(), EntityTag::Procedure))
            .collect();
        kb.calls_star
            .add_closure(proc.name.clone(), EntityTag::Procedure, &closure);
    }

    debug!(
        calls = kb.calls.len(),
        calls_star = kb.calls_star.len(),
        "Extracted Calls"
    );
}
