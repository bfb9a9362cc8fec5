//! Entity tables and the syntactic relations (Follows, Parent)
//!
//! Single pre-order pass per procedure. Statements are numbered in
//! pre-order, so Follows, Follows* and Parent* facts are inserted in
//! ascending order of the left statement. A Parent fact is inserted when
//! its child is visited, before the walk descends into that child, so both
//! sides of Parent come back ascending.

use crate::features::pkb::domain::ProgramKnowledgeBase;
use crate::shared::{Program, Statement, StatementKind, StatementNumber, StatementType};
use tracing::debug;

pub fn extract_entities(program: &Program, kb: &mut ProgramKnowledgeBase) {
    for proc in &program.procedures {
        if let Some((first, last)) = proc.line_range() {
            kb.procedures.add(proc.name.clone(), first, last);
        }

        proc.for_each_statement(|stmt| {
            kb.statements.add(stmt.number, stmt.statement_type());

            match &stmt.kind {
                StatementKind::Read(name) | StatementKind::Print(name) | StatementKind::Call(name) => {
                    kb.statements.set_name(stmt.number, name.clone());
                }
                _ => {}
            }

            if let Some(target) = stmt.kind.modified_variable() {
                kb.variables.add(target);
            }
            for var in stmt.kind.used_variables() {
                kb.variables.add(var);
            }
            for value in stmt.kind.constants() {
                kb.constants.add(value);
            }
        });
    }

    debug!(
        statements = kb.statements.len(),
        variables = kb.variables.len(),
        constants = kb.constants.len(),
        procedures = kb.procedures.len(),
        "Extracted entities"
    );
}

pub fn extract_follows_and_parent(program: &Program, kb: &mut ProgramKnowledgeBase) {
    for proc in &program.procedures {
        walk_list(&proc.body, None, kb);
    }

    debug!(
        follows = kb.follows.len(),
        follows_star = kb.follows_star.len(),
        parent = kb.parent.len(),
        parent_star = kb.parent_star.len(),
        "Extracted Follows/Parent"
    );
}

fn walk_list(
    list: &[Statement],
    parent: Option<(StatementNumber, StatementType)>,
    kb: &mut ProgramKnowledgeBase,
) {
    for (i, stmt) in list.iter().enumerate() {
        let ty = stmt.statement_type();
        let later: Vec<(StatementNumber, StatementType)> = list[i + 1..]
            .iter()
            .map(|s| (s.number, s.statement_type()))
            .collect();

        if let Some(&(next, next_ty)) = later.first() {
            kb.follows.add(stmt.number, ty, next, next_ty);
        }
        kb.follows_star.add_closure(stmt.number, ty, &later);

        if let Some((container, container_ty)) = parent {
            kb.parent.add(container, container_ty, stmt.number, ty);
        }

        let children = stmt.kind.child_lists();
        if children.is_empty() {
            continue;
        }

        kb.parent_star
            .add_closure(stmt.number, ty, &descendants(&children));
        for child in children {
            walk_list(child, Some((stmt.number, ty)), kb);
        }
    }
}

/// Every statement nested in `lists`, pre-order
fn descendants(lists: &[&[Statement]]) -> Vec<(StatementNumber, StatementType)> {
    fn collect(list: &[Statement], out: &mut Vec<(StatementNumber, StatementType)>) {
        for stmt in list {
            out.push((stmt.number, stmt.statement_type()));
            for child in stmt.kind.child_lists() {
                collect(child, out);
            }
        }
    }

    let mut out = Vec::new();
    for list in lists {
        collect(list, &mut out);
    }
    out
}
