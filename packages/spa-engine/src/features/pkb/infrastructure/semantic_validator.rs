//! Semantic checks run before any fact is extracted

use super::call_graph::CallGraph;
use crate::errors::{Result, SpaError};
use crate::shared::{Program, StatementKind};
use rustc_hash::FxHashSet;
use tracing::warn;

/// Reject programs the design extractor cannot handle.
///
/// Checks, in order: at least one procedure, unique non-empty procedures,
/// positive and unique statement numbers, calls to declared procedures
/// only, no recursion.
pub fn validate_program(program: &Program) -> Result<()> {
    check(program).inspect_err(|err| warn!(error = %err, "Program rejected"))
}

fn check(program: &Program) -> Result<()> {
    if program.procedures.is_empty() {
        return Err(SpaError::semantic("program has no procedures"));
    }

    let mut names = FxHashSet::default();
    for proc in &program.procedures {
        if !names.insert(proc.name.as_str()) {
            return Err(SpaError::semantic(format!(
                "procedure '{}' is defined twice",
                proc.name
            )));
        }
        if proc.body.is_empty() {
            return Err(SpaError::semantic(format!(
                "procedure '{}' has no statements",
                proc.name
            )));
        }
    }

    let mut numbers = FxHashSet::default();
    let mut first_error: Option<SpaError> = None;
    program.for_each_statement(|proc, stmt| {
        if first_error.is_some() {
            return;
        }
        if stmt.number == 0 {
            first_error = Some(SpaError::semantic(format!(
                "statement numbers start at 1, found 0 in procedure '{}'",
                proc.name
            )));
        } else if !numbers.insert(stmt.number) {
            first_error = Some(SpaError::semantic(format!(
                "statement number {} is used twice",
                stmt.number
            )));
        } else if let StatementKind::Call(callee) = &stmt.kind {
            if !names.contains(callee.as_str()) {
                first_error = Some(SpaError::semantic(format!(
                    "statement {} calls undefined procedure '{}'",
                    stmt.number, callee
                )));
            }
        }
    });
    if let Some(err) = first_error {
        return Err(err);
    }

    CallGraph::build(program).topological_order()?;
    Ok(())
}
