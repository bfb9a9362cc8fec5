//! Clause rewrites applied before grouping
//!
//! - with-value substitution: `with n = 12` fixes `n`, so other clauses can
//!   use the literal instead of enumerating `n`
//! - duplicate removal: a clause written twice is evaluated once

use crate::features::query_optimizer::domain::{Clause, Reference};
use crate::shared::deduplicated_insert;
use rustc_hash::FxHashSet;
use tracing::debug;

/// `(synonym name, literal)` fixed by a with clause, if any
fn fixed_value(clause: &Clause) -> Option<(String, Reference)> {
    let Clause::With { left, right } = clause else {
        return None;
    };
    let (target, value) = if left.is_value() && right.can_initiate_substitution() {
        (right, left)
    } else if right.is_value() && left.can_initiate_substitution() {
        (left, right)
    } else {
        return None;
    };
    let name = target.synonym()?.name.clone();
    Some((name, value.clone()))
}

/// Replace substitutable references to `name` in a such-that or with clause
fn substitute(clause: &mut Clause, name: &str, value: &Reference) -> usize {
    let (left, right) = match clause {
        Clause::SuchThat { left, right, .. } | Clause::With { left, right } => (left, right),
        Clause::Pattern(_) => return 0,
    };
    let mut replaced = 0;
    for r in [left, right] {
        let matches = r.can_be_substituted() && r.synonym().is_some_and(|s| s.name == name);
        if matches {
            *r = value.clone();
            replaced += 1;
        }
    }
    replaced
}

/// Propagate `with x = literal` into every other clause, in clause order.
///
/// Returns the number of references replaced. The with clause itself stays,
/// so `x` remains bound for the result.
pub fn substitute_with_values(clauses: &mut [Clause]) -> usize {
    let mut replaced = 0;
    for i in 0..clauses.len() {
        let Some((name, value)) = fixed_value(&clauses[i]) else {
            continue;
        };
        for (j, clause) in clauses.iter_mut().enumerate() {
            if j != i {
                replaced += substitute(clause, &name, &value);
            }
        }
    }
    if replaced > 0 {
        debug!(replaced, "Substituted with-clause values");
    }
    replaced
}

/// Keep the first of structurally equal clauses. Returns how many were dropped.
pub fn remove_duplicate_clauses(clauses: &mut Vec<Clause>) -> usize {
    let before = clauses.len();
    let mut kept = Vec::with_capacity(before);
    let mut seen = FxHashSet::default();
    for clause in clauses.drain(..) {
        deduplicated_insert(clause, &mut kept, &mut seen);
    }
    *clauses = kept;
    let removed = before - clauses.len();
    if removed > 0 {
        debug!(removed, "Removed duplicate clauses");
    }
    removed
}
