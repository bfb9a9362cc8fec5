//! Generic bidirectionally indexed relation table
//!
//! One instance per relationship kind. Each fact `(a, b)` is written into
//! five index families at insertion time:
//!
//! ```text
//! forward        a            -> type(b) -> [b]
//! inverse        b            -> type(a) -> [a]
//! forward_typed  (type(a), type(b)) -> [b]
//! inverse_typed  (type(a), type(b)) -> [a]
//! tuples         (type(a), type(b)) -> [(a, b)]
//! ```
//!
//! and mirrored into the wildcard bucket of every type position it occupies,
//! so wildcard lookups are single map hits. All lists go through
//! [`DedupList`], which keeps first-insertion order and makes re-adding a
//! fact a no-op.
//!
//! Transitive-closure ("star") tables use the same type: the closure is
//! computed elsewhere and loaded with [`RelationTable::add_closure`].

use super::type_tag::TypeTag;
use crate::shared::{DedupList, StatementNumber, StatementType};
use rustc_hash::FxHashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct RelationTable<L, R, TL, TR> {
    forward: FxHashMap<L, FxHashMap<TR, DedupList<R>>>,
    inverse: FxHashMap<R, FxHashMap<TL, DedupList<L>>>,
    forward_typed: FxHashMap<(TL, TR), DedupList<R>>,
    inverse_typed: FxHashMap<(TL, TR), DedupList<L>>,
    tuples: FxHashMap<(TL, TR), DedupList<(L, R)>>,
    len: usize,
}

impl<L, R, TL, TR> Default for RelationTable<L, R, TL, TR> {
    fn default() -> Self {
        Self {
            forward: FxHashMap::default(),
            inverse: FxHashMap::default(),
            forward_typed: FxHashMap::default(),
            inverse_typed: FxHashMap::default(),
            tuples: FxHashMap::default(),
            len: 0,
        }
    }
}

impl<L, R, TL, TR> RelationTable<L, R, TL, TR>
where
    L: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
    TL: TypeTag,
    TR: TypeTag,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert fact `(a, b)`.
    ///
    /// Returns `true` if the fact was not already present.
    ///
    /// # Panics
    /// If either type is the wildcard sentinel.
    pub fn add(&mut self, a: L, type_a: TL, b: R, type_b: TR) -> bool {
        assert!(
            !type_a.is_any() && !type_b.is_any(),
            "relation facts need concrete types, got ({:?}, {:?})",
            type_a,
            type_b
        );

        let is_new = !self.holds(&a, &b);

        let by_type_b = self.forward.entry(a.clone()).or_default();
        for tb in [type_b, TR::any()] {
            by_type_b.entry(tb).or_default().insert(b.clone());
        }

        let by_type_a = self.inverse.entry(b.clone()).or_default();
        for ta in [type_a, TL::any()] {
            by_type_a.entry(ta).or_default().insert(a.clone());
        }

        for ta in [type_a, TL::any()] {
            for tb in [type_b, TR::any()] {
                self.forward_typed
                    .entry((ta, tb))
                    .or_default()
                    .insert(b.clone());
                self.inverse_typed
                    .entry((ta, tb))
                    .or_default()
                    .insert(a.clone());
                self.tuples
                    .entry((ta, tb))
                    .or_default()
                    .insert((a.clone(), b.clone()));
            }
        }

        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Insert the precomputed closure of `a`: one fact per `(b, type_b)`
    pub fn add_closure(&mut self, a: L, type_a: TL, closure: &[(R, TR)]) {
        for (b, type_b) in closure {
            self.add(a.clone(), type_a, b.clone(), *type_b);
        }
    }

    pub fn holds(&self, a: &L, b: &R) -> bool {
        self.forward
            .get(a)
            .and_then(|by_type| by_type.get(&TR::any()))
            .is_some_and(|list| list.contains(b))
    }

    /// Every `b` with `(a, b)` where `b` has `type_b`
    pub fn all_after(&self, a: &L, type_b: TR) -> &[R] {
        self.forward
            .get(a)
            .and_then(|by_type| by_type.get(&type_b))
            .map(DedupList::as_slice)
            .unwrap_or(&[])
    }

    /// Every `a` with `(a, b)` where `a` has `type_a`
    pub fn all_before(&self, b: &R, type_a: TL) -> &[L] {
        self.inverse
            .get(b)
            .and_then(|by_type| by_type.get(&type_a))
            .map(DedupList::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct right-hand values over facts matching both types
    pub fn all_after_typed(&self, type_a: TL, type_b: TR) -> &[R] {
        self.forward_typed
            .get(&(type_a, type_b))
            .map(DedupList::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct left-hand values over facts matching both types
    pub fn all_before_typed(&self, type_a: TL, type_b: TR) -> &[L] {
        self.inverse_typed
            .get(&(type_a, type_b))
            .map(DedupList::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_tuples(&self, type_a: TL, type_b: TR) -> &[(L, R)] {
        self.tuples
            .get(&(type_a, type_b))
            .map(DedupList::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct facts
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Statement to statement relations (Follows, Parent, Next, Affects, ...)
pub type StatementRelationTable =
    RelationTable<StatementNumber, StatementNumber, StatementType, StatementType>;
