//! Deduplicated insert
//!
//! Every index in the knowledge base is an insertion-ordered list paired with
//! a membership set. All writes go through [`deduplicated_insert`] so a fact
//! added twice is stored once and list order stays first-insertion order.

use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::hash::Hash;

/// Append `value` to `list` unless `seen` already holds it.
///
/// Returns `true` when the value was new.
pub fn deduplicated_insert<T>(value: T, list: &mut Vec<T>, seen: &mut FxHashSet<T>) -> bool
where
    T: Clone + Eq + Hash,
{
    if seen.contains(&value) {
        return false;
    }
    seen.insert(value.clone());
    list.push(value);
    true
}

/// Insertion-ordered list with O(1) duplicate rejection
#[derive(Debug, Clone)]
pub struct DedupList<T> {
    items: Vec<T>,
    seen: FxHashSet<T>,
}

impl<T> Default for DedupList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seen: FxHashSet::default(),
        }
    }
}

impl<T: Clone + Eq + Hash> DedupList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: T) -> bool {
        deduplicated_insert(value, &mut self.items, &mut self.seen)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.seen.contains(value)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for DedupList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for v in iter {
            list.insert(v);
        }
        list
    }
}

impl<T: Serialize> Serialize for DedupList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
