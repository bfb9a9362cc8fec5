//! Clause group sorter
//!
//! Orders the clauses of one connected group so that cheap clauses run
//! first and every clause after the first shares a synonym with something
//! already evaluated (no cross products inside a group).
//!
//! Cost of an order: picking a clause while `k` clauses remain (itself
//! included) costs `k * weight`. The exact search is a top-down DP over the
//! set of remaining clauses, encoded as a `u64` bitmask:
//!
//! ```text
//! best(remaining) = min over c in candidates(remaining) of
//!                   popcount(remaining) * w[c] + best(remaining - c)
//! ```
//!
//! `candidates` depends only on `remaining` (visited is its complement), so
//! the memo is keyed on the mask alone and shared between seeds.

use crate::config::SeedStrategy;
use crate::features::query_optimizer::domain::Clause;
use rustc_hash::FxHashMap;

use super::clause_classifier::clause_weight;

/// Most clauses one sorter can hold (one bit each)
pub const MAX_SORTABLE: usize = 64;

/// Result of sorting one group: positions into the input, and their cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    pub order: Vec<usize>,
    pub cost: u64,
}

/// Per-group sorting context
///
/// Built for one group and dropped afterwards; holds no state shared
/// between groups or queries.
#[derive(Debug)]
pub struct ClauseGroupSorter {
    weights: Vec<u64>,
    /// Bit `j` of `adjacency[i]` is set when clauses `i` and `j` share a synonym
    adjacency: Vec<u64>,
    memo: FxHashMap<u64, (u64, usize)>,
}

impl ClauseGroupSorter {
    pub fn new(clauses: &[&Clause]) -> Self {
        let weights = clauses.iter().map(|c| clause_weight(c)).collect();
        let mut adjacency = vec![0u64; clauses.len()];
        for i in 0..clauses.len() {
            for j in (i + 1)..clauses.len() {
                if clauses[i].shares_synonym(clauses[j]) {
                    adjacency[i] |= 1 << j;
                    adjacency[j] |= 1 << i;
                }
            }
        }
        Self::from_parts(weights, adjacency)
    }

    /// Sorter over raw weights and adjacency masks
    ///
    /// # Panics
    /// When there are more than 64 nodes or the two vectors differ in length.
    pub fn from_parts(weights: Vec<u64>, adjacency: Vec<u64>) -> Self {
        assert!(
            weights.len() <= MAX_SORTABLE,
            "clause group of {} exceeds the {}-clause limit",
            weights.len(),
            MAX_SORTABLE
        );
        assert_eq!(weights.len(), adjacency.len());
        Self {
            weights,
            adjacency,
            memo: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Memoised states so far
    pub fn states_explored(&self) -> usize {
        self.memo.len()
    }

    fn full_mask(&self) -> u64 {
        match self.len() {
            MAX_SORTABLE => u64::MAX,
            n => (1u64 << n) - 1,
        }
    }

    /// Next-pick candidates for a remaining set.
    ///
    /// Neighbours of the visited clauses that are still remaining; all
    /// remaining clauses when nothing is visited yet or no neighbour is left.
    pub fn candidates(&self, remaining: u64) -> u64 {
        let visited = self.full_mask() & !remaining;
        if visited == 0 {
            return remaining;
        }
        let neighbours = bits(visited).fold(0u64, |acc, i| acc | self.adjacency[i]);
        match neighbours & remaining {
            0 => remaining,
            reachable => reachable,
        }
    }

    /// Cost of picking `node` first, given the full set
    fn seed_cost(&mut self, node: usize) -> u64 {
        let full = self.full_mask();
        self.len() as u64 * self.weights[node] + self.best(full & !(1u64 << node))
    }

    fn best(&mut self, remaining: u64) -> u64 {
        if remaining == 0 {
            return 0;
        }
        if let Some(&(cost, _)) = self.memo.get(&remaining) {
            return cost;
        }
        let k = u64::from(remaining.count_ones());
        let mut best: Option<(u64, usize)> = None;
        for node in bits(self.candidates(remaining)) {
            let cost = k * self.weights[node] + self.best(remaining & !(1u64 << node));
            if best.map_or(true, |(b, _)| cost < b) {
                best = Some((cost, node));
            }
        }
        // candidates of a non-empty mask are never empty
        let (cost, next) = best.unwrap_or((0, 0));
        self.memo.insert(remaining, (cost, next));
        cost
    }

    /// Seeds tried by `strategy`, ascending
    pub fn seeds(&self, strategy: SeedStrategy) -> Vec<usize> {
        match strategy {
            SeedStrategy::AllNodes => (0..self.len()).collect(),
            SeedStrategy::MinWeight => {
                let min = self.weights.iter().copied().min().unwrap_or(0);
                (0..self.len()).filter(|&i| self.weights[i] == min).collect()
            }
        }
    }

    /// Exact order for `strategy`; ties go to the lower seed and node index
    pub fn arrange(&mut self, strategy: SeedStrategy) -> Arrangement {
        if self.is_empty() {
            return Arrangement {
                order: Vec::new(),
                cost: 0,
            };
        }

        let mut best: Option<(u64, usize)> = None;
        for seed in self.seeds(strategy) {
            let cost = self.seed_cost(seed);
            if best.map_or(true, |(b, _)| cost < b) {
                best = Some((cost, seed));
            }
        }
        let (cost, seed) = best.unwrap_or((0, 0));

        let mut order = Vec::with_capacity(self.len());
        order.push(seed);
        let mut remaining = self.full_mask() & !(1u64 << seed);
        while remaining != 0 {
            let Some(&(_, next)) = self.memo.get(&remaining) else {
                break;
            };
            order.push(next);
            remaining &= !(1u64 << next);
        }

        Arrangement { order, cost }
    }

    /// Greedy order: cheapest candidate at each step, lower index on ties
    pub fn arrange_greedy(&self) -> Arrangement {
        let mut remaining = self.full_mask();
        let mut order = Vec::with_capacity(self.len());
        let mut cost = 0;
        while remaining != 0 {
            let k = u64::from(remaining.count_ones());
            let Some(next) = bits(self.candidates(remaining)).min_by_key(|&i| (self.weights[i], i))
            else {
                break;
            };
            cost += k * self.weights[next];
            order.push(next);
            remaining &= !(1u64 << next);
        }
        Arrangement { order, cost }
    }

    /// Cost of an explicit order, `None` if it breaks the candidate rule
    pub fn cost_of(&self, order: &[usize]) -> Option<u64> {
        let mut remaining = self.full_mask();
        let mut cost = 0;
        for &node in order {
            if node >= self.len() || self.candidates(remaining) & (1u64 << node) == 0 {
                return None;
            }
            cost += u64::from(remaining.count_ones()) * self.weights[node];
            remaining &= !(1u64 << node);
        }
        (remaining == 0).then_some(cost)
    }
}

/// Set bit positions of `mask`, ascending
fn bits(mut mask: u64) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let i = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(i)
    })
}
