//! Sparse way-count distributions for the threshold DP.
//!
//! For one threshold, every tree node ends up in one of three categories,
//! and the number of ways it does so is tracked per pair of
//! pinned-position counts. The state space is combinatorially large but
//! the realized support is small, hence a map rather than a dense array.

use std::{
    cmp::Ordering,
    ops::{Index, IndexMut},
};

use rustc_hash::FxHashMap;

/// Outcome of comparing a value against the current threshold.
///
/// The derived order `Below < Equal < Above` is the order of the
/// underlying values, so the median of three categories is the category of
/// the median value, and the minimum of two categories is the category of
/// the smaller value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Below,
    Equal,
    Above,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Below, Self::Equal, Self::Above];

    /// Classify `value` against `threshold`.
    pub fn of(value: u32, threshold: u32) -> Self {
        match value.cmp(&threshold) {
            Ordering::Less => Self::Below,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Above,
        }
    }

    /// The middle of three categories.
    pub fn median(a: Self, b: Self, c: Self) -> Self {
        let mut sorted = [a, b, c];
        sorted.sort_unstable();
        sorted[1]
    }
}

/// A sparse distribution over pairs `(below, above)`: the number of free
/// positions in a subtree pinned to take values strictly below,
/// respectively strictly above, the eventual pivot value, mapped to the
/// number of ways mod $P$ of arranging this. Entries with way-count zero
/// are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    entries: FxHashMap<(u32, u32), u32>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// The distribution holding the single entry `(below, above) -> 1`.
    pub fn singleton(below: u32, above: u32) -> Self {
        let mut result = Self::new();
        result.add((below, above), 1);
        result
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), u32)> + '_ {
        self.entries.iter().map(|(&key, &ways)| (key, ways))
    }

    /// Add `ways` to the count at `key`. Sums can cancel mod $P$; the
    /// entry is dropped again when they do.
    pub fn add(&mut self, key: (u32, u32), ways: u32) {
        if ways == 0 {
            return;
        }
        let entry = self.entries.entry(key).or_insert(0);
        *entry = modp::add(*entry, ways);
        if *entry == 0 {
            self.entries.remove(&key);
        }
    }

    /// Merge `other` into `self` additively.
    pub fn merge(&mut self, other: &Self) {
        for (key, ways) in other.iter() {
            self.add(key, ways);
        }
    }

    /// Cauchy convolution: keys add coordinatewise and way-counts
    /// multiply, over every pair of entries. This is the number of ways to
    /// satisfy two independent subtrees while summing their pinned
    /// position counts.
    pub fn convolve(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for ((below, above), ways) in self.iter() {
            for ((other_below, other_above), other_ways) in other.iter() {
                result.add(
                    (below + other_below, above + other_above),
                    modp::mul(ways, other_ways),
                );
            }
        }
        result
    }
}

/// The three per-category distributions of one tree node at one threshold.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    per_category: [Distribution; 3],
}

impl Outcome {
    /// The outcome of a node whose value is known: it lands in `category`
    /// in exactly one way, pinning no free positions.
    pub fn resolved(category: Category) -> Self {
        let mut outcome = Self::default();
        outcome[category] = Distribution::singleton(0, 0);
        outcome
    }

    /// The outcome of a single position. A fixed value lands in its own
    /// category; a free position can land in any of the three, pinning
    /// itself below or above the pivot accordingly.
    pub fn single_position(value: Option<u32>, threshold: u32) -> Self {
        match value {
            Some(value) => Self::resolved(Category::of(value, threshold)),
            None => {
                let mut outcome = Self::default();
                outcome[Category::Below] = Distribution::singleton(1, 0);
                outcome[Category::Equal] = Distribution::singleton(0, 0);
                outcome[Category::Above] = Distribution::singleton(0, 1);
                outcome
            }
        }
    }
}

impl Index<Category> for Outcome {
    type Output = Distribution;

    fn index(&self, category: Category) -> &Distribution {
        &self.per_category[category as usize]
    }
}

impl IndexMut<Category> for Outcome {
    fn index_mut(&mut self, category: Category) -> &mut Distribution {
        &mut self.per_category[category as usize]
    }
}
