//! The per-threshold distribution DP over the reduction tree.
//!
//! For a fixed threshold every position classifies as below, equal or
//! above it; free positions take all three roles at once, each role
//! pinning the position's eventual value to one side of the pivot. The DP
//! propagates per-category [`Distribution`]s from the leaves to the root:
//! sibling distributions combine by Cauchy convolution, and the combined
//! mass lands in the category the node's reduction rule selects (the
//! minimum for a two-position leaf, the median for an internal node).
//!
//! Outcomes are recomputed from scratch for every threshold; nothing is
//! cached across thresholds.

use itertools::iproduct;

use crate::{
    distribution::{Category, Outcome},
    tree::ReductionTree,
};

/// The root's outcome at `threshold`.
pub fn root_outcome(tree: &ReductionTree, seq: &[Option<u32>], threshold: u32) -> Outcome {
    outcome_at(tree, seq, tree.root(), threshold)
}

fn outcome_at(tree: &ReductionTree, seq: &[Option<u32>], id: usize, threshold: u32) -> Outcome {
    let node = tree.node(id);
    if let Some(value) = node.known {
        return Outcome::resolved(Category::of(value, threshold));
    }

    match node.children {
        None => {
            let (l, r) = node.range;
            let first = Outcome::single_position(seq[l], threshold);
            if l == r {
                return first;
            }
            let second = Outcome::single_position(seq[r], threshold);

            // the leaf's value is the minimum of its two positions
            let mut combined = Outcome::default();
            for (c1, c2) in iproduct!(Category::ALL, Category::ALL) {
                if first[c1].is_empty() || second[c2].is_empty() {
                    continue;
                }
                combined[c1.min(c2)].merge(&first[c1].convolve(&second[c2]));
            }
            combined
        }
        Some(children) => {
            let outcomes =
                children.map(|child| outcome_at(tree, seq, child, threshold));

            // the node's value is the median of its three children
            let mut combined = Outcome::default();
            for (c1, c2) in iproduct!(Category::ALL, Category::ALL) {
                if outcomes[0][c1].is_empty() || outcomes[1][c2].is_empty() {
                    continue;
                }
                let pair = outcomes[0][c1].convolve(&outcomes[1][c2]);
                for c3 in Category::ALL {
                    if outcomes[2][c3].is_empty() {
                        continue;
                    }
                    combined[Category::median(c1, c2, c3)]
                        .merge(&pair.convolve(&outcomes[2][c3]));
                }
            }
            combined
        }
    }
}
