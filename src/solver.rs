//! The candidate-range sweep.
//!
//! The value domain `[0, m)` splits into candidate ranges: one per
//! distinct fixed value, plus the maximal gaps between consecutive fixed
//! values and the domain ends. Within one range every fixed position
//! compares the same way against every candidate pivot, so a single DP
//! pass at the range's lower end covers the whole range; the per-pivot
//! freedom is restored in closed form by the weighted range sum.

use std::collections::BTreeMap;

use modp::power_sum::weighted_range_sum;

use crate::{distribution::Category, threshold, tree::ReductionTree};

/// Count the completions of `seq` with values in `[0, domain)` whose
/// ternary median reduction equals the true median of the completed
/// array, mod [`modp::P`].
///
/// `seq.len()` must be odd, fixed values must lie in `[0, domain)`, and
/// the number of free positions must stay below `modp::MAX_DEGREE - 1`.
/// Pure and deterministic; each call solves from scratch.
pub fn solve(seq: &[Option<u32>], domain: u32) -> u32 {
    let n = seq.len();
    assert!(n % 2 == 1, "sequence length must be odd");
    assert!(domain > 0);
    let k = (n - 1) / 2;

    let mut multiplicity: BTreeMap<u32, usize> = BTreeMap::new();
    let mut free = 0usize;
    for &value in seq {
        match value {
            Some(value) => {
                assert!(value < domain);
                *multiplicity.entry(value).or_insert(0) += 1;
            }
            None => free += 1,
        }
    }
    assert!(free + 1 < modp::MAX_DEGREE, "too many free positions");

    // candidate ranges: every distinct fixed value alone, and the gaps
    // between them
    let fixed: Vec<u32> = multiplicity.keys().copied().collect();
    let mut ranges: Vec<(u32, u32)> = fixed.iter().map(|&value| (value, value)).collect();
    for i in 0..=fixed.len() {
        let lower = if i == 0 { 0 } else { fixed[i - 1] + 1 };
        let upper = if i == fixed.len() { domain } else { fixed[i] };
        if lower < upper {
            ranges.push((lower, upper - 1));
        }
    }
    ranges.sort_unstable();

    let tree = ReductionTree::build(seq);

    let mut answer = 0;
    let mut count_less = 0usize;
    let mut count_greater = n - free;
    for &(l, r) in &ranges {
        let count_eq = if l == r {
            multiplicity.get(&l).copied().unwrap_or(0)
        } else {
            0
        };
        count_greater -= count_eq;

        // room left on each side of the median position
        let max_less = k as i64 - count_less as i64;
        let max_greater = (n - k - 1) as i64 - count_greater as i64;
        if max_less >= 0 && max_greater >= 0 {
            let outcome = threshold::root_outcome(&tree, seq, l);
            for ((below, above), ways) in outcome[Category::Equal].iter() {
                if below as i64 > max_less || above as i64 > max_greater {
                    continue;
                }
                let placements = weighted_range_sum(
                    l as u64,
                    r as u64,
                    domain - 1,
                    below as usize,
                    above as usize,
                );
                answer = modp::add(answer, modp::mul(ways, placements));
            }
        }

        count_less += count_eq;
    }
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_free_element_counts_whole_domain() {
        // with n = 1 the element is its own median, so every value works
        for domain in 1..8 {
            assert_eq!(solve(&[None], domain), domain);
        }
    }

    #[test]
    fn fully_fixed_sequence_is_zero_or_one() {
        // no free positions: the answer is 1 exactly when the reduction
        // already equals the median
        let seq = vec![Some(0), Some(1), Some(2)];
        assert_eq!(solve(&seq, 3), 1);

        // reduction min(0, 1) = 0 != median 1 for [0, 1] ... n must be
        // odd, so use a 5-element counterexample: [1, 0, 2, 2, 0] has
        // pieces (1, 0), (2, 2), (0) -> min 0, min 2, 0 -> median 0, but
        // the true median is 1
        let seq = vec![Some(1), Some(0), Some(2), Some(2), Some(0)];
        assert_eq!(solve(&seq, 3), 0);
    }

    #[test]
    fn infeasible_ranges_contribute_nothing() {
        // both fixed values sit at 9, so every range below 9 fails the
        // max_greater budget; the answer comes from the range [9, 9] alone
        // and every choice of the free slot keeps the reduction at the
        // median 9
        let seq = vec![Some(9), Some(9), None];
        assert_eq!(solve(&seq, 10), 10);
    }

    #[test]
    fn solve_is_pure() {
        let seq = vec![None, Some(3), None, Some(1), None];
        assert_eq!(solve(&seq, 5), solve(&seq, 5));
    }
}
