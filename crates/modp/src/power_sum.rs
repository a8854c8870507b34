//! Closed-form power sums over contiguous integer ranges.
//!
//! The counting layer needs $\sum_{v=l}^{r} v^x (\alpha - v)^y$ for ranges
//! whose length can be as large as the value domain, so direct summation
//! is out of the question. Everything here reduces to prefix power sums
//! $S_a(n) = \sum_{x=1}^{n} x^a$, which satisfy
//!
//! $$ (n+1)^{a+1} - 1 = \sum_{b=0}^{a} \binom{a+1}{b} S_b(n) $$
//!
//! and can therefore be computed for all $a \le k$ in $O(k^2)$ once the
//! smaller sums are known.

use crate::{add, binomial, inverse, minus_one_to_the_n, mul, power, sub, MAX_DEGREE, P};

/// $\sum_{x=1}^{n} x^a$ for $a = 0, \dots, k$, indexed by $a$.
///
/// `n` is a plain integer, not a residue; only the recurrence is carried
/// out mod $P$. Requires `k + 1 < MAX_DEGREE`.
pub fn prefix_power_sums(n: u64, k: usize) -> Vec<u32> {
    assert!(k + 1 < MAX_DEGREE);
    let n = (n % P as u64) as u32;
    let mut sums = vec![0; k + 1];
    sums[0] = n;
    for a in 1..=k {
        let mut s = sub(power(add(n, 1), (a + 1) as u64), 1);
        for b in 0..a {
            s = sub(s, mul(binomial(a + 1, b), sums[b]));
        }
        sums[a] = mul(s, inverse((a + 1) as u32));
    }
    sums
}

/// $\sum_{x=l}^{r} x^a$ for $a = 0, \dots, k$. Requires `l <= r`.
///
/// The prefix formula starts at $x = 1$; when `l == 0` the $x = 0$ term
/// contributes one to the zeroth sum and nothing elsewhere.
pub fn range_power_sums(l: u64, r: u64, k: usize) -> Vec<u32> {
    assert!(l <= r);
    let mut sums = prefix_power_sums(r, k);
    if l > 1 {
        for (a, lower) in prefix_power_sums(l - 1, k).into_iter().enumerate() {
            sums[a] = sub(sums[a], lower);
        }
    }
    if l == 0 {
        sums[0] = add(sums[0], 1);
    }
    sums
}

/// Closed form of $\sum_{v=l}^{r} v^x (\alpha - v)^y$ mod $P$, for
/// $\alpha \ge r$.
///
/// Expanding $(\alpha - v)^y$ binomially leaves only power sums of $v$:
/// term $i$ carries sign $(-1)^i$, weight $\binom{y}{i} \alpha^{y-i}$ and
/// the degree-$(x+i)$ range power sum. With $\alpha$ the largest value of
/// the domain, this is the number of ways to pick values strictly below a
/// pivot $v$ for $x$ positions and strictly above it for $y$ positions,
/// summed over every pivot in `[l, r]`.
pub fn weighted_range_sum(l: u64, r: u64, alpha: u32, x: usize, y: usize) -> u32 {
    let sums = range_power_sums(l, r, x + y);
    let mut result = 0;
    let mut alpha_pow = 1;
    for i in (0..=y).rev() {
        let term = mul(mul(sums[x + i], alpha_pow), binomial(y, i));
        result = add(result, mul(term, minus_one_to_the_n(i)));
        alpha_pow = mul(alpha_pow, alpha % P);
    }
    result
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn direct_range_sums(l: u64, r: u64, k: usize) -> Vec<u32> {
        (0..=k)
            .map(|a| (l..=r).fold(0, |acc, x| add(acc, power((x % P as u64) as u32, a as u64))))
            .collect()
    }

    #[test]
    fn prefix_small() {
        assert_eq!(prefix_power_sums(5, 3), vec![5, 15, 55, 225]);
        assert_eq!(prefix_power_sums(0, 2), vec![0, 0, 0]);
        assert_eq!(prefix_power_sums(1, 4), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn range_vs_direct() {
        for &(l, r) in &[(1, 5), (0, 4), (0, 0), (3, 3), (2, 17), (1, 1)] {
            assert_eq!(
                range_power_sums(l, r, 3),
                direct_range_sums(l, r, 3),
                "range [{l}, {r}]"
            );
        }
    }

    #[test]
    fn range_zero_power_counts_elements() {
        // the a = 0 entry is the number of integers in the range,
        // including the l = 0 adjustment
        assert_eq!(range_power_sums(0, 9, 0)[0], 10);
        assert_eq!(range_power_sums(1, 9, 0)[0], 9);
        assert_eq!(range_power_sums(7, 7, 0)[0], 1);
    }

    #[test]
    fn prefix_large_n_reduces_mod_p() {
        // sum_{x=1}^{P} x = P(P+1)/2, a multiple of P
        let sums = prefix_power_sums(P as u64, 1);
        assert_eq!(sums[1], 0);
    }

    #[test]
    fn weighted_vs_direct() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let l = rng.gen_range(0..40u64);
            let r = l + rng.gen_range(0..40u64);
            let alpha = r as u32 + rng.gen_range(0..20u32);
            let x = rng.gen_range(0..4usize);
            let y = rng.gen_range(0..4usize);
            let direct = (l..=r).fold(0, |acc, v| {
                let v = v as u32;
                add(
                    acc,
                    mul(power(v, x as u64), power(alpha - v, y as u64)),
                )
            });
            assert_eq!(
                weighted_range_sum(l, r, alpha, x, y),
                direct,
                "l={l} r={r} alpha={alpha} x={x} y={y}"
            );
        }
    }
}
