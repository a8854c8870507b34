//! Arithmetic in the prime field of integers modulo $P = 10^9 + 7$,
//! together with the combinatorial tables the counting layer consumes.
//!
//! Every residue argument and result lies in `[0, P)`. The binomial and
//! inverse tables are evaluated at compile time; their bound
//! [`MAX_DEGREE`] covers every coefficient the power-sum machinery can
//! request, since all polynomial degrees are capped by the number of free
//! positions an input may contain.

pub mod power_sum;

/// The fixed prime modulus.
pub const P: u32 = 1_000_000_007;

/// Exclusive bound on the precomputed tables: [`binomial`] accepts
/// arguments below `MAX_DEGREE`, and [`inverse`] is a table lookup below
/// it (and a Fermat power above it).
pub const MAX_DEGREE: usize = 101;

#[macro_export]
macro_rules! const_for {
    ($i:ident in $a:literal .. $b:ident $contents:block) => {
        let mut $i = $a;
        while $i < $b {
            $contents;
            $i += 1;
        }
    };
}

/// Sum of two residues. Branch-and-correct, no division.
pub const fn add(a: u32, b: u32) -> u32 {
    let sum = a + b;
    if sum >= P {
        sum - P
    } else {
        sum
    }
}

/// Difference of two residues. Branch-and-correct, no division.
pub const fn sub(a: u32, b: u32) -> u32 {
    if a >= b {
        a - b
    } else {
        a + P - b
    }
}

/// Product of two residues. The intermediate is widened to `u64`; $P^2$
/// fits with room to spare.
pub const fn mul(a: u32, b: u32) -> u32 {
    ((a as u64 * b as u64) % P as u64) as u32
}

/// Compute $b^e$ mod $P$ by binary exponentiation.
pub const fn power(mut b: u32, mut e: u64) -> u32 {
    let mut result: u32 = 1;
    while e > 0 {
        if (e & 1) == 1 {
            result = mul(result, b);
        }
        b = mul(b, b);
        e >>= 1;
    }
    result
}

/// $(-1)^i$ as a residue.
pub const fn minus_one_to_the_n(i: usize) -> u32 {
    if i % 2 == 0 {
        1
    } else {
        P - 1
    }
}

/// Multiplicative inverse of a nonzero residue, by table lookup below
/// [`MAX_DEGREE`] and Fermat's little theorem above it.
pub fn inverse(k: u32) -> u32 {
    assert!(k > 0);
    if (k as usize) < MAX_DEGREE {
        INVERSE_TABLE[k as usize]
    } else {
        power(k, (P - 2) as u64)
    }
}

/// Binomial coefficient $\binom{n}{k}$ mod $P$ from the precomputed
/// Pascal table. Requires `n, k < MAX_DEGREE`.
pub fn binomial(n: usize, k: usize) -> u32 {
    assert!(n < MAX_DEGREE && k < MAX_DEGREE);
    BINOMIAL_TABLE[n][k]
}

const INVERSE_TABLE: [u32; MAX_DEGREE] = {
    let mut result = [0; MAX_DEGREE];
    const_for! { k in 1 .. MAX_DEGREE {
        result[k] = power(k as u32, (P - 2) as u64);
    }}
    result
};

static BINOMIAL_TABLE: [[u32; MAX_DEGREE]; MAX_DEGREE] = {
    let mut result = [[0; MAX_DEGREE]; MAX_DEGREE];
    const_for! { n in 0 .. MAX_DEGREE {
        result[n][0] = 1;
        const_for! { k in 0 .. n {
            result[n][k + 1] = add(result[n - 1][k], result[n - 1][k + 1]);
        }}
    }}
    result
};
