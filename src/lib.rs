#![allow(clippy::many_single_char_names)]

//! Count the completions of a partially specified array whose ternary
//! median reduction equals the array's true median.
//!
//! The reduction value of an array is the result of recursively splitting
//! it into three near-equal contiguous blocks and taking the median of
//! the three sub-results (blocks of at most two positions reduce to their
//! minimum). Given a sequence over `[0, m)` with some positions free,
//! [`solve`] counts, mod [`modp::P`], the ways to fill the free positions
//! so that the reduction equals the k-th order statistic, k = (n-1)/2.

pub mod distribution;
pub mod solver;
pub mod threshold;
pub mod tree;
pub mod utils;

pub use solver::solve;
