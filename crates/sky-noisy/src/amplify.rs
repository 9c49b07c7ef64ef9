// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use sky_oracle::Oracle;

/// Noise-amplified single-coordinate comparison.
///
/// Answers whether item `i` is less than item `j` on dimension `k`, wrong with
/// probability at most `tolerance`. When the oracle is already reliable enough
/// the base query is used directly; otherwise the result is the majority of
/// three recursive votes taken at doubled tolerance, skipping the third vote
/// when the first two agree.
///
/// The recursion bottoms out once the doubled tolerance reaches the oracle's
/// error probability, so the depth is bounded by `log2(p / tolerance) + 1`.
/// Drivers must not pass `tolerance == 0.0` for an oracle with positive error
/// probability; doubling zero never reaches the base case.
pub fn amplified_less(oracle: &mut Oracle, i: usize, j: usize, k: usize, tolerance: f64) -> bool {
    if oracle.error_probability() <= tolerance {
        return oracle.less(i, j, k);
    }

    let first = amplified_less(oracle, i, j, k, 2.0 * tolerance);
    let second = amplified_less(oracle, i, j, k, 2.0 * tolerance);
    if first == second {
        first
    } else {
        amplified_less(oracle, i, j, k, 2.0 * tolerance)
    }
}
