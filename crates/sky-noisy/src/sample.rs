// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::tournament::max_lex_not_dominated;
use sky_oracle::Oracle;

/// Extracts up to `n` skyline members from the candidate set `s`.
///
/// Each extraction runs the tournament against the incumbents collected so
/// far, with an equal share of the tolerance. Extraction stops early once
/// every remaining candidate is dominated, or on a repeated extraction: a
/// candidate that advanced through the bracket without a comparison (a lone
/// tail slot) resurfaces identically on the next pass, so a repeat signals
/// that no fresh candidate remains. The repeat check also makes the result
/// duplicate-free regardless of oracle noise.
pub fn sky_sample(oracle: &mut Oracle, s: &[usize], n: u64, tolerance: f64) -> Vec<usize> {
    let mut result = Vec::new();
    let share = tolerance / n as f64;

    for _ in 0..n {
        match max_lex_not_dominated(oracle, s, &result, share) {
            Some(z) => {
                if result.contains(&z) {
                    return result;
                }
                result.push(z);
            }
            None => break,
        }
    }

    result
}
