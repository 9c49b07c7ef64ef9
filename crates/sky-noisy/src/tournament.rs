// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::dominance::less_lex_not_dominated;
use sky_core::Ternary;
use sky_oracle::Oracle;

/// Larger of two candidates under the tournament ordering.
///
/// `None` stands for a group eliminated in an earlier round; a lone live
/// candidate advances unexamined, and a pair with no order (both dominated)
/// collapses to `None`. Because the lone-survivor rule involves no
/// comparison, a dominated candidate whose partner group collapsed can ride
/// the bracket upward; the sampling layer stops on the resulting repeated
/// extraction.
pub fn max2_lex_not_dominated(
    oracle: &mut Oracle,
    i: Option<usize>,
    j: Option<usize>,
    c: &[usize],
    tolerance: f64,
) -> Option<usize> {
    match (i, j) {
        (None, None) => None,
        (Some(_), None) => i,
        (None, Some(_)) => j,
        (Some(left), Some(right)) => {
            match less_lex_not_dominated(oracle, left, right, c, tolerance) {
                Ternary::True => j,
                Ternary::False => i,
                Ternary::Unknown => None,
            }
        }
    }
}

/// Tournament maximum over a group of one to four candidates.
///
/// A lone candidate is returned without any comparison; groups of three and
/// four split the tolerance across their internal rounds. Any other group
/// size is an invariant violation and panics.
pub fn max4_lex_not_dominated(
    oracle: &mut Oracle,
    group: &[Option<usize>],
    c: &[usize],
    tolerance: f64,
) -> Option<usize> {
    match group {
        [single] => *single,
        [a, b] => max2_lex_not_dominated(oracle, *a, *b, c, tolerance),
        [a, b, x] => {
            let max01 = max2_lex_not_dominated(oracle, *a, *b, c, tolerance / 2.0);
            max2_lex_not_dominated(oracle, max01, *x, c, tolerance / 2.0)
        }
        [a, b, x, y] => {
            let max01 = max2_lex_not_dominated(oracle, *a, *b, c, tolerance / 2.0);
            let max23 = max2_lex_not_dominated(oracle, *x, *y, c, tolerance / 2.0);
            max2_lex_not_dominated(oracle, max01, max23, c, tolerance / 2.0)
        }
        _ => panic!(
            "tournament group must hold 1 to 4 candidates; got {}",
            group.len()
        ),
    }
}

/// Tournament maximum over the whole candidate set `s`.
///
/// Reduces four-wide groups level by level until at most four candidates
/// remain; eliminated slots stay in the bracket as `None` and keep their
/// group positions. The tolerance is not subdivided across levels, only
/// inside each group.
///
/// Any surviving (non-dominated) candidate beats every `None` and every
/// dominated candidate on its path, so while survivors exist the result is
/// their lexicographic maximum. Once none remain, the result is `None` for
/// most bracket shapes, but a dominated tail candidate can advance through
/// collapsed slots without ever being compared. Panics on an empty
/// candidate set.
pub fn max_lex_not_dominated(
    oracle: &mut Oracle,
    s: &[usize],
    c: &[usize],
    tolerance: f64,
) -> Option<usize> {
    assert!(!s.is_empty(), "candidate set must not be empty");

    let mut level: Vec<Option<usize>> = s.iter().copied().map(Some).collect();
    loop {
        if level.len() <= 4 {
            return max4_lex_not_dominated(oracle, &level, c, tolerance);
        }
        level = level
            .chunks(4)
            .map(|group| max4_lex_not_dominated(oracle, group, c, tolerance))
            .collect();
    }
}
