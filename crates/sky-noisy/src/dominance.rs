// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::amplify::amplified_less;
use sky_core::Ternary;
use sky_oracle::Oracle;

/// Lexicographic comparison of items `i` and `j` under a symmetric budget.
///
/// Two scans locate the first dimension where `i < j` and the first where
/// `i > j`, each at half the tolerance; the item dimension acts as the
/// not-found sentinel. `i` is lexicographically less exactly when no
/// greater-than dimension exists or the less-than dimension comes first.
/// Fully equal items therefore compare as less.
pub fn less_lex(oracle: &mut Oracle, i: usize, j: usize, tolerance: f64) -> bool {
    let d = oracle.item_dimension();
    let lt = (0..d)
        .find(|&k| amplified_less(oracle, i, j, k, tolerance / 2.0))
        .unwrap_or(d);
    let gt = (0..d)
        .find(|&k| amplified_less(oracle, j, i, k, tolerance / 2.0))
        .unwrap_or(d);
    gt == d || lt <= gt
}

/// Is item `i` dominated by item `j`?
///
/// True when `i` is nowhere greater than `j`; an item dominates itself under
/// this weak form. Every coordinate is polled with the full tolerance, so
/// callers split budgets before descending here.
pub fn dominated_by(oracle: &mut Oracle, i: usize, j: usize, tolerance: f64) -> bool {
    for k in 0..oracle.item_dimension() {
        // Greater on some dimension, so j does not dominate i.
        if amplified_less(oracle, j, i, k, tolerance) {
            return false;
        }
    }
    true
}

/// Is item `i` dominated by any member of the incumbent set `c`?
pub fn dominated_by_any(oracle: &mut Oracle, i: usize, c: &[usize], tolerance: f64) -> bool {
    for &j in c {
        if dominated_by(oracle, i, j, tolerance) {
            return true;
        }
    }
    false
}

/// Ordering predicate for the non-dominance tournament.
///
/// Items dominated by the incumbent set sort below every survivor; two
/// dominated items admit no order at all. Two survivors fall through to the
/// lexicographic comparison.
pub fn less_lex_not_dominated(
    oracle: &mut Oracle,
    i: usize,
    j: usize,
    c: &[usize],
    tolerance: f64,
) -> Ternary {
    if dominated_by_any(oracle, i, c, tolerance) {
        if dominated_by_any(oracle, j, c, tolerance) {
            Ternary::Unknown
        } else {
            Ternary::True
        }
    } else if dominated_by_any(oracle, j, c, tolerance) {
        Ternary::False
    } else {
        Ternary::from_bool(less_lex(oracle, i, j, tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::{dominated_by, dominated_by_any, less_lex, less_lex_not_dominated};
    use sky_core::{Dataset, Ternary};
    use sky_oracle::Oracle;

    fn clean_oracle(rows: Vec<Vec<f64>>) -> Oracle {
        let dataset = Dataset::from_rows(rows).expect("valid dataset");
        Oracle::with_seed(dataset, 0.0, 0).expect("valid oracle")
    }

    #[test]
    fn less_lex_orders_on_the_first_differing_dimension() {
        let mut oracle = clean_oracle(vec![vec![1.0, 9.0], vec![2.0, 0.0]]);
        assert!(less_lex(&mut oracle, 0, 1, 0.1));
        assert!(!less_lex(&mut oracle, 1, 0, 0.1));
    }

    #[test]
    fn less_lex_falls_through_equal_prefixes() {
        let mut oracle = clean_oracle(vec![vec![5.0, 1.0], vec![5.0, 2.0]]);
        assert!(less_lex(&mut oracle, 0, 1, 0.1));
        assert!(!less_lex(&mut oracle, 1, 0, 0.1));
    }

    #[test]
    fn less_lex_treats_equal_items_as_less() {
        let mut oracle = clean_oracle(vec![vec![3.0, 3.0], vec![3.0, 3.0]]);
        assert!(less_lex(&mut oracle, 0, 1, 0.1));
        assert!(less_lex(&mut oracle, 1, 0, 0.1));
    }

    #[test]
    fn dominated_by_requires_nowhere_greater() {
        let mut oracle = clean_oracle(vec![
            vec![5.0, 5.0],
            vec![5.0, 4.0],
            vec![4.0, 5.0],
            vec![6.0, 1.0],
        ]);
        assert!(dominated_by(&mut oracle, 1, 0, 0.1));
        assert!(dominated_by(&mut oracle, 2, 0, 0.1));
        assert!(!dominated_by(&mut oracle, 3, 0, 0.1));
        assert!(!dominated_by(&mut oracle, 0, 1, 0.1));
    }

    #[test]
    fn an_item_dominates_itself() {
        let mut oracle = clean_oracle(vec![vec![1.0, 2.0]]);
        assert!(dominated_by(&mut oracle, 0, 0, 0.1));
    }

    #[test]
    fn dominated_by_any_short_circuits_on_the_first_dominator() {
        let mut oracle = clean_oracle(vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]]);
        assert!(dominated_by_any(&mut oracle, 0, &[1, 2], 0.1));
        let after_hit = oracle.comparison_count();
        // The scan stops at index 1; index 2 is never consulted.
        assert_eq!(after_hit, 2);
        assert!(!dominated_by_any(&mut oracle, 2, &[0, 1], 0.1));
        assert!(!dominated_by_any(&mut oracle, 0, &[], 0.1));
    }

    #[test]
    fn tournament_predicate_ranks_survivors_above_dominated() {
        let mut oracle = clean_oracle(vec![
            vec![3.0, 1.0],
            vec![1.0, 3.0],
            vec![2.0, 2.0],
            vec![0.5, 0.5],
        ]);
        let incumbents = vec![2];

        // Item 3 is dominated by incumbent 2; items 0 and 1 survive.
        assert_eq!(
            less_lex_not_dominated(&mut oracle, 3, 0, &incumbents, 0.05),
            Ternary::True
        );
        assert_eq!(
            less_lex_not_dominated(&mut oracle, 0, 3, &incumbents, 0.05),
            Ternary::False
        );
        assert_eq!(
            less_lex_not_dominated(&mut oracle, 3, 3, &incumbents, 0.05),
            Ternary::Unknown
        );
        // Both survive: plain lexicographic order decides.
        assert_eq!(
            less_lex_not_dominated(&mut oracle, 1, 0, &incumbents, 0.05),
            Ternary::True
        );
        assert_eq!(
            less_lex_not_dominated(&mut oracle, 0, 1, &incumbents, 0.05),
            Ternary::False
        );
    }
}
