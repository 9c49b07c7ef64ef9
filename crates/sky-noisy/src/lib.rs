// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod amplify;
pub mod dominance;
pub mod sample;
pub mod tournament;

pub use amplify::amplified_less;
pub use dominance::{dominated_by, dominated_by_any, less_lex, less_lex_not_dominated};
pub use sample::sky_sample;
pub use tournament::{max2_lex_not_dominated, max4_lex_not_dominated, max_lex_not_dominated};

use sky_core::{SkyDiagnostics, SkyError, SkylineResult};
use sky_oracle::Oracle;

/// Extraction budget of the first sampling round.
const INITIAL_SAMPLE_BUDGET: u64 = 4;

fn validate_tolerance(oracle: &Oracle, tolerance: f64) -> Result<(), SkyError> {
    if !(0.0..0.5).contains(&tolerance) {
        return Err(SkyError::invalid_input(format!(
            "tolerance must be in [0.0, 0.5); got {tolerance}"
        )));
    }
    if tolerance == 0.0 && oracle.error_probability() > 0.0 {
        return Err(SkyError::invalid_input(
            "tolerance 0.0 requires a noise-free oracle; amplification cannot terminate otherwise",
        ));
    }
    Ok(())
}

/// Computes the skyline of the candidate set `s` with overall error
/// probability at most `tolerance`.
///
/// Sampling budgets grow as 4, 16, 256, 65536, ... (squaring each round)
/// while the round tolerances halve, so the shares sum below the overall
/// budget. The loop ends on the first round that fails to fill its budget:
/// at that point the sample has exhausted every non-dominated candidate.
pub fn skyline(
    oracle: &mut Oracle,
    s: &[usize],
    tolerance: f64,
) -> Result<SkylineResult, SkyError> {
    validate_tolerance(oracle, tolerance)?;

    let mut budget = INITIAL_SAMPLE_BUDGET;
    let mut share = tolerance / 2.0;
    let mut rounds = 0usize;

    loop {
        rounds += 1;
        let indices = sample::sky_sample(oracle, s, budget, share);
        if (indices.len() as u64) < budget {
            let diagnostics = SkyDiagnostics {
                n: oracle.item_count(),
                d: oracle.item_dimension(),
                error_probability: oracle.error_probability(),
                tolerance,
                sample_rounds: rounds,
                final_sample_budget: budget,
                comparisons: oracle.comparison_count(),
                seed: Some(oracle.seed()),
            };
            return SkylineResult::new(indices, diagnostics);
        }
        budget = budget.saturating_mul(budget);
        share /= 2.0;
    }
}

/// Computes the skyline of the oracle's entire dataset.
pub fn full_skyline(oracle: &mut Oracle, tolerance: f64) -> Result<SkylineResult, SkyError> {
    let s: Vec<usize> = (0..oracle.item_count()).collect();
    skyline(oracle, &s, tolerance)
}

#[cfg(test)]
mod tests {
    use super::{full_skyline, skyline};
    use sky_core::Dataset;
    use sky_oracle::Oracle;

    fn sorted(mut indices: Vec<usize>) -> Vec<usize> {
        indices.sort_unstable();
        indices
    }

    fn pareto_front() -> Dataset {
        Dataset::from_rows(vec![vec![3.0, 1.0], vec![1.0, 3.0], vec![2.0, 2.0]])
            .expect("valid dataset")
    }

    #[test]
    fn rejects_tolerance_out_of_range() {
        for bad in [0.5, 0.75, -0.01, f64::NAN] {
            let mut oracle = Oracle::with_seed(pareto_front(), 0.0, 0).expect("valid oracle");
            let err = full_skyline(&mut oracle, bad).expect_err("bad tolerance must fail");
            assert!(err.to_string().contains("tolerance must be in [0.0, 0.5)"));
        }
    }

    #[test]
    fn rejects_zero_tolerance_with_a_noisy_oracle() {
        let mut oracle = Oracle::with_seed(pareto_front(), 0.3, 0).expect("valid oracle");
        let err = full_skyline(&mut oracle, 0.0).expect_err("tolerance 0 with noise must fail");
        assert!(err.to_string().contains("noise-free oracle"));
    }

    #[test]
    fn zero_tolerance_with_a_clean_oracle_passes_through() {
        let mut oracle = Oracle::with_seed(pareto_front(), 0.0, 0).expect("valid oracle");
        let result = full_skyline(&mut oracle, 0.0).expect("clean run should succeed");
        assert_eq!(sorted(result.indices), vec![0, 1, 2]);
    }

    #[test]
    fn clean_run_fills_diagnostics() {
        let mut oracle = Oracle::with_seed(pareto_front(), 0.0, 17).expect("valid oracle");
        let result = full_skyline(&mut oracle, 0.1).expect("clean run should succeed");
        let diagnostics = result.diagnostics;
        assert_eq!(diagnostics.n, 3);
        assert_eq!(diagnostics.d, 2);
        assert_eq!(diagnostics.error_probability, 0.0);
        assert_eq!(diagnostics.tolerance, 0.1);
        assert_eq!(diagnostics.sample_rounds, 1);
        assert_eq!(diagnostics.final_sample_budget, 4);
        assert_eq!(diagnostics.comparisons, oracle.comparison_count());
        assert_eq!(diagnostics.seed, Some(17));
    }

    #[test]
    fn single_item_dataset_terminates_in_one_round() {
        let dataset = Dataset::from_rows(vec![vec![0.5, 0.5]]).expect("valid dataset");
        let mut oracle = Oracle::with_seed(dataset, 0.0, 0).expect("valid oracle");
        let result = full_skyline(&mut oracle, 0.1).expect("run should succeed");
        assert_eq!(result.indices, vec![0]);
        assert_eq!(result.diagnostics.sample_rounds, 1);
    }

    #[test]
    fn restricted_candidate_set_ignores_outside_items() {
        let dataset = Dataset::from_rows(vec![
            vec![9.0, 9.0],
            vec![3.0, 1.0],
            vec![1.0, 3.0],
        ])
        .expect("valid dataset");
        let mut oracle = Oracle::with_seed(dataset, 0.0, 0).expect("valid oracle");
        let result = skyline(&mut oracle, &[1, 2], 0.1).expect("run should succeed");
        assert_eq!(sorted(result.indices), vec![1, 2]);
    }

    #[test]
    fn chain_dataset_keeps_only_the_top() {
        let dataset = Dataset::from_rows(vec![
            vec![1.0, 1.0],
            vec![2.0, 2.0],
            vec![3.0, 3.0],
        ])
        .expect("valid dataset");
        let mut oracle = Oracle::with_seed(dataset, 0.0, 0).expect("valid oracle");
        let result = full_skyline(&mut oracle, 0.1).expect("run should succeed");
        assert_eq!(result.indices, vec![2]);
    }

    #[test]
    fn weakly_dominated_ties_collapse_to_one_item() {
        let dataset = Dataset::from_rows(vec![
            vec![5.0, 5.0],
            vec![5.0, 4.0],
            vec![4.0, 5.0],
            vec![1.0, 1.0],
        ])
        .expect("valid dataset");
        let mut oracle = Oracle::with_seed(dataset, 0.0, 0).expect("valid oracle");
        let result = full_skyline(&mut oracle, 0.1).expect("run should succeed");
        assert_eq!(result.indices, vec![0]);
    }

    #[test]
    fn duplicate_rows_yield_a_single_representative() {
        // Exact duplicates weakly dominate each other; the sample keeps the
        // first one it extracts. The noiseless reference keeps both.
        let dataset =
            Dataset::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).expect("valid dataset");
        let mut oracle = Oracle::with_seed(dataset, 0.0, 0).expect("valid oracle");
        let result = full_skyline(&mut oracle, 0.1).expect("run should succeed");
        assert_eq!(result.indices, vec![1]);
    }

    #[test]
    fn larger_skyline_forces_a_second_round() {
        // Six-point Pareto front: the first round fills its budget of four,
        // so a second round at budget sixteen must finish the job.
        let rows: Vec<Vec<f64>> = (0..6)
            .map(|i| vec![i as f64, (5 - i) as f64])
            .collect();
        let dataset = Dataset::from_rows(rows).expect("valid dataset");
        let mut oracle = Oracle::with_seed(dataset, 0.0, 0).expect("valid oracle");
        let result = full_skyline(&mut oracle, 0.1).expect("run should succeed");
        assert_eq!(sorted(result.indices), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(result.diagnostics.sample_rounds, 2);
        assert_eq!(result.diagnostics.final_sample_budget, 16);
    }
}
