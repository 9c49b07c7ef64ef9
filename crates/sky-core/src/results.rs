// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::SkyError;

/// Execution metadata captured from a noisy skyline run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SkyDiagnostics {
    pub n: usize,
    pub d: usize,
    pub error_probability: f64,
    pub tolerance: f64,
    /// Number of sampling rounds the doubling loop ran.
    pub sample_rounds: usize,
    /// Extraction budget of the final round.
    pub final_sample_budget: u64,
    /// Base oracle queries issued over the whole run.
    pub comparisons: u64,
    pub seed: Option<u64>,
}

impl Default for SkyDiagnostics {
    fn default() -> Self {
        Self {
            n: 0,
            d: 0,
            error_probability: 0.0,
            tolerance: 0.0,
            sample_rounds: 0,
            final_sample_budget: 0,
            comparisons: 0,
            seed: None,
        }
    }
}

/// Skyline indices in extraction order, plus run diagnostics.
///
/// Indices never repeat: sampling ends on a repeated extraction. Deviation
/// from the true skyline is a bounded-probability wrong answer rather than
/// an error.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SkylineResult {
    pub indices: Vec<usize>,
    pub diagnostics: SkyDiagnostics,
}

impl SkylineResult {
    /// Validates that every index addresses an item of the dataset described
    /// by the diagnostics.
    pub fn new(indices: Vec<usize>, diagnostics: SkyDiagnostics) -> Result<Self, SkyError> {
        if let Some(&bad) = indices.iter().find(|&&idx| idx >= diagnostics.n) {
            return Err(SkyError::invalid_input(format!(
                "skyline index {bad} out of range for dataset of size {}",
                diagnostics.n
            )));
        }
        Ok(Self {
            indices,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SkyDiagnostics, SkylineResult};

    fn diagnostics(n: usize) -> SkyDiagnostics {
        SkyDiagnostics {
            n,
            d: 2,
            ..SkyDiagnostics::default()
        }
    }

    #[test]
    fn new_accepts_in_range_indices() {
        let result = SkylineResult::new(vec![2, 0, 1], diagnostics(3))
            .expect("in-range indices should be accepted");
        assert_eq!(result.indices, vec![2, 0, 1]);
    }

    #[test]
    fn new_rejects_out_of_range_index() {
        let err = SkylineResult::new(vec![0, 3], diagnostics(3))
            .expect_err("index past the dataset must fail");
        assert!(err.to_string().contains("skyline index 3 out of range"));
    }

    #[test]
    fn diagnostics_default_is_all_zero() {
        let diagnostics = SkyDiagnostics::default();
        assert_eq!(diagnostics.n, 0);
        assert_eq!(diagnostics.sample_rounds, 0);
        assert_eq!(diagnostics.comparisons, 0);
        assert!(diagnostics.seed.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn skyline_result_serde_roundtrip() {
        let result = SkylineResult::new(
            vec![0, 2],
            SkyDiagnostics {
                n: 3,
                d: 2,
                error_probability: 0.3,
                tolerance: 0.05,
                sample_rounds: 1,
                final_sample_budget: 4,
                comparisons: 1_234,
                seed: Some(42),
            },
        )
        .expect("result should be valid");

        let encoded = serde_json::to_string(&result).expect("result should serialize");
        let decoded: SkylineResult =
            serde_json::from_str(&encoded).expect("result should deserialize");
        assert_eq!(decoded, result);
    }
}
