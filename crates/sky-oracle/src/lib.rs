// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use sky_core::{Dataset, SkyError, StableRng, entropy_seed};

/// Noisy single-coordinate comparison oracle.
///
/// Answers "is item `i` less than item `j` on dimension `k`?" and lies with a
/// fixed probability, independently on every call. The dataset is a private
/// field with no accessor: once an oracle is constructed, nothing outside this
/// crate can reach the raw attribute values, so every consumer is forced
/// through [`Oracle::less`].
#[derive(Clone, Debug)]
pub struct Oracle {
    dataset: Dataset,
    error_probability: f64,
    rng: StableRng,
    seed: u64,
    comparisons: u64,
}

impl Oracle {
    /// Constructs an oracle with nondeterministic seeding.
    pub fn new(dataset: Dataset, error_probability: f64) -> Result<Self, SkyError> {
        Self::with_seed(dataset, error_probability, entropy_seed())
    }

    /// Constructs an oracle with a caller-supplied seed for reproducible runs.
    pub fn with_seed(
        dataset: Dataset,
        error_probability: f64,
        seed: u64,
    ) -> Result<Self, SkyError> {
        if !(0.0..0.5).contains(&error_probability) {
            return Err(SkyError::invalid_input(format!(
                "error probability must be in [0.0, 0.5); got {error_probability}"
            )));
        }

        Ok(Self {
            dataset,
            error_probability,
            rng: StableRng::new(seed),
            seed,
            comparisons: 0,
        })
    }

    /// Number of items in the underlying dataset.
    pub fn item_count(&self) -> usize {
        self.dataset.size()
    }

    /// Number of attributes per item.
    pub fn item_dimension(&self) -> usize {
        self.dataset.ndims()
    }

    /// Probability that a single [`Oracle::less`] answer is wrong.
    pub fn error_probability(&self) -> f64 {
        self.error_probability
    }

    /// Seed the internal generator was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Is item `i` less than item `j` on dimension `k`?
    ///
    /// Wrong with probability [`Oracle::error_probability`], independently
    /// across calls even for identical arguments. Every call counts as one
    /// base comparison.
    pub fn less(&mut self, i: usize, j: usize, k: usize) -> bool {
        let correct = self.dataset.value(i, k) < self.dataset.value(j, k);
        self.comparisons = self.comparisons.saturating_add(1);
        let flip = self.rng.next_f64() < self.error_probability;
        correct != flip
    }

    /// Total number of base comparisons answered so far.
    pub fn comparison_count(&self) -> u64 {
        self.comparisons
    }
}
