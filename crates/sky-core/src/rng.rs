// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::SkyError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic splitmix64 generator.
///
/// Used wherever reproducible draws are needed; the same seed always yields
/// the same stream regardless of platform.
#[derive(Clone, Copy, Debug)]
pub struct StableRng {
    state: u64,
}

impl StableRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(0x9e3779b97f4a7c15),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform draw in `[0.0, 1.0)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    pub fn gen_range(&mut self, upper_exclusive: usize) -> Result<usize, SkyError> {
        if upper_exclusive == 0 {
            return Err(SkyError::invalid_input(
                "StableRng.gen_range requires upper_exclusive >= 1; got 0",
            ));
        }

        let value = self.next_u64();
        let modulus = u64::try_from(upper_exclusive)
            .map_err(|_| SkyError::resource_limit("rng upper_exclusive conversion overflow"))?;
        let sampled = value % modulus;
        usize::try_from(sampled)
            .map_err(|_| SkyError::resource_limit("rng sampled index conversion overflow"))
    }
}

static SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Seed material for generators that are not meant to be reproducible.
///
/// Mixes the system clock with a process-unique counter so that oracles
/// created in the same instant still diverge.
pub fn entropy_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0);
    let counter = SEED_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let mut mix = StableRng::new(nanos ^ counter.rotate_left(32));
    mix.next_u64()
}
