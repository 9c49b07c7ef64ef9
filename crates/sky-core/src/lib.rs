// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod results;
pub mod rng;
pub mod ternary;

pub use dataset::Dataset;
pub use error::SkyError;
pub use results::{SkyDiagnostics, SkylineResult};
pub use rng::{StableRng, entropy_seed};
pub use ternary::Ternary;
