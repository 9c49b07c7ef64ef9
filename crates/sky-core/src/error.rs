// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::fmt;

/// Error type shared across the skyline crates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkyError {
    /// Caller-supplied arguments or data failed validation.
    InvalidInput(String),
    /// A requested capability is not provided by this build.
    NotSupported(String),
    /// A size or counter computation exceeded its representable range.
    ResourceLimit(String),
}

impl SkyError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }

    pub fn resource_limit(msg: impl Into<String>) -> Self {
        Self::ResourceLimit(msg.into())
    }
}

impl fmt::Display for SkyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) | Self::NotSupported(msg) | Self::ResourceLimit(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl std::error::Error for SkyError {}
