// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Value in a three-valued (strong Kleene) logic.
///
/// `Unknown` arises when neither operand of an ordering query survives the
/// incumbent set, so no order exists between them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ternary {
    False,
    Unknown,
    True,
}

impl Ternary {
    /// Lifts a two-valued answer into the ternary domain.
    pub fn from_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}
