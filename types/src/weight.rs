//! Voting weight amounts.
//!
//! Weights are unsigned 64-bit integers. All arithmetic that can overflow is
//! checked; callers turn `None` into their crate's `Overflow` error. Ratio
//! arithmetic widens to u128 so `for * 1000` cannot overflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A voting-weight amount: a ledger balance, a vote magnitude, or a tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Weight {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
