//! Vote records.

use serde::{Deserialize, Serialize};
use tally_types::{BlockHeight, Weight};

/// A single voter's vote on a proposal. Written once, never changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// `true` for, `false` against.
    pub support: bool,
    /// Voter's balance when the vote was cast. Later balance changes don't
    /// touch it.
    pub weight: Weight,
    pub cast_at: BlockHeight,
}
