//! Governance parameters.
//!
//! Set once when the engine is built and read-only afterwards.

use crate::error::TypesError;
use crate::weight::Weight;
use serde::{Deserialize, Serialize};

/// Denominator of `approval_threshold_permille`.
pub const PERMILLE: u128 = 1000;

/// Thresholds and durations that drive the proposal lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceParams {
    /// Number of blocks after creation during which votes are accepted.
    /// The last accepted height is `created_at + voting_period_blocks`.
    #[serde(default = "default_voting_period_blocks")]
    pub voting_period_blocks: u64,

    /// Minimum total weight (for + against) before a proposal can be finalized.
    #[serde(default = "default_quorum_threshold")]
    pub quorum_threshold: Weight,

    /// Minimum for-ratio, in thousandths, for approval (667 = 66.7%).
    #[serde(default = "default_approval_threshold_permille")]
    pub approval_threshold_permille: u32,

    /// Minimum balance an account needs to author a proposal.
    #[serde(default = "default_min_proposal_weight")]
    pub min_proposal_weight: Weight,
}

fn default_voting_period_blocks() -> u64 {
    144
}

fn default_quorum_threshold() -> Weight {
    Weight::new(500)
}

fn default_approval_threshold_permille() -> u32 {
    667
}

fn default_min_proposal_weight() -> Weight {
    Weight::new(100)
}

impl GovernanceParams {
    /// Check that the parameters describe a usable lifecycle.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.voting_period_blocks == 0 {
            return Err(TypesError::InvalidParam {
                name: "voting_period_blocks",
                reason: "must be at least one block".to_string(),
            });
        }
        if u128::from(self.approval_threshold_permille) > PERMILLE {
            return Err(TypesError::InvalidParam {
                name: "approval_threshold_permille",
                reason: format!("{} exceeds {}", self.approval_threshold_permille, PERMILLE),
            });
        }
        Ok(())
    }
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            voting_period_blocks: default_voting_period_blocks(),
            quorum_threshold: default_quorum_threshold(),
            approval_threshold_permille: default_approval_threshold_permille(),
            min_proposal_weight: default_min_proposal_weight(),
        }
    }
}
