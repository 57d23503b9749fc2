//! Quorum and approval arithmetic.
//!
//! All ratio math runs in u128, so `votes_for * 1000` cannot overflow for
//! any pair of u64 tallies.

use crate::proposal::ProposalStatus;
use tally_types::params::PERMILLE;
use tally_types::{GovernanceParams, Weight};

/// For/against totals of one proposal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub votes_for: Weight,
    pub votes_against: Weight,
}

impl Tally {
    pub fn total(&self) -> u128 {
        u128::from(self.votes_for.raw()) + u128::from(self.votes_against.raw())
    }

    /// `floor(votes_for * 1000 / total)`, or 0 when nobody voted.
    pub fn approval_permille(&self) -> u128 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        u128::from(self.votes_for.raw()) * PERMILLE / total
    }

    pub fn meets_quorum(&self, quorum_threshold: Weight) -> bool {
        self.total() >= u128::from(quorum_threshold.raw())
    }

    /// Terminal status this tally earns once quorum is known to be met.
    ///
    /// A ratio exactly at the threshold passes, one unit below fails.
    pub fn outcome(&self, params: &GovernanceParams) -> ProposalStatus {
        if self.approval_permille() >= u128::from(params.approval_threshold_permille) {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Rejected
        }
    }
}
