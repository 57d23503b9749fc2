//! Governance proposals and their lifecycle.

use crate::tally::Tally;
use serde::{Deserialize, Serialize};
use std::fmt;
use tally_types::{AccountId, ActionPayload, BlockHeight, Description, Title, Weight};

/// Dense proposal identifier, allocated from 0 upwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProposalId(u64);

impl ProposalId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProposalId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Proposal status. `Approved` and `Rejected` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Accepting votes until the window closes, then awaiting finalization.
    Active,
    /// Quorum reached and the for-ratio met the approval threshold.
    Approved,
    /// Quorum reached but the for-ratio fell short.
    Rejected,
}

impl ProposalStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Author-supplied content of a new proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDraft {
    pub title: Title,
    pub description: Description,
    /// Opaque payload. Stored, never executed.
    pub action: Option<ActionPayload>,
    /// Informational delay (in blocks) before an approved action would run.
    pub execution_delay: u64,
}

/// A governance proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub title: Title,
    pub description: Description,
    /// Who proposed it.
    pub proposer: AccountId,
    /// Height of the `create_proposal` call; the voting window starts here.
    pub created_at: BlockHeight,
    /// Weight accumulated in favour.
    pub votes_for: Weight,
    /// Weight accumulated against.
    pub votes_against: Weight,
    pub status: ProposalStatus,
    pub action: Option<ActionPayload>,
    pub execution_delay: u64,
}

impl Proposal {
    pub(crate) fn from_draft(
        id: ProposalId,
        draft: ProposalDraft,
        proposer: AccountId,
        created_at: BlockHeight,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            proposer,
            created_at,
            votes_for: Weight::ZERO,
            votes_against: Weight::ZERO,
            status: ProposalStatus::Active,
            action: draft.action,
            execution_delay: draft.execution_delay,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProposalStatus::Active
    }

    /// Last height at which votes are accepted (inclusive).
    pub fn voting_ends_at(&self, voting_period_blocks: u64) -> BlockHeight {
        self.created_at.saturating_add(voting_period_blocks)
    }

    /// Whether a vote cast at `height` falls inside the voting window.
    pub fn window_open_at(&self, height: BlockHeight, voting_period_blocks: u64) -> bool {
        height <= self.voting_ends_at(voting_period_blocks)
    }

    /// Current for/against totals.
    pub fn tally(&self) -> Tally {
        Tally {
            votes_for: self.votes_for,
            votes_against: self.votes_against,
        }
    }

    /// `votes_for + votes_against`, widened so it cannot overflow.
    pub fn total_votes(&self) -> u128 {
        self.tally().total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal_at(created_at: u64) -> Proposal {
        Proposal::from_draft(
            ProposalId::new(0),
            ProposalDraft {
                title: Title::new("t").unwrap(),
                description: Description::new("d").unwrap(),
                action: None,
                execution_delay: 0,
            },
            AccountId::new("alice").unwrap(),
            BlockHeight::new(created_at),
        )
    }

    #[test]
    fn new_proposal_is_active_with_zero_tally() {
        let p = proposal_at(5);
        assert!(p.is_active());
        assert_eq!(p.total_votes(), 0);
        assert_eq!(p.votes_for, Weight::ZERO);
        assert_eq!(p.votes_against, Weight::ZERO);
    }

    #[test]
    fn window_end_is_inclusive() {
        let p = proposal_at(5);
        assert_eq!(p.voting_ends_at(144), BlockHeight::new(149));
        assert!(p.window_open_at(BlockHeight::new(149), 144));
        assert!(!p.window_open_at(BlockHeight::new(150), 144));
    }

    #[test]
    fn window_end_saturates() {
        let p = proposal_at(u64::MAX - 1);
        assert_eq!(p.voting_ends_at(144), BlockHeight::new(u64::MAX));
    }

    #[test]
    fn terminal_statuses() {
        assert!(!ProposalStatus::Active.is_terminal());
        assert!(ProposalStatus::Approved.is_terminal());
        assert!(ProposalStatus::Rejected.is_terminal());
    }
}
