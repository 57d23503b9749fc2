use crate::proposal::{ProposalId, ProposalStatus};
use tally_store::StoreError;
use tally_types::{BlockHeight, TypesError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("{voter} has already voted on proposal {proposal}")]
    AlreadyVoted { proposal: ProposalId, voter: String },

    #[error("voting window of proposal {proposal} ends at {ends_at}, current height is {height}")]
    VotingClosed {
        proposal: ProposalId,
        ends_at: BlockHeight,
        height: BlockHeight,
    },

    #[error("insufficient voting weight: have {have}, need {need}")]
    InsufficientWeight { have: u64, need: u64 },

    #[error("quorum not reached: {have} < {need}")]
    QuorumNotReached { have: u128, need: u64 },

    #[error("proposal {proposal} is already finalized as {status:?}")]
    AlreadyFinalized {
        proposal: ProposalId,
        status: ProposalStatus,
    },

    #[error("invalid governance parameters: {0}")]
    InvalidParams(#[from] TypesError),

    #[error("arithmetic overflow in governance state")]
    Overflow,

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupt governance state: {0}")]
    Corrupt(String),
}
