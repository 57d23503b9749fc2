//! Token-weighted governance for Tally.
//!
//! Lifecycle: `create_proposal` → `vote` (during the voting window) →
//! `finalize_proposal` (after the window) → `Approved` | `Rejected`.
//!
//! Key principles:
//! - one vote per (proposal, voter), weighted by the voter's balance at the
//!   moment of voting;
//! - the engine never reads a clock, the host injects the block height;
//! - every operation checks all preconditions before its first mutation.

pub mod delegation;
pub mod engine;
pub mod error;
pub mod proposal;
pub mod tally;
pub mod vote;

pub use delegation::{Delegation, ReceivedDelegations};
pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use proposal::{Proposal, ProposalDraft, ProposalId, ProposalStatus};
pub use tally::Tally;
pub use vote::VoteRecord;
