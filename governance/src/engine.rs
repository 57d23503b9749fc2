//! Core governance engine. Owns the proposal table, the vote table and the
//! proposal counter.
//!
//! Every mutating operation takes `&mut self`, so calls are serialized by
//! construction. Each one runs all of its checks before touching state: an
//! `Err` always means nothing changed.

use crate::error::GovernanceError;
use crate::proposal::{Proposal, ProposalDraft, ProposalId, ProposalStatus};
use crate::vote::VoteRecord;
use std::collections::{BTreeMap, HashMap};
use tally_ledger::BalanceLedger;
use tally_store::{GovernanceStore, MetaStore};
use tally_types::{AccountId, BlockHeight, GovernanceParams, Weight};

/// Meta-store key holding the next proposal id.
const NEXT_PROPOSAL_ID_META_KEY: &str = "governance.next_proposal_id";

/// The governance engine.
pub struct GovernanceEngine {
    params: GovernanceParams,
    next_proposal_id: u64,
    proposals: BTreeMap<ProposalId, Proposal>,
    votes: HashMap<(ProposalId, AccountId), VoteRecord>,
}

impl GovernanceEngine {
    /// Create an empty engine. Parameters are fixed for the engine's lifetime.
    pub fn new(params: GovernanceParams) -> Result<Self, GovernanceError> {
        params.validate()?;
        Ok(Self {
            params,
            next_proposal_id: 0,
            proposals: BTreeMap::new(),
            votes: HashMap::new(),
        })
    }

    pub fn params(&self) -> &GovernanceParams {
        &self.params
    }

    /// Submit a new proposal. The proposer needs at least
    /// `min_proposal_weight` in the ledger.
    pub fn create_proposal(
        &mut self,
        draft: ProposalDraft,
        proposer: &AccountId,
        height: BlockHeight,
        ledger: &dyn BalanceLedger,
    ) -> Result<ProposalId, GovernanceError> {
        let balance = ledger.balance(proposer);
        if balance < self.params.min_proposal_weight {
            return Err(GovernanceError::InsufficientWeight {
                have: balance.raw(),
                need: self.params.min_proposal_weight.raw(),
            });
        }
        let id = ProposalId::new(self.next_proposal_id);
        let next = self
            .next_proposal_id
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;

        self.proposals
            .insert(id, Proposal::from_draft(id, draft, proposer.clone(), height));
        self.next_proposal_id = next;
        tracing::info!(
            proposal = %id,
            proposer = %proposer,
            height = height.as_u64(),
            "proposal created"
        );
        Ok(id)
    }

    /// Cast `voter`'s vote. Returns the weight recorded.
    ///
    /// Checks, first failure wins: proposal exists, window still open,
    /// no earlier vote by `voter`, non-zero balance.
    pub fn vote(
        &mut self,
        proposal_id: ProposalId,
        support: bool,
        voter: &AccountId,
        height: BlockHeight,
        ledger: &dyn BalanceLedger,
    ) -> Result<Weight, GovernanceError> {
        let period = self.params.voting_period_blocks;
        let proposal = self
            .proposals
            .get_mut(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))?;

        // A finalized proposal has frozen tallies even if the host replays
        // an old height.
        if !proposal.is_active() || !proposal.window_open_at(height, period) {
            return Err(GovernanceError::VotingClosed {
                proposal: proposal_id,
                ends_at: proposal.voting_ends_at(period),
                height,
            });
        }
        let key = (proposal_id, voter.clone());
        if self.votes.contains_key(&key) {
            return Err(GovernanceError::AlreadyVoted {
                proposal: proposal_id,
                voter: voter.to_string(),
            });
        }
        let weight = ledger.balance(voter);
        if weight.is_zero() {
            return Err(GovernanceError::InsufficientWeight { have: 0, need: 1 });
        }
        let accumulator = if support {
            &mut proposal.votes_for
        } else {
            &mut proposal.votes_against
        };
        let updated = accumulator
            .checked_add(weight)
            .ok_or(GovernanceError::Overflow)?;

        *accumulator = updated;
        self.votes.insert(
            key,
            VoteRecord {
                support,
                weight,
                cast_at: height,
            },
        );
        tracing::debug!(
            proposal = %proposal_id,
            voter = %voter,
            support,
            weight = weight.raw(),
            "vote recorded"
        );
        Ok(weight)
    }

    /// Settle a proposal once its voting window has elapsed.
    ///
    /// Checks, first failure wins: proposal exists, still `Active`, window
    /// strictly elapsed, quorum reached. Returns the terminal status.
    pub fn finalize_proposal(
        &mut self,
        proposal_id: ProposalId,
        height: BlockHeight,
    ) -> Result<ProposalStatus, GovernanceError> {
        let period = self.params.voting_period_blocks;
        let proposal = self
            .proposals
            .get_mut(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))?;

        if proposal.status.is_terminal() {
            return Err(GovernanceError::AlreadyFinalized {
                proposal: proposal_id,
                status: proposal.status,
            });
        }
        if proposal.window_open_at(height, period) {
            return Err(GovernanceError::VotingClosed {
                proposal: proposal_id,
                ends_at: proposal.voting_ends_at(period),
                height,
            });
        }
        let tally = proposal.tally();
        if !tally.meets_quorum(self.params.quorum_threshold) {
            return Err(GovernanceError::QuorumNotReached {
                have: tally.total(),
                need: self.params.quorum_threshold.raw(),
            });
        }

        let status = tally.outcome(&self.params);
        proposal.status = status;
        tracing::info!(
            proposal = %proposal_id,
            ?status,
            votes_for = tally.votes_for.raw(),
            votes_against = tally.votes_against.raw(),
            approval_permille = tally.approval_permille() as u64,
            "proposal finalized"
        );
        Ok(status)
    }

    /// Look up a proposal.
    pub fn proposal(&self, proposal_id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.proposals
            .get(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))
    }

    /// `voter`'s record on a proposal, if any.
    pub fn vote_of(&self, proposal_id: ProposalId, voter: &AccountId) -> Option<&VoteRecord> {
        self.votes.get(&(proposal_id, voter.clone()))
    }

    /// All vote records on one proposal.
    pub fn votes_on(
        &self,
        proposal_id: ProposalId,
    ) -> impl Iterator<Item = (&AccountId, &VoteRecord)> + '_ {
        self.votes
            .iter()
            .filter(move |((id, _), _)| *id == proposal_id)
            .map(|((_, voter), record)| (voter, record))
    }

    /// Number of proposals ever created (also the next id to be allocated).
    pub fn proposal_count(&self) -> u64 {
        self.next_proposal_id
    }

    /// All proposals in id order.
    pub fn proposals(&self) -> impl Iterator<Item = &Proposal> + '_ {
        self.proposals.values()
    }

    pub fn active_proposals(&self) -> impl Iterator<Item = &Proposal> + '_ {
        self.proposals.values().filter(|p| p.is_active())
    }
}

impl GovernanceEngine {
    /// Persist counter, proposals and votes to a governance store.
    pub fn save_to_store(&self, store: &dyn GovernanceStore) -> Result<(), GovernanceError> {
        store.put_meta_u64(NEXT_PROPOSAL_ID_META_KEY, self.next_proposal_id)?;
        for (id, proposal) in &self.proposals {
            let bytes = bincode::serialize(proposal)
                .map_err(|e| GovernanceError::Serialization(e.to_string()))?;
            store.put_proposal(id.as_u64(), &bytes)?;
        }
        for ((id, voter), record) in &self.votes {
            let bytes = bincode::serialize(record)
                .map_err(|e| GovernanceError::Serialization(e.to_string()))?;
            store.put_vote(id.as_u64(), voter, &bytes)?;
        }
        Ok(())
    }

    /// Restore an engine from a governance store.
    ///
    /// Rejects state that breaks the engine's invariants: ids at or above the
    /// counter, votes on unknown proposals, or tallies that don't equal the
    /// sum of their vote records.
    pub fn load_from_store(
        store: &dyn GovernanceStore,
        params: GovernanceParams,
    ) -> Result<Self, GovernanceError> {
        params.validate()?;
        let next_proposal_id = store
            .get_meta_u64(NEXT_PROPOSAL_ID_META_KEY)?
            .unwrap_or(0);

        let mut proposals = BTreeMap::new();
        for (key, bytes) in store.iter_proposals()? {
            let proposal: Proposal = bincode::deserialize(&bytes)
                .map_err(|e| GovernanceError::Serialization(e.to_string()))?;
            if proposal.id.as_u64() != key {
                return Err(GovernanceError::Corrupt(format!(
                    "proposal stored under {key} carries id {}",
                    proposal.id
                )));
            }
            if key >= next_proposal_id {
                return Err(GovernanceError::Corrupt(format!(
                    "proposal {key} is not below the counter {next_proposal_id}"
                )));
            }
            proposals.insert(proposal.id, proposal);
        }

        let mut votes = HashMap::new();
        let mut sums: HashMap<ProposalId, (u128, u128)> = HashMap::new();
        for (key, voter, bytes) in store.iter_votes()? {
            let id = ProposalId::new(key);
            if !proposals.contains_key(&id) {
                return Err(GovernanceError::Corrupt(format!(
                    "vote by {voter} references unknown proposal {id}"
                )));
            }
            let record: VoteRecord = bincode::deserialize(&bytes)
                .map_err(|e| GovernanceError::Serialization(e.to_string()))?;
            let entry = sums.entry(id).or_default();
            if record.support {
                entry.0 += u128::from(record.weight.raw());
            } else {
                entry.1 += u128::from(record.weight.raw());
            }
            votes.insert((id, voter), record);
        }

        for (id, proposal) in &proposals {
            let (sum_for, sum_against) = sums.get(id).copied().unwrap_or_default();
            if sum_for != u128::from(proposal.votes_for.raw())
                || sum_against != u128::from(proposal.votes_against.raw())
            {
                return Err(GovernanceError::Corrupt(format!(
                    "tally of proposal {id} does not match its vote records"
                )));
            }
        }

        tracing::info!(
            proposals = proposals.len(),
            votes = votes.len(),
            next_proposal_id,
            "governance state loaded"
        );
        Ok(Self {
            params,
            next_proposal_id,
            proposals,
            votes,
        })
    }
}
