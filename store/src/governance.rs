//! Governance storage trait.

use crate::meta::MetaStore;
use crate::StoreError;
use tally_types::AccountId;

/// Trait for storing governance state (proposal table and vote table).
///
/// Uses opaque bytes so the store doesn't depend on `tally-governance`
/// (which would create a circular dependency). The engine serializes its own
/// types.
pub trait GovernanceStore: MetaStore {
    /// Store a proposal under its id.
    fn put_proposal(&self, id: u64, data: &[u8]) -> Result<(), StoreError>;

    /// Get a proposal by id.
    fn get_proposal(&self, id: u64) -> Result<Option<Vec<u8>>, StoreError>;

    /// All stored proposals, in ascending id order.
    fn iter_proposals(&self) -> Result<Vec<(u64, Vec<u8>)>, StoreError>;

    /// Store a vote record keyed by (proposal, voter).
    fn put_vote(&self, proposal: u64, voter: &AccountId, data: &[u8]) -> Result<(), StoreError>;

    /// Get a specific voter's record on a proposal.
    fn get_vote(&self, proposal: u64, voter: &AccountId) -> Result<Option<Vec<u8>>, StoreError>;

    /// All stored vote records.
    fn iter_votes(&self) -> Result<Vec<(u64, AccountId, Vec<u8>)>, StoreError>;
}
