//! Delegation records.
//!
//! These are data shapes only: nothing in the engine creates, mutates or
//! consults them, and voting weight is always the voter's own balance.
//! Hosts that track delegation off-engine can use them as a shared format.

use serde::{Deserialize, Serialize};
use tally_types::{AccountId, BlockHeight, Weight};

/// A delegator's outgoing delegation, keyed by delegator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub delegate: AccountId,
    pub amount: Weight,
    /// The delegation cannot be revoked before this height.
    pub lock_until: BlockHeight,
    pub active: bool,
}

/// Everything a delegate has received, keyed by delegate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedDelegations {
    pub total: Weight,
    pub delegators: Vec<AccountId>,
}
