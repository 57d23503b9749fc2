//! Balance storage trait.

use crate::meta::MetaStore;
use crate::StoreError;
use tally_types::{AccountId, Weight};

/// Trait for storing the balance ledger (identity → voting weight).
pub trait LedgerStore: MetaStore {
    fn put_balance(&self, account: &AccountId, balance: Weight) -> Result<(), StoreError>;

    fn get_balance(&self, account: &AccountId) -> Result<Option<Weight>, StoreError>;

    fn iter_balances(&self) -> Result<Vec<(AccountId, Weight)>, StoreError>;
}
