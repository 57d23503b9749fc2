//! Nullable store: thread-safe in-memory storage for testing.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use tally_store::{GovernanceStore, LedgerStore, MetaStore, StoreError};
use tally_types::{AccountId, Weight};

/// An in-memory governance + ledger store for testing.
///
/// Vote records are write-once: re-writing identical bytes is accepted,
/// writing different bytes for an existing key fails with `Duplicate`.
#[derive(Default)]
pub struct NullStore {
    meta: Mutex<HashMap<String, Vec<u8>>>,
    proposals: Mutex<BTreeMap<u64, Vec<u8>>>,
    votes: Mutex<HashMap<(u64, AccountId), Vec<u8>>>,
    balances: Mutex<HashMap<AccountId, Weight>>,
}

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    m.lock()
        .map_err(|_| StoreError::Backend("null store mutex poisoned".into()))
}

impl NullStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored vote records.
    pub fn vote_count(&self) -> usize {
        self.votes.lock().map(|v| v.len()).unwrap_or(0)
    }
}

impl MetaStore for NullStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        lock(&self.meta)?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(lock(&self.meta)?.get(key).cloned())
    }
}

impl GovernanceStore for NullStore {
    fn put_proposal(&self, id: u64, data: &[u8]) -> Result<(), StoreError> {
        lock(&self.proposals)?.insert(id, data.to_vec());
        Ok(())
    }

    fn get_proposal(&self, id: u64) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(lock(&self.proposals)?.get(&id).cloned())
    }

    fn iter_proposals(&self) -> Result<Vec<(u64, Vec<u8>)>, StoreError> {
        Ok(lock(&self.proposals)?
            .iter()
            .map(|(id, data)| (*id, data.clone()))
            .collect())
    }

    fn put_vote(&self, proposal: u64, voter: &AccountId, data: &[u8]) -> Result<(), StoreError> {
        let mut votes = lock(&self.votes)?;
        let key = (proposal, voter.clone());
        match votes.get(&key) {
            Some(existing) if existing.as_slice() != data => Err(StoreError::Duplicate(format!(
                "vote by {voter} on proposal {proposal}"
            ))),
            Some(_) => Ok(()),
            None => {
                votes.insert(key, data.to_vec());
                Ok(())
            }
        }
    }

    fn get_vote(&self, proposal: u64, voter: &AccountId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(lock(&self.votes)?.get(&(proposal, voter.clone())).cloned())
    }

    fn iter_votes(&self) -> Result<Vec<(u64, AccountId, Vec<u8>)>, StoreError> {
        Ok(lock(&self.votes)?
            .iter()
            .map(|((id, voter), data)| (*id, voter.clone(), data.clone()))
            .collect())
    }
}

impl LedgerStore for NullStore {
    fn put_balance(&self, account: &AccountId, balance: Weight) -> Result<(), StoreError> {
        lock(&self.balances)?.insert(account.clone(), balance);
        Ok(())
    }

    fn get_balance(&self, account: &AccountId) -> Result<Option<Weight>, StoreError> {
        Ok(lock(&self.balances)?.get(account).copied())
    }

    fn iter_balances(&self) -> Result<Vec<(AccountId, Weight)>, StoreError> {
        Ok(lock(&self.balances)?
            .iter()
            .map(|(a, w)| (a.clone(), *w))
            .collect())
    }
}
