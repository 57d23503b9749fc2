//! In-process token ledger with a single minting authority.

use crate::balance::BalanceLedger;
use crate::error::LedgerError;
use std::collections::HashMap;
use tally_store::{LedgerStore, MetaStore};
use tally_types::{AccountId, Weight};

/// Meta-store key holding the configured minting owner.
const OWNER_META_KEY: &str = "ledger.owner";

/// Balance ledger whose only mutation is an owner-gated `mint`.
pub struct TokenLedger {
    owner: AccountId,
    balances: HashMap<AccountId, Weight>,
    total_supply: Weight,
}

impl TokenLedger {
    /// Create an empty ledger. `owner` is the only identity allowed to mint.
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            balances: HashMap::new(),
            total_supply: Weight::ZERO,
        }
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn total_supply(&self) -> Weight {
        self.total_supply
    }

    /// Number of accounts holding a non-zero balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Credit `amount` to `recipient`. Returns the recipient's new balance.
    ///
    /// Fails with `NotAuthorized` unless `caller` is the configured owner.
    /// Nothing is mutated unless every check passes.
    pub fn mint(
        &mut self,
        caller: &AccountId,
        recipient: &AccountId,
        amount: Weight,
    ) -> Result<Weight, LedgerError> {
        if caller != &self.owner {
            tracing::warn!(caller = %caller, "mint rejected: caller is not the owner");
            return Err(LedgerError::NotAuthorized {
                caller: caller.to_string(),
            });
        }
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        let new_balance = self
            .balance(recipient)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(recipient.clone(), new_balance);
        self.total_supply = new_supply;
        tracing::info!(
            recipient = %recipient,
            amount = amount.raw(),
            balance = new_balance.raw(),
            "minted voting weight"
        );
        Ok(new_balance)
    }
}

impl BalanceLedger for TokenLedger {
    fn balance(&self, account: &AccountId) -> Weight {
        self.balances.get(account).copied().unwrap_or(Weight::ZERO)
    }
}

impl TokenLedger {
    /// Persist owner and balances to a ledger store.
    pub fn save_to_store(&self, store: &dyn LedgerStore) -> Result<(), LedgerError> {
        store.put_meta(OWNER_META_KEY, self.owner.as_str().as_bytes())?;
        for (account, balance) in &self.balances {
            store.put_balance(account, *balance)?;
        }
        Ok(())
    }

    /// Restore a ledger previously written with [`TokenLedger::save_to_store`].
    pub fn load_from_store(store: &dyn LedgerStore) -> Result<Self, LedgerError> {
        let owner_bytes = store
            .get_meta(OWNER_META_KEY)?
            .ok_or_else(|| LedgerError::Corrupt("missing ledger owner".into()))?;
        let owner = String::from_utf8(owner_bytes)
            .map_err(|e| LedgerError::Corrupt(e.to_string()))
            .and_then(|s| AccountId::new(s).map_err(|e| LedgerError::Corrupt(e.to_string())))?;

        let mut balances = HashMap::new();
        let mut total_supply = Weight::ZERO;
        for (account, balance) in store.iter_balances()? {
            total_supply = total_supply
                .checked_add(balance)
                .ok_or(LedgerError::Overflow)?;
            balances.insert(account, balance);
        }
        Ok(Self {
            owner,
            balances,
            total_supply,
        })
    }
}
