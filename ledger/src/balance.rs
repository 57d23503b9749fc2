//! Read-only balance interface consumed by governance.

use std::collections::HashMap;
use tally_types::{AccountId, Weight};

/// Point-in-time balance lookup.
///
/// Unknown accounts have a zero balance. Implementations must return a
/// consistent value for the duration of a single governance call.
pub trait BalanceLedger {
    fn balance(&self, account: &AccountId) -> Weight;
}

/// A plain map is a ledger; handy for hosts that keep balances elsewhere.
impl BalanceLedger for HashMap<AccountId, Weight> {
    fn balance(&self, account: &AccountId) -> Weight {
        self.get(account).copied().unwrap_or(Weight::ZERO)
    }
}
