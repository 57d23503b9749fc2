//! Voting-weight balance ledger.
//!
//! Governance only ever reads balances, through the [`BalanceLedger`] trait.
//! [`TokenLedger`] is the in-process ledger the host can use when it has no
//! balance store of its own: balances only grow, and only through `mint`,
//! which is restricted to a single owner fixed at construction.

pub mod balance;
pub mod error;
pub mod token;

pub use balance::BalanceLedger;
pub use error::LedgerError;
pub use token::TokenLedger;
