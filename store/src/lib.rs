//! Abstract storage traits for Tally.
//!
//! Persistence is owned by the host. Any backend (embedded KV store, the host
//! ledger's own state, in-memory for testing) implements these traits and the
//! engines persist themselves through them.

pub mod error;
pub mod governance;
pub mod ledger;
pub mod meta;

pub use error::StoreError;
pub use governance::GovernanceStore;
pub use ledger::LedgerStore;
pub use meta::MetaStore;
