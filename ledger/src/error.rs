use tally_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{caller} is not authorized to mint")]
    NotAuthorized { caller: String },

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("arithmetic overflow in balance computation")]
    Overflow,

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("corrupt ledger state: {0}")]
    Corrupt(String),
}
