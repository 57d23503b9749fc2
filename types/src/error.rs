use thiserror::Error;

/// Errors raised while constructing the shared types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid account identity: {0:?}")]
    InvalidAccount(String),

    #[error("{field} too long: {len} > {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("invalid governance parameter {name}: {reason}")]
    InvalidParam { name: &'static str, reason: String },
}
