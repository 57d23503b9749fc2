//! Nullable infrastructure for deterministic testing.
//!
//! Everything governance treats as an external collaborator (the block-height
//! source and storage) gets a test-friendly implementation here that:
//! - Returns deterministic values
//! - Can be controlled programmatically
//! - Never touches the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod chain;
pub mod store;

pub use chain::NullChain;
pub use store::NullStore;
