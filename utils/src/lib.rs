//! Shared utilities for Tally.

pub mod logging;

pub use logging::{init_logging, LogFormat};
