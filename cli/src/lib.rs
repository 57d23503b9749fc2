//! Host side of Tally: configuration, and a serial executor that feeds a
//! script of operations into one ledger + governance engine pair while
//! supplying caller identities and block heights.

pub mod config;
pub mod host;
pub mod script;

pub use config::{ConfigError, HostConfig};
pub use host::{Host, HostError, StepReport, StepResult};
pub use script::{Script, Step};
