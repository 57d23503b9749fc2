//! Fundamental types for Tally governance.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! account identities, block heights, voting weights, the bounded proposal
//! fields, and the governance parameters.

pub mod account;
pub mod error;
pub mod height;
pub mod params;
pub mod text;
pub mod weight;

pub use account::AccountId;
pub use error::TypesError;
pub use height::BlockHeight;
pub use params::GovernanceParams;
pub use text::{ActionPayload, Description, Title};
pub use weight::Weight;
