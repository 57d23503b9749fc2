//! Replay scripts: an ordered list of operations, applied one at a time.

use serde::{Deserialize, Serialize};
use tally_governance::ProposalId;
use tally_types::{AccountId, ActionPayload, Description, Title, Weight};

/// A replay script as read from JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// One host-level operation. Bounded fields are validated while parsing, so
/// an oversized title fails the whole script before anything runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Privileged: credit voting weight.
    Mint {
        caller: AccountId,
        recipient: AccountId,
        amount: Weight,
    },
    Propose {
        proposer: AccountId,
        title: Title,
        description: Description,
        #[serde(default)]
        action: Option<ActionPayload>,
        #[serde(default)]
        execution_delay: u64,
    },
    Vote {
        voter: AccountId,
        proposal: ProposalId,
        support: bool,
    },
    Finalize {
        proposal: ProposalId,
    },
    /// Move the chain forward.
    Advance {
        blocks: u64,
    },
    /// Read a proposal.
    Show {
        proposal: ProposalId,
    },
    /// Read an account's balance.
    Balance {
        account: AccountId,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mint { .. } => "mint",
            Self::Propose { .. } => "propose",
            Self::Vote { .. } => "vote",
            Self::Finalize { .. } => "finalize",
            Self::Advance { .. } => "advance",
            Self::Show { .. } => "show",
            Self::Balance { .. } => "balance",
        }
    }
}
