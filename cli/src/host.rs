//! Serial executor: one ledger, one engine, one block height.

use crate::config::HostConfig;
use crate::script::{Script, Step};
use serde::Serialize;
use serde_json::{json, Value};
use tally_governance::{GovernanceEngine, GovernanceError, ProposalDraft};
use tally_ledger::{BalanceLedger, LedgerError, TokenLedger};
use tally_types::BlockHeight;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of one script step.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResult {
    Ok { value: Value },
    Err { error: String },
}

/// One line of replay output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub op: &'static str,
    /// Height the step ran at.
    pub height: u64,
    #[serde(flatten)]
    pub result: StepResult,
}

impl StepReport {
    pub fn is_ok(&self) -> bool {
        matches!(self.result, StepResult::Ok { .. })
    }
}

/// Owns the ledger and engine and hands them every call in order.
pub struct Host {
    ledger: TokenLedger,
    engine: GovernanceEngine,
    height: BlockHeight,
}

impl Host {
    pub fn new(config: &HostConfig) -> Result<Self, HostError> {
        Ok(Self {
            ledger: TokenLedger::new(config.owner.clone()),
            engine: GovernanceEngine::new(config.governance.clone())?,
            height: BlockHeight::new(config.start_height),
        })
    }

    pub fn height(&self) -> BlockHeight {
        self.height
    }

    pub fn engine(&self) -> &GovernanceEngine {
        &self.engine
    }

    pub fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }

    /// Apply one step at the current height.
    pub fn apply(&mut self, step: &Step) -> Result<Value, HostError> {
        let value = match step {
            Step::Mint {
                caller,
                recipient,
                amount,
            } => {
                let balance = self.ledger.mint(caller, recipient, *amount)?;
                json!({ "balance": balance.raw() })
            }
            Step::Propose {
                proposer,
                title,
                description,
                action,
                execution_delay,
            } => {
                let draft = ProposalDraft {
                    title: title.clone(),
                    description: description.clone(),
                    action: action.clone(),
                    execution_delay: *execution_delay,
                };
                let id = self
                    .engine
                    .create_proposal(draft, proposer, self.height, &self.ledger)?;
                json!({ "proposal": id.as_u64() })
            }
            Step::Vote {
                voter,
                proposal,
                support,
            } => {
                let weight = self
                    .engine
                    .vote(*proposal, *support, voter, self.height, &self.ledger)?;
                json!({ "weight": weight.raw() })
            }
            Step::Finalize { proposal } => {
                let status = self.engine.finalize_proposal(*proposal, self.height)?;
                serde_json::to_value(status)?
            }
            Step::Advance { blocks } => {
                self.height = self.height.saturating_add(*blocks);
                json!({ "height": self.height.as_u64() })
            }
            Step::Show { proposal } => serde_json::to_value(self.engine.proposal(*proposal)?)?,
            Step::Balance { account } => json!({ "balance": self.ledger.balance(account).raw() }),
        };
        Ok(value)
    }

    /// Run a script in order. With `fail_fast`, stops after the first failed
    /// step; otherwise failed steps are reported and the script continues.
    pub fn run(&mut self, script: &Script, fail_fast: bool) -> Vec<StepReport> {
        let mut reports = Vec::with_capacity(script.steps.len());
        for (index, step) in script.steps.iter().enumerate() {
            let height = self.height.as_u64();
            let result = match self.apply(step) {
                Ok(value) => StepResult::Ok { value },
                Err(e) => {
                    tracing::warn!(step = index, op = step.name(), error = %e, "step failed");
                    StepResult::Err {
                        error: e.to_string(),
                    }
                }
            };
            let report = StepReport {
                step: index,
                op: step.name(),
                height,
                result,
            };
            let failed = !report.is_ok();
            reports.push(report);
            if failed && fail_fast {
                break;
            }
        }
        reports
    }
}
