//! End-to-end lifecycle scenarios driven through the public API with a real
//! token ledger and a nullable chain.

use tally_governance::{GovernanceEngine, GovernanceError, ProposalDraft, ProposalId, ProposalStatus};
use tally_ledger::{BalanceLedger, TokenLedger};
use tally_nullables::{NullChain, NullStore};
use tally_types::{AccountId, Description, GovernanceParams, Title, Weight};

fn account(name: &str) -> AccountId {
    AccountId::new(name).unwrap()
}

fn draft(title: &str) -> ProposalDraft {
    ProposalDraft {
        title: Title::new(title).unwrap(),
        description: Description::new("community treasury grant").unwrap(),
        action: None,
        execution_delay: 10,
    }
}

struct Harness {
    owner: AccountId,
    ledger: TokenLedger,
    engine: GovernanceEngine,
    chain: NullChain,
}

impl Harness {
    fn new(start_height: u64) -> Self {
        let owner = account("minter");
        Self {
            ledger: TokenLedger::new(owner.clone()),
            owner,
            engine: GovernanceEngine::new(GovernanceParams::default()).unwrap(),
            chain: NullChain::new(start_height),
        }
    }

    fn fund(&mut self, name: &str, amount: u64) {
        self.ledger
            .mint(&self.owner, &account(name), Weight::new(amount))
            .unwrap();
    }

    fn propose(&mut self, proposer: &str) -> Result<ProposalId, GovernanceError> {
        self.engine.create_proposal(
            draft("grant"),
            &account(proposer),
            self.chain.height(),
            &self.ledger,
        )
    }

    fn vote(&mut self, id: ProposalId, voter: &str, support: bool) -> Result<Weight, GovernanceError> {
        self.engine
            .vote(id, support, &account(voter), self.chain.height(), &self.ledger)
    }

    fn finalize(&mut self, id: ProposalId) -> Result<ProposalStatus, GovernanceError> {
        self.engine.finalize_proposal(id, self.chain.height())
    }
}

#[test]
fn single_voter_below_quorum() {
    let mut h = Harness::new(5);
    h.fund("author", 150);
    h.fund("alice", 400);

    let id = h.propose("author").unwrap();
    assert_eq!(id, ProposalId::new(0));
    assert_eq!(h.engine.proposal(id).unwrap().status, ProposalStatus::Active);

    h.chain.set(10);
    h.vote(id, "alice", true).unwrap();
    assert_eq!(h.engine.proposal(id).unwrap().votes_for, Weight::new(400));

    assert!(matches!(
        h.vote(id, "alice", true),
        Err(GovernanceError::AlreadyVoted { .. })
    ));

    h.chain.set(200);
    assert!(matches!(
        h.finalize(id),
        Err(GovernanceError::QuorumNotReached { have: 400, need: 500 })
    ));
    assert_eq!(h.engine.proposal(id).unwrap().status, ProposalStatus::Active);
}

#[test]
fn two_voters_reach_supermajority() {
    let mut h = Harness::new(0);
    h.fund("author", 100);
    h.fund("alice", 600);
    h.fund("bob", 200);

    let id = h.propose("author").unwrap();
    h.chain.advance(3);
    h.vote(id, "alice", true).unwrap();
    h.vote(id, "bob", false).unwrap();

    h.chain.advance(200);
    assert_eq!(h.finalize(id).unwrap(), ProposalStatus::Approved);
    let p = h.engine.proposal(id).unwrap();
    assert_eq!(p.total_votes(), 800);
    assert_eq!(p.tally().approval_permille(), 750);

    // Terminal state is absorbing.
    h.chain.advance(1);
    assert!(matches!(
        h.finalize(id),
        Err(GovernanceError::AlreadyFinalized {
            status: ProposalStatus::Approved,
            ..
        })
    ));
}

#[test]
fn minting_after_a_vote_does_not_change_the_tally() {
    let mut h = Harness::new(0);
    h.fund("author", 100);
    h.fund("alice", 300);

    let id = h.propose("author").unwrap();
    h.vote(id, "alice", true).unwrap();
    h.fund("alice", 5_000);

    assert_eq!(h.ledger.balance(&account("alice")), Weight::new(5_300));
    assert_eq!(h.engine.proposal(id).unwrap().votes_for, Weight::new(300));
    assert_eq!(
        h.engine.vote_of(id, &account("alice")).unwrap().weight,
        Weight::new(300)
    );
}

#[test]
fn unfunded_author_cannot_propose_and_counter_is_untouched() {
    let mut h = Harness::new(0);
    h.fund("author", 99);

    assert!(matches!(
        h.propose("author"),
        Err(GovernanceError::InsufficientWeight { have: 99, need: 100 })
    ));
    assert_eq!(h.engine.proposal_count(), 0);

    h.fund("author", 1);
    assert_eq!(h.propose("author").unwrap(), ProposalId::new(0));
}

#[test]
fn rejected_outcome_when_against_dominates() {
    let mut h = Harness::new(0);
    h.fund("author", 100);
    h.fund("alice", 300);
    h.fund("bob", 700);

    let id = h.propose("author").unwrap();
    h.vote(id, "alice", true).unwrap();
    h.vote(id, "bob", false).unwrap();
    h.chain.set(145);
    assert_eq!(h.finalize(id).unwrap(), ProposalStatus::Rejected);
}

#[test]
fn engine_and_ledger_survive_a_restart() {
    let mut h = Harness::new(0);
    h.fund("author", 100);
    h.fund("alice", 600);
    let id = h.propose("author").unwrap();
    h.vote(id, "alice", true).unwrap();

    let store = NullStore::new();
    h.engine.save_to_store(&store).unwrap();
    h.ledger.save_to_store(&store).unwrap();

    let ledger = TokenLedger::load_from_store(&store).unwrap();
    let mut engine = GovernanceEngine::load_from_store(&store, GovernanceParams::default()).unwrap();

    // The restored vote table still blocks a second vote.
    assert!(matches!(
        engine.vote(id, false, &account("alice"), h.chain.height(), &ledger),
        Err(GovernanceError::AlreadyVoted { .. })
    ));
    assert_eq!(engine.finalize_proposal(id, 145u64.into()).unwrap(), ProposalStatus::Approved);
}
