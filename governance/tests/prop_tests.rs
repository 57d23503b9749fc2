use std::collections::HashMap;

use proptest::prelude::*;

use tally_governance::{GovernanceEngine, GovernanceError, ProposalDraft, ProposalStatus};
use tally_types::{AccountId, BlockHeight, Description, GovernanceParams, Title, Weight};

fn account(i: usize) -> AccountId {
    AccountId::new(format!("voter{i}")).unwrap()
}

fn draft() -> ProposalDraft {
    ProposalDraft {
        title: Title::new("prop").unwrap(),
        description: Description::new("generated").unwrap(),
        action: None,
        execution_delay: 0,
    }
}

fn proposer() -> AccountId {
    AccountId::new("proposer").unwrap()
}

/// One attempted vote: (voter index, support, height offset from creation).
fn vote_strategy() -> impl Strategy<Value = (usize, bool, u64)> {
    (0usize..8, any::<bool>(), 0u64..200)
}

proptest! {
    /// The tally always equals the sum of the recorded vote weights, and each
    /// voter holds at most one record.
    #[test]
    fn tally_equals_sum_of_records(
        weights in prop::collection::vec(0u64..10_000, 8),
        attempts in prop::collection::vec(vote_strategy(), 0..40),
    ) {
        let mut ledger: HashMap<AccountId, Weight> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| (account(i), Weight::new(*w)))
            .collect();
        ledger.insert(proposer(), Weight::new(100));

        let mut engine = GovernanceEngine::new(GovernanceParams::default()).unwrap();
        let id = engine
            .create_proposal(draft(), &proposer(), BlockHeight::new(0), &ledger)
            .unwrap();

        for (voter, support, at) in attempts {
            let _ = engine.vote(id, support, &account(voter), BlockHeight::new(at), &ledger);
        }

        let mut sum_for = 0u64;
        let mut sum_against = 0u64;
        let mut voters = 0usize;
        for (_, record) in engine.votes_on(id) {
            voters += 1;
            if record.support {
                sum_for += record.weight.raw();
            } else {
                sum_against += record.weight.raw();
            }
        }
        let p = engine.proposal(id).unwrap();
        prop_assert_eq!(p.votes_for.raw(), sum_for);
        prop_assert_eq!(p.votes_against.raw(), sum_against);
        prop_assert!(voters <= 8);
    }

    /// A repeated vote never changes the tally, whatever the voter's current
    /// balance.
    #[test]
    fn second_vote_never_moves_tally(
        first in 1u64..10_000,
        later in 0u64..10_000,
        support_a in any::<bool>(),
        support_b in any::<bool>(),
    ) {
        let voter = account(0);
        let mut ledger = HashMap::from([(proposer(), Weight::new(100)), (voter.clone(), Weight::new(first))]);
        let mut engine = GovernanceEngine::new(GovernanceParams::default()).unwrap();
        let id = engine
            .create_proposal(draft(), &proposer(), BlockHeight::new(0), &ledger)
            .unwrap();

        engine.vote(id, support_a, &voter, BlockHeight::new(1), &ledger).unwrap();
        let before = engine.proposal(id).unwrap().tally();

        ledger.insert(voter.clone(), Weight::new(later));
        let again = engine.vote(id, support_b, &voter, BlockHeight::new(2), &ledger);
        let is_already_voted = matches!(again, Err(GovernanceError::AlreadyVoted { .. }));
        prop_assert!(is_already_voted);
        prop_assert_eq!(engine.proposal(id).unwrap().tally(), before);
    }

    /// Once finalized, a proposal's status and tally never change again.
    #[test]
    fn finalized_status_is_absorbing(
        votes_for in 0u64..2_000,
        votes_against in 0u64..2_000,
        later in prop::collection::vec((any::<bool>(), 0u64..400), 0..10),
    ) {
        let yes = AccountId::new("yes").unwrap();
        let no = AccountId::new("no").unwrap();
        let ledger = HashMap::from([
            (proposer(), Weight::new(100)),
            (yes.clone(), Weight::new(votes_for)),
            (no.clone(), Weight::new(votes_against)),
            (account(1), Weight::new(50)),
        ]);
        let mut engine = GovernanceEngine::new(GovernanceParams::default()).unwrap();
        let id = engine
            .create_proposal(draft(), &proposer(), BlockHeight::new(0), &ledger)
            .unwrap();
        let _ = engine.vote(id, true, &yes, BlockHeight::new(1), &ledger);
        let _ = engine.vote(id, false, &no, BlockHeight::new(1), &ledger);

        let Ok(status) = engine.finalize_proposal(id, BlockHeight::new(145)) else {
            // Quorum missed: the proposal must still be active.
            prop_assert!(engine.proposal(id).unwrap().is_active());
            return Ok(());
        };
        prop_assert_ne!(status, ProposalStatus::Active);
        let frozen = engine.proposal(id).unwrap().clone();

        for (finalize, at) in later {
            if finalize {
                let again = engine.finalize_proposal(id, BlockHeight::new(at));
                prop_assert!(again.is_err());
            } else {
                let again = engine.vote(id, true, &account(1), BlockHeight::new(at), &ledger);
                prop_assert!(again.is_err());
            }
            prop_assert_eq!(engine.proposal(id).unwrap(), &frozen);
        }
    }

    /// Approval is exactly `floor(for * 1000 / total) >= threshold`.
    #[test]
    fn approval_rule_matches_integer_ratio(
        votes_for in 0u64..5_000,
        votes_against in 0u64..5_000,
        threshold in 0u32..=1000,
    ) {
        prop_assume!(votes_for + votes_against >= 1);
        let params = GovernanceParams {
            quorum_threshold: Weight::new(1),
            approval_threshold_permille: threshold,
            ..GovernanceParams::default()
        };
        let yes = AccountId::new("yes").unwrap();
        let no = AccountId::new("no").unwrap();
        let ledger = HashMap::from([
            (proposer(), Weight::new(100)),
            (yes.clone(), Weight::new(votes_for)),
            (no.clone(), Weight::new(votes_against)),
        ]);
        let mut engine = GovernanceEngine::new(params).unwrap();
        let id = engine
            .create_proposal(draft(), &proposer(), BlockHeight::new(0), &ledger)
            .unwrap();
        let _ = engine.vote(id, true, &yes, BlockHeight::new(1), &ledger);
        let _ = engine.vote(id, false, &no, BlockHeight::new(1), &ledger);

        let status = engine.finalize_proposal(id, BlockHeight::new(145)).unwrap();
        let ratio = u128::from(votes_for) * 1000 / u128::from(votes_for + votes_against);
        let expected = if ratio >= u128::from(threshold) {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Rejected
        };
        prop_assert_eq!(status, expected);
    }
}
