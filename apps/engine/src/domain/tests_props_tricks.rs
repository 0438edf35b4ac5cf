//! Property tests driving whole deals through the table state machine.
//!
//! A seeded playout picks uniformly among the enumerated legal actions each
//! turn and asserts the bookkeeping invariants every layer above leans on:
//! stored pass counts stay below three, the turn always sits on an unfinished
//! seat, enumeration and acceptance agree, and every deal terminates.

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::dealing::{install_deal, shuffled_deal};
use crate::domain::legal_moves::legal_actions;
use crate::domain::rules::OPENING_CARD;
use crate::domain::state::{TablePhase, TableState};
use crate::domain::test_support::human_seats;
use crate::domain::tricks::{next_seat_card_count, submit_pass, submit_play};
use crate::domain::{test_prelude, ComboKind};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_install_opens_with_the_three_of_diamonds(seed in any::<u64>()) {
        let mut state = TableState::new(human_seats());
        let opening = install_deal(&mut state, shuffled_deal(seed)).unwrap();
        prop_assert!(state.hand(opening).contains(&OPENING_CARD));
        prop_assert_eq!(state.turn, Some(opening));
        prop_assert_eq!(state.round.trick_leader, Some(opening));
    }

    #[test]
    fn prop_random_playout_preserves_invariants(
        deal_seed in any::<u64>(),
        choice_seed in any::<u64>(),
    ) {
        let mut state = TableState::new(human_seats());
        install_deal(&mut state, shuffled_deal(deal_seed)).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(choice_seed);
        let mut actions = 0u32;
        while state.phase == TablePhase::Playing {
            actions += 1;
            prop_assert!(actions <= 400, "playout did not terminate");

            let seat = state.turn.unwrap();
            prop_assert!(!state.seat_finished(seat), "turn sits on a finished seat");
            prop_assert!(state.round.consecutive_passes <= 2);
            if state.round.last_accepted.is_none() {
                prop_assert_eq!(state.round.trick_leader, Some(seat));
            }

            let legal = legal_actions(
                state.hand(seat),
                state.round.last_accepted.as_ref(),
                next_seat_card_count(&state, seat),
            );
            prop_assert!(
                legal.may_pass || !legal.plays.is_empty(),
                "seat {} has no legal action",
                seat
            );

            // enumeration and acceptance must agree on singles, both ways
            if state.hand(seat).len() <= 4 {
                for &card in state.hand(seat) {
                    let mut probe = state.clone();
                    let accepted = submit_play(&mut probe, seat, &[card]).is_ok();
                    let listed = legal.plays.iter().any(|c| {
                        c.kind() == ComboKind::Single && c.deciding_card() == card
                    });
                    prop_assert_eq!(accepted, listed, "single {:?} divergence", card);
                }
                if !legal.may_pass {
                    let mut probe = state.clone();
                    prop_assert!(submit_pass(&mut probe, seat).is_err());
                }
            }

            let choices = legal.plays.len() + usize::from(legal.may_pass);
            let pick = rng.random_range(0..choices);
            if pick < legal.plays.len() {
                let cards = legal.plays[pick].cards().to_vec();
                let outcome = submit_play(&mut state, seat, &cards);
                prop_assert!(outcome.is_ok(), "enumerated play rejected: {:?}", outcome);
            } else {
                let outcome = submit_pass(&mut state, seat);
                prop_assert!(outcome.is_ok(), "enumerated pass rejected: {:?}", outcome);
            }
        }

        prop_assert_eq!(state.phase, TablePhase::Completed);
        prop_assert!(state.turn.is_none());
        prop_assert_eq!(state.unfinished_count(), 1);
        let mut order = state.finished_order.clone();
        order.sort_unstable();
        order.dedup();
        prop_assert_eq!(order.len(), 3, "finished seats must be distinct");
    }
}
