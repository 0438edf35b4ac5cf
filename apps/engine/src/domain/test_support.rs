//! Shared builders for domain tests.

use super::cards_parsing::try_parse_cards;
use super::combos::{classify, Combination};
use super::rules::SEATS;
use super::state::{Seat, SeatInfo, TablePhase, TableState};
use super::Card;

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap()
}

pub fn combo(tokens: &[&str]) -> Combination {
    classify(&cards(tokens)).unwrap()
}

pub fn human_seats() -> [SeatInfo; SEATS] {
    [
        SeatInfo::human(1, 0),
        SeatInfo::human(2, 1),
        SeatInfo::human(3, 2),
        SeatInfo::human(4, 3),
    ]
}

/// A table mid-deal with the given hands and `turn` to act. Finished seats
/// are expressed as empty hand slices.
pub fn playing_state(hands: [&[&str]; SEATS], turn: Seat) -> TableState {
    let mut state = TableState::new(human_seats());
    state.phase = TablePhase::Playing;
    for (i, tokens) in hands.iter().enumerate() {
        state.hands[i] = cards(tokens);
    }
    state.turn = Some(turn);
    state.round.trick_leader = Some(turn);
    state.round.trick_no = 1;
    state
}

/// Same, with a play already on the table from `last_player`.
pub fn playing_state_with_last(
    hands: [&[&str]; SEATS],
    turn: Seat,
    last_player: Seat,
    last: &[&str],
) -> TableState {
    let mut state = playing_state(hands, turn);
    state.round.last_accepted = Some(combo(last));
    state.round.last_player = Some(last_player);
    state.round.trick_leader = Some(last_player);
    state
}
