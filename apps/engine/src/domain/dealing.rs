//! Deterministic card dealing and deal installation.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, OPENING_CARD, SEATS};
use crate::domain::state::{RoundState, Seat, TablePhase, TableState};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate a full 52-card deck in ascending game order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Deal four sorted 13-card hands from a seeded shuffle.
///
/// The same seed always yields the same hands, which keeps simulator runs and
/// tests reproducible.
pub fn shuffled_deal(seed: u64) -> [Vec<Card>; SEATS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; SEATS] = Default::default();
    for (seat, hand_slot) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        let mut hand = deck[start..start + HAND_SIZE].to_vec();
        hand.sort_unstable();
        *hand_slot = hand;
    }
    hands
}

/// Install a fresh deal and open play.
///
/// Validates the hands before touching the state: exactly 13 cards per seat
/// and 52 distinct cards overall (which makes the deck complete). The holder
/// of the opening three of diamonds leads trick 1 and is returned.
///
/// `next_timer_seq` deliberately survives installation so timer sequence ids
/// from a previous deal can never be confused with new ones.
pub fn install_deal(
    state: &mut TableState,
    hands: [Vec<Card>; SEATS],
) -> Result<Seat, DomainError> {
    if state.phase == TablePhase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Cannot install a deal while one is in progress",
        ));
    }

    for (seat, hand) in hands.iter().enumerate() {
        if hand.len() != HAND_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeal,
                format!(
                    "Seat {seat} was dealt {} cards, expected {HAND_SIZE}",
                    hand.len()
                ),
            ));
        }
    }
    let mut all: Vec<Card> = hands.iter().flatten().copied().collect();
    all.sort_unstable();
    if all.windows(2).any(|w| w[0] == w[1]) {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeal,
            "Deal contains a duplicate card",
        ));
    }

    // 52 distinct cards of a 52-card space is the whole deck, so the opening
    // card is present; require_ keeps that checked rather than assumed.
    let opening = hands
        .iter()
        .position(|hand| hand.contains(&OPENING_CARD))
        .ok_or_else(|| {
            DomainError::validation_other("Invariant violated: opening card missing from full deal")
        })? as Seat;

    state.hands = hands;
    for hand in &mut state.hands {
        hand.sort_unstable();
    }
    state.phase = TablePhase::Playing;
    state.finished_order.clear();
    state.round = RoundState::empty();
    state.round.trick_no = 1;
    state.round.trick_leader = Some(opening);
    state.turn = Some(opening);
    Ok(opening)
}
