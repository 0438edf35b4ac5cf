//! Detection of plays that no cards still held at the table can beat.
//!
//! `cards_in_play` is the union of all four hands after the play was removed.
//! Formability is what counts, not who holds the cards: the scan asks whether
//! any beating combination could be assembled from the pool at all. Absence of
//! any candidate means unbeatable.

use super::cards_types::{Card, Rank, Suit};
use super::combos::{ComboKind, Combination};

/// True when nothing formable from `cards_in_play` beats `played`.
pub fn is_unbeatable(played: &Combination, cards_in_play: &[Card]) -> bool {
    let deciding = played.deciding_card();
    let beatable = match played.kind() {
        ComboKind::Single => cards_in_play.iter().any(|&c| c > deciding),
        ComboKind::Pair => {
            best_group_deciding(cards_in_play, 2).is_some_and(|c| c > deciding)
        }
        ComboKind::Triple => {
            best_group_deciding(cards_in_play, 3).is_some_and(|c| c > deciding)
        }
        ComboKind::StraightFlush => {
            best_straight_flush(cards_in_play).is_some_and(|c| c > deciding)
        }
        ComboKind::FourOfAKind => {
            straight_flush_formable(cards_in_play)
                || best_quads_rank(cards_in_play).is_some_and(|r| r > deciding.rank)
        }
        ComboKind::FullHouse => {
            straight_flush_formable(cards_in_play)
                || quads_formable(cards_in_play)
                || best_full_house_rank(cards_in_play).is_some_and(|r| r > deciding.rank)
        }
        ComboKind::Flush => {
            straight_flush_formable(cards_in_play)
                || quads_formable(cards_in_play)
                || full_house_formable(cards_in_play)
                || best_flush_deciding(cards_in_play).is_some_and(|c| c > deciding)
        }
        ComboKind::Straight => {
            straight_flush_formable(cards_in_play)
                || quads_formable(cards_in_play)
                || full_house_formable(cards_in_play)
                || flush_formable(cards_in_play)
                || best_straight_deciding(cards_in_play).is_some_and(|c| c > deciding)
        }
    };
    !beatable
}

fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank.index() as usize] += 1;
    }
    counts
}

/// Deciding card of the best formable pair/triple: the highest card whose
/// rank appears at least `size` times in the pool.
fn best_group_deciding(cards: &[Card], size: u8) -> Option<Card> {
    let counts = rank_counts(cards);
    cards
        .iter()
        .copied()
        .filter(|c| counts[c.rank.index() as usize] >= size)
        .max()
}

/// Highest rank with four cards in the pool and a kicker available.
fn best_quads_rank(cards: &[Card]) -> Option<Rank> {
    if cards.len() < 5 {
        // four of a rank but nothing left for the fifth card
        return None;
    }
    let counts = rank_counts(cards);
    Rank::ALL
        .iter()
        .copied()
        .rev()
        .find(|r| counts[r.index() as usize] == 4)
}

fn quads_formable(cards: &[Card]) -> bool {
    best_quads_rank(cards).is_some()
}

/// Highest triple rank that still leaves a pair of some other rank.
fn best_full_house_rank(cards: &[Card]) -> Option<Rank> {
    let counts = rank_counts(cards);
    let mut best = None;
    for r in Rank::ALL {
        if counts[r.index() as usize] >= 3 {
            let pair_exists = Rank::ALL
                .iter()
                .any(|&s| s != r && counts[s.index() as usize] >= 2);
            if pair_exists {
                best = Some(r);
            }
        }
    }
    best
}

fn full_house_formable(cards: &[Card]) -> bool {
    best_full_house_rank(cards).is_some()
}

fn flush_formable(cards: &[Card]) -> bool {
    let mut counts = [0u8; 4];
    for card in cards {
        counts[card.suit as usize] += 1;
    }
    counts.iter().any(|&c| c >= 5)
}

/// Deciding card of the best formable flush: for each suit with five or more
/// cards, the flush containing that suit's top card.
fn best_flush_deciding(cards: &[Card]) -> Option<Card> {
    let mut best: Option<Card> = None;
    for suit in Suit::ALL {
        let of_suit: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        if of_suit.len() >= 5 {
            if let Some(&top) = of_suit.iter().max() {
                if best.map_or(true, |b| top > b) {
                    best = Some(top);
                }
            }
        }
    }
    best
}

fn rank_mask(cards: impl Iterator<Item = Card>) -> u16 {
    let mut mask = 0u16;
    for card in cards {
        mask |= 1 << card.rank.index();
    }
    mask
}

/// Deciding card of the best formable straight flush.
fn best_straight_flush(cards: &[Card]) -> Option<Card> {
    let mut best: Option<Card> = None;
    for suit in Suit::ALL {
        let mask = rank_mask(cards.iter().copied().filter(|c| c.suit == suit));
        for top in (4..13usize).rev() {
            let window = 0b11111u16 << (top - 4);
            if mask & window == window {
                let candidate = Card::new(Rank::ALL[top], suit);
                if best.map_or(true, |b| candidate > b) {
                    best = Some(candidate);
                }
                break;
            }
        }
    }
    best
}

fn straight_flush_formable(cards: &[Card]) -> bool {
    best_straight_flush(cards).is_some()
}

/// Deciding card of the best formable straight: the highest complete run's
/// top rank, taking the strongest suit held at that rank.
fn best_straight_deciding(cards: &[Card]) -> Option<Card> {
    let mask = rank_mask(cards.iter().copied());
    for top in (4..13usize).rev() {
        let window = 0b11111u16 << (top - 4);
        if mask & window == window {
            let top_rank = Rank::ALL[top];
            return cards.iter().copied().filter(|c| c.rank == top_rank).max();
        }
    }
    None
}
