// Proptest generators for domain types.
// Shape generators build card sets that classify as the intended combination
// (or its straight-flush upgrade when suits happen to align).

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    (0usize..Suit::ALL.len()).prop_map(|i| Suit::ALL[i])
}

pub fn rank() -> impl Strategy<Value = Rank> {
    (0usize..Rank::ALL.len()).prop_map(|i| Rank::ALL[i])
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Exactly `count` distinct cards, in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), count).prop_shuffle()
}

/// Between 1 and `max_count` distinct cards, in random order.
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), 1..=max_count).prop_shuffle()
}

pub fn two_distinct_cards() -> impl Strategy<Value = (Card, Card)> {
    unique_cards(2).prop_map(|cards| (cards[0], cards[1]))
}

pub fn pair() -> impl Strategy<Value = Vec<Card>> {
    (rank(), prop::sample::subsequence(Suit::ALL.to_vec(), 2))
        .prop_map(|(r, suits)| suits.into_iter().map(|s| Card::new(r, s)).collect())
}

pub fn triple() -> impl Strategy<Value = Vec<Card>> {
    (rank(), prop::sample::subsequence(Suit::ALL.to_vec(), 3))
        .prop_map(|(r, suits)| suits.into_iter().map(|s| Card::new(r, s)).collect())
}

/// Five consecutive ranks with free suits. Classifies as a straight, or a
/// straight flush when all five suits coincide.
pub fn straight_five() -> impl Strategy<Value = Vec<Card>> {
    (0usize..=8, prop::collection::vec(suit(), 5)).prop_map(|(start, suits)| {
        suits
            .into_iter()
            .enumerate()
            .map(|(i, s)| Card::new(Rank::ALL[start + i], s))
            .collect()
    })
}

/// Five distinct ranks of one suit. Classifies as a flush, or a straight
/// flush when the ranks happen to run.
pub fn flush_five() -> impl Strategy<Value = Vec<Card>> {
    (suit(), prop::sample::subsequence(Rank::ALL.to_vec(), 5))
        .prop_map(|(s, ranks)| ranks.into_iter().map(|r| Card::new(r, s)).collect())
}

pub fn full_house_five() -> impl Strategy<Value = Vec<Card>> {
    (
        prop::sample::subsequence(Rank::ALL.to_vec(), 2),
        any::<bool>(),
        prop::sample::subsequence(Suit::ALL.to_vec(), 3),
        prop::sample::subsequence(Suit::ALL.to_vec(), 2),
    )
        .prop_map(|(ranks, swap, triple_suits, pair_suits)| {
            let (triple_rank, pair_rank) = if swap {
                (ranks[1], ranks[0])
            } else {
                (ranks[0], ranks[1])
            };
            triple_suits
                .into_iter()
                .map(|s| Card::new(triple_rank, s))
                .chain(pair_suits.into_iter().map(|s| Card::new(pair_rank, s)))
                .collect()
        })
}

pub fn four_kind_five() -> impl Strategy<Value = Vec<Card>> {
    (rank(), card())
        .prop_filter("kicker must not share the quad rank", |(r, kicker)| {
            kicker.rank != *r
        })
        .prop_map(|(r, kicker)| {
            let mut cards: Vec<Card> = Suit::ALL.into_iter().map(|s| Card::new(r, s)).collect();
            cards.push(kicker);
            cards
        })
}

pub fn straight_flush_five() -> impl Strategy<Value = Vec<Card>> {
    (0usize..=8, suit()).prop_map(|(start, s)| {
        (0..5).map(|i| Card::new(Rank::ALL[start + i], s)).collect()
    })
}

/// Any five-card shape the ladder knows about.
pub fn five_card_combo() -> impl Strategy<Value = Vec<Card>> {
    prop_oneof![
        straight_five(),
        flush_five(),
        full_house_five(),
        four_kind_five(),
        straight_flush_five(),
    ]
}

/// Card sets across every category: singles, pairs, triples, five-card.
pub fn any_combo_cards() -> impl Strategy<Value = Vec<Card>> {
    prop_oneof![
        unique_cards(1),
        pair(),
        triple(),
        five_card_combo(),
    ]
}
