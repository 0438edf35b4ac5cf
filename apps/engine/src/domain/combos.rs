//! Combination classification.
//!
//! `classify` is the only constructor for [`Combination`]; the kind is always
//! derived from the cards, never asserted by a caller. That holds across
//! serialization too: deserializing re-classifies and rejects mismatched kinds.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// The eight playable shapes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComboKind {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl ComboKind {
    pub fn card_count(self) -> usize {
        match self {
            ComboKind::Single => 1,
            ComboKind::Pair => 2,
            ComboKind::Triple => 3,
            ComboKind::Straight
            | ComboKind::Flush
            | ComboKind::FullHouse
            | ComboKind::FourOfAKind
            | ComboKind::StraightFlush => 5,
        }
    }

    /// Position on the five-card ladder (Straight lowest, StraightFlush
    /// highest); `None` for the one/two/three-card kinds.
    pub(crate) fn five_card_rank(self) -> Option<u8> {
        match self {
            ComboKind::Straight => Some(0),
            ComboKind::Flush => Some(1),
            ComboKind::FullHouse => Some(2),
            ComboKind::FourOfAKind => Some(3),
            ComboKind::StraightFlush => Some(4),
            _ => None,
        }
    }
}

/// Cardinality bucket. Plays are only ever comparable within one category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KindCategory {
    Single,
    Pair,
    Triple,
    FiveCard,
}

/// A classified play: kind plus the cards that form it, sorted ascending.
///
/// Fields are private so the kind/cards pairing can never drift apart.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Combination {
    kind: ComboKind,
    cards: Vec<Card>,
}

impl Combination {
    pub fn kind(&self) -> ComboKind {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn category(&self) -> KindCategory {
        match self.kind {
            ComboKind::Single => KindCategory::Single,
            ComboKind::Pair => KindCategory::Pair,
            ComboKind::Triple => KindCategory::Triple,
            _ => KindCategory::FiveCard,
        }
    }

    /// The card that decides comparisons within this kind.
    ///
    /// For full houses this is the highest card of the triple, for quads the
    /// highest card of the four; for every other kind the highest card held.
    pub fn deciding_card(&self) -> Card {
        match self.kind {
            ComboKind::FullHouse => self.max_card_of_group(3),
            ComboKind::FourOfAKind => self.max_card_of_group(4),
            // cards is non-empty by construction
            _ => self.cards[self.cards.len() - 1],
        }
    }

    fn max_card_of_group(&self, size: usize) -> Card {
        let mut best = self.cards[0];
        for &card in &self.cards {
            let count = self.cards.iter().filter(|c| c.rank == card.rank).count();
            // ascending iteration leaves the highest card of the group last
            if count == size {
                best = card;
            }
        }
        best
    }
}

/// Classify raw cards into a [`Combination`].
///
/// Rejects duplicates, unplayable cardinalities (0, 4, 6+), and five-card
/// hands that form none of the ladder shapes.
pub fn classify(cards: &[Card]) -> Result<Combination, DomainError> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    let before = sorted.len();
    sorted.dedup();
    if sorted.len() != before {
        return Err(DomainError::validation(
            ValidationKind::InvalidCombination,
            "Duplicate cards in submission",
        ));
    }

    let kind = match sorted.len() {
        1 => ComboKind::Single,
        2 if same_rank(&sorted) => ComboKind::Pair,
        3 if same_rank(&sorted) => ComboKind::Triple,
        5 => classify_five(&sorted).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidCombination,
                "Five cards form no straight, flush, full house, quads, or straight flush",
            )
        })?,
        n => {
            return Err(DomainError::validation(
                ValidationKind::InvalidCombination,
                format!("Cannot play {n} cards"),
            ))
        }
    };

    Ok(Combination {
        kind,
        cards: sorted,
    })
}

fn same_rank(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].rank == w[1].rank)
}

fn classify_five(sorted: &[Card]) -> Option<ComboKind> {
    let straight = is_straight_run(sorted);
    let flush = sorted.windows(2).all(|w| w[0].suit == w[1].suit);
    if straight && flush {
        return Some(ComboKind::StraightFlush);
    }
    match rank_group_counts(sorted).as_slice() {
        [4, 1] => Some(ComboKind::FourOfAKind),
        [3, 2] => Some(ComboKind::FullHouse),
        _ if flush => Some(ComboKind::Flush),
        _ if straight => Some(ComboKind::Straight),
        _ => None,
    }
}

/// Five consecutive rank positions in table order. Two sits on top, so
/// J-Q-K-A-2 is a straight and 2-3-4-5-6 / A-2-3-4-5 are not.
fn is_straight_run(sorted: &[Card]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[1].rank.index() == w[0].rank.index() + 1)
}

fn rank_group_counts(sorted: &[Card]) -> Vec<usize> {
    let mut counts = Vec::new();
    let mut run = 1;
    for w in sorted.windows(2) {
        if w[0].rank == w[1].rank {
            run += 1;
        } else {
            counts.push(run);
            run = 1;
        }
    }
    counts.push(run);
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
}

impl Serialize for Combination {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Combination", 2)?;
        s.serialize_field("kind", &self.kind)?;
        s.serialize_field("cards", &self.cards)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for Combination {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            kind: ComboKind,
            cards: Vec<Card>,
        }
        let wire = Wire::deserialize(deserializer)?;
        let combo = classify(&wire.cards).map_err(|e| serde::de::Error::custom(e.to_string()))?;
        if combo.kind() != wire.kind {
            return Err(serde::de::Error::custom(format!(
                "kind mismatch: cards classify as {:?}",
                combo.kind()
            )));
        }
        Ok(combo)
    }
}
