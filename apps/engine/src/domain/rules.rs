use super::cards_types::{Card, Rank, Suit};

pub const SEATS: usize = 4;
pub const HAND_SIZE: usize = 13;
pub const DECK_SIZE: usize = 52;

/// A trick resolves once three consecutive seats decline (or are skipped as
/// finished) after an accepted play.
pub const PASSES_TO_RESOLVE: u8 = 3;

/// The holder of this card leads the first trick of a deal.
pub const OPENING_CARD: Card = Card {
    rank: Rank::Three,
    suit: Suit::Diamonds,
};
