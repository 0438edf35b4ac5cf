//! Core card-related types: Card, Rank, Suit

/// Suits in table order: Diamonds lowest, Spades highest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

/// Ranks in table order: Three lowest, Two highest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Position in the table order, 0 (Three) through 12 (Two).
    /// Straights are runs of five consecutive positions; there is no wrap.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

// Note: Ord on Card IS the game order used for every single-card comparison:
// rank first (Three low, Two high), suit breaks ties (D < C < H < S).
// No two cards compare equal across a full deck.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order_puts_two_on_top() {
        assert!(Rank::Three < Rank::Four);
        assert!(Rank::King < Rank::Ace);
        assert!(Rank::Ace < Rank::Two);
        assert_eq!(Rank::Three.index(), 0);
        assert_eq!(Rank::Two.index(), 12);
    }

    #[test]
    fn test_suit_order() {
        assert!(Suit::Diamonds < Suit::Clubs);
        assert!(Suit::Clubs < Suit::Hearts);
        assert!(Suit::Hearts < Suit::Spades);
    }

    #[test]
    fn test_card_order_is_rank_then_suit() {
        let three_spades = Card::new(Rank::Three, Suit::Spades);
        let four_diamonds = Card::new(Rank::Four, Suit::Diamonds);
        assert!(three_spades < four_diamonds);

        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        let two_diamonds = Card::new(Rank::Two, Suit::Diamonds);
        assert!(ace_spades < two_diamonds);

        let two_hearts = Card::new(Rank::Two, Suit::Hearts);
        let two_spades = Card::new(Rank::Two, Suit::Spades);
        assert!(two_hearts < two_spades);
    }
}
