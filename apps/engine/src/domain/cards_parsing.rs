//! Two-letter card tokens, the text form used in JSON payloads, logs, and
//! tests: rank letter then suit letter, always uppercase. Ten is `T`, so
//! every token is exactly two bytes ("3D", "TC", "2S"; never "10H").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

// Letter tables in declaration order of Rank::ALL / Suit::ALL.
const RANK_LETTERS: &[u8; 13] = b"3456789TJQKA2";
const SUIT_LETTERS: &[u8; 4] = b"DCHS";

impl Rank {
    /// Token letter for this rank: `3`-`9`, `T`, `J`, `Q`, `K`, `A`, `2`.
    pub fn letter(self) -> char {
        RANK_LETTERS[self.index() as usize] as char
    }
}

impl Suit {
    /// Token letter for this suit: `D`, `C`, `H`, or `S`.
    pub fn letter(self) -> char {
        SUIT_LETTERS[self as usize] as char
    }
}

fn rank_from_letter(byte: u8) -> Option<Rank> {
    let pos = RANK_LETTERS.iter().position(|&b| b == byte)?;
    Some(Rank::ALL[pos])
}

fn suit_from_letter(byte: u8) -> Option<Suit> {
    let pos = SUIT_LETTERS.iter().position(|&b| b == byte)?;
    Some(Suit::ALL[pos])
}

fn bad_card_token(token: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("bad card token {token:?}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let &[rank_byte, suit_byte] = token.as_bytes() else {
            return Err(bad_card_token(token));
        };
        let rank = rank_from_letter(rank_byte).ok_or_else(|| bad_card_token(token))?;
        let suit = suit_from_letter(suit_byte).ok_or_else(|| bad_card_token(token))?;
        Ok(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.letter(), self.suit.letter())
    }
}

/// Parse a batch of card tokens, failing on the first bad one.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cards = Vec::new();
    for token in tokens {
        cards.push(token.as_ref().parse()?);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_tables_agree_with_declaration_order() {
        for rank in Rank::ALL {
            assert_eq!(rank_from_letter(rank.letter() as u8), Some(rank));
        }
        for suit in Suit::ALL {
            assert_eq!(suit_from_letter(suit.letter() as u8), Some(suit));
        }
    }

    #[test]
    fn test_parse_card_tokens() {
        let cases = [
            ("3D", Card::new(Rank::Three, Suit::Diamonds)),
            ("TC", Card::new(Rank::Ten, Suit::Clubs)),
            ("JH", Card::new(Rank::Jack, Suit::Hearts)),
            ("2S", Card::new(Rank::Two, Suit::Spades)),
        ];
        for (token, want) in cases {
            assert_eq!(token.parse::<Card>().unwrap(), want, "token {token}");
        }
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        for token in ["", "3", "3DD", "10H", "1H", "3d", "dD", " 3D", "D3"] {
            assert!(token.parse::<Card>().is_err(), "token {token:?}");
        }
        let err = "XX".parse::<Card>().unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::ParseCard, _)
        ));
    }

    #[test]
    fn test_display_matches_token_form() {
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "TS");
        assert_eq!(Card::new(Rank::Two, Suit::Diamonds).to_string(), "2D");
        assert_eq!(Card::new(Rank::Seven, Suit::Clubs).to_string(), "7C");
    }

    #[test]
    fn test_try_parse_cards_fails_on_any_bad_token() {
        let cards = try_parse_cards(["3D", "TD", "2S"]).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], Card::new(Rank::Three, Suit::Diamonds));
        assert_eq!(cards[2], Card::new(Rank::Two, Suit::Spades));

        assert!(try_parse_cards(["AS", "1H", "9C"]).is_err());
    }
}
