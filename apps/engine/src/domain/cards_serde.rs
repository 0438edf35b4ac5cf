//! JSON wire form of `Card`: a bare string holding the two-letter token.
//!
//! Hands and plays therefore serialize as arrays like `["3D", "TC", "2S"]`,
//! and deserialization goes through `FromStr`, so anything the parser
//! rejects is rejected on the wire as well.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::super::cards_types::{Rank, Suit};
    use super::*;

    #[test]
    fn test_hand_serializes_as_token_array() {
        let hand = vec![
            Card::new(Rank::Three, Suit::Diamonds),
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
        ];
        let value = serde_json::to_value(&hand).unwrap();
        assert_eq!(value, serde_json::json!(["3D", "TH", "2S"]));
    }

    #[test]
    fn test_card_deserializes_from_token() {
        let card: Card = serde_json::from_str("\"QH\"").unwrap();
        assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
    }

    #[test]
    fn test_card_deserialize_rejects_bad_input() {
        for raw in ["\"3d\"", "\"33\"", "\"\"", "\"10H\"", "7", "null"] {
            assert!(serde_json::from_str::<Card>(raw).is_err(), "raw {raw}");
        }
    }
}
