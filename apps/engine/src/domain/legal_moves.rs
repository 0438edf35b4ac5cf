//! Legal candidate enumeration for a hand against the table.
//!
//! The enumeration applies the same endgame gates as the play/pass entry
//! points, so anything offered here submits cleanly barring a turn race.

use std::cmp::Ordering;

use super::cards_types::Card;
use super::combos::{classify, ComboKind, Combination};
use super::ranking::beats;

/// Everything a seat may legally do right now.
#[derive(Debug, Clone, PartialEq)]
pub struct LegalActions {
    /// Playable combinations, weakest first.
    pub plays: Vec<Combination>,
    /// Whether passing is allowed (never while leading).
    pub may_pass: bool,
}

/// Enumerate legal actions for `hand` against the play to beat.
///
/// `next_seat_card_count` is the hand size of the seat that would act next;
/// a value of 1 switches on the one-card-left gates.
pub fn legal_actions(
    hand: &[Card],
    last: Option<&Combination>,
    next_seat_card_count: Option<usize>,
) -> LegalActions {
    let next_on_last_card = next_seat_card_count == Some(1);
    let highest = hand.iter().copied().max();
    let mut plays = all_combinations(hand);

    let may_pass = match last {
        None => {
            if next_on_last_card {
                plays.retain(|c| {
                    c.kind() != ComboKind::Single || Some(c.deciding_card()) == highest
                });
            }
            false
        }
        Some(last) => {
            plays.retain(|c| c.category() == last.category() && beats(c, last));
            if last.kind() == ComboKind::Single && next_on_last_card {
                // every surviving play is a single; only the highest may go,
                // and passing is allowed exactly when nothing survives
                plays.retain(|c| Some(c.deciding_card()) == highest);
                plays.is_empty()
            } else {
                true
            }
        }
    };

    plays.sort_by(combo_order);
    LegalActions { plays, may_pass }
}

/// Weakest-first order: fewer cards, then lower ladder, then deciding card.
fn combo_order(a: &Combination, b: &Combination) -> Ordering {
    a.cards()
        .len()
        .cmp(&b.cards().len())
        .then_with(|| a.kind().five_card_rank().cmp(&b.kind().five_card_rank()))
        .then_with(|| a.deciding_card().cmp(&b.deciding_card()))
}

/// Every combination formable from `hand`.
fn all_combinations(hand: &[Card]) -> Vec<Combination> {
    let mut sorted = hand.to_vec();
    sorted.sort_unstable();

    let mut out = Vec::new();
    for &card in &sorted {
        if let Ok(combo) = classify(&[card]) {
            out.push(combo);
        }
    }
    // pairs and triples come from runs of equal rank
    let mut start = 0;
    while start < sorted.len() {
        let mut end = start + 1;
        while end < sorted.len() && sorted[end].rank == sorted[start].rank {
            end += 1;
        }
        let group = &sorted[start..end];
        for i in 0..group.len() {
            for j in i + 1..group.len() {
                if let Ok(combo) = classify(&[group[i], group[j]]) {
                    out.push(combo);
                }
                for k in j + 1..group.len() {
                    if let Ok(combo) = classify(&[group[i], group[j], group[k]]) {
                        out.push(combo);
                    }
                }
            }
        }
        start = end;
    }
    five_card_combinations(&sorted, &mut out);
    out
}

fn five_card_combinations(sorted: &[Card], out: &mut Vec<Combination>) {
    let n = sorted.len();
    if n < 5 {
        return;
    }
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let subset = [sorted[a], sorted[b], sorted[c], sorted[d], sorted[e]];
                        if let Ok(combo) = classify(&subset) {
                            out.push(combo);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{cards, combo};

    #[test]
    fn leading_offers_everything_and_no_pass() {
        let hand = cards(&["3D", "3C", "4H"]);
        let legal = legal_actions(&hand, None, Some(5));
        assert!(!legal.may_pass);
        assert_eq!(legal.plays.len(), 4); // three singles plus the pair
        assert_eq!(legal.plays[0], combo(&["3D"])); // weakest first
        assert!(legal.plays.contains(&combo(&["3D", "3C"])));
    }

    #[test]
    fn following_keeps_only_beating_matches() {
        let hand = cards(&["3D", "8C", "9S", "9D"]);
        let last = combo(&["7H"]);
        let legal = legal_actions(&hand, Some(&last), Some(5));
        assert!(legal.may_pass);
        assert_eq!(
            legal.plays,
            vec![combo(&["8C"]), combo(&["9D"]), combo(&["9S"])]
        );
    }

    #[test]
    fn five_card_hands_enumerate_ladder_shapes() {
        let hand = cards(&["3D", "4C", "5H", "6S", "7D", "7C"]);
        let legal = legal_actions(&hand, None, Some(3));
        assert!(legal
            .plays
            .iter()
            .any(|c| c.kind() == ComboKind::Straight));
        assert!(legal.plays.iter().any(|c| c.kind() == ComboKind::Pair));
    }

    #[test]
    fn follow_gate_offers_only_the_highest_single() {
        let hand = cards(&["6C", "9H"]);
        let last = combo(&["5D"]);
        let legal = legal_actions(&hand, Some(&last), Some(1));
        assert_eq!(legal.plays, vec![combo(&["9H"])]);
        assert!(!legal.may_pass);
    }

    #[test]
    fn follow_gate_allows_pass_when_nothing_beats() {
        let hand = cards(&["3D", "4C"]);
        let last = combo(&["5D"]);
        let legal = legal_actions(&hand, Some(&last), Some(1));
        assert!(legal.plays.is_empty());
        assert!(legal.may_pass);
    }

    #[test]
    fn lead_gate_filters_singles_but_not_groups() {
        let hand = cards(&["6C", "6H", "9H"]);
        let legal = legal_actions(&hand, None, Some(1));
        let singles: Vec<_> = legal
            .plays
            .iter()
            .filter(|c| c.kind() == ComboKind::Single)
            .collect();
        assert_eq!(singles, vec![&combo(&["9H"])]);
        assert!(legal.plays.contains(&combo(&["6C", "6H"])));
        assert!(!legal.may_pass);
    }

    #[test]
    fn full_hand_enumerates_without_blowup() {
        let hand = cards(&[
            "3D", "4D", "5D", "6D", "7D", "8D", "9D", "TD", "JD", "QD", "KD", "AD", "2D",
        ]);
        let legal = legal_actions(&hand, None, Some(13));
        // thirteen singles plus a pile of straight flushes
        assert!(legal.plays.len() > 13);
        assert!(legal
            .plays
            .iter()
            .any(|c| c.kind() == ComboKind::StraightFlush));
    }
}
