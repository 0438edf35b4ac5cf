//! Combination comparison: a strict partial order over plays.
//!
//! Plays of different cardinality never compare. Within the five-card
//! category the kind ladder decides first (the weakest straight flush beats
//! the strongest quads); within one kind the deciding card decides.

use super::combos::{Combination, KindCategory};
use super::ComboKind;

/// Result of comparing a candidate play against another play.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CompareOutcome {
    /// Candidate ranks below the other play.
    Less,
    /// Candidate ranks above the other play.
    Greater,
    /// Deciding values are identical. Impossible for two combinations drawn
    /// from the same deal; surfacing it keeps cross-deal misuse loud.
    EqualForbidden,
    /// Different cardinalities: no order exists.
    Incomparable,
}

/// Compare `candidate` against `target`.
pub fn compare_combos(candidate: &Combination, target: &Combination) -> CompareOutcome {
    if candidate.category() != target.category() {
        return CompareOutcome::Incomparable;
    }
    if candidate.category() == KindCategory::FiveCard && candidate.kind() != target.kind() {
        // Option<u8> ordering is safe here: both kinds are five-card
        return match candidate
            .kind()
            .five_card_rank()
            .cmp(&target.kind().five_card_rank())
        {
            std::cmp::Ordering::Less => CompareOutcome::Less,
            std::cmp::Ordering::Greater => CompareOutcome::Greater,
            std::cmp::Ordering::Equal => CompareOutcome::EqualForbidden,
        };
    }
    compare_within_kind(candidate, target)
}

/// True when `candidate` strictly beats `target`.
pub fn beats(candidate: &Combination, target: &Combination) -> bool {
    compare_combos(candidate, target) == CompareOutcome::Greater
}

fn compare_within_kind(candidate: &Combination, target: &Combination) -> CompareOutcome {
    let a = candidate.deciding_card();
    let b = target.deciding_card();
    let ord = match candidate.kind() {
        // group kinds rank by the group's rank alone; suits never enter
        ComboKind::FullHouse | ComboKind::FourOfAKind => a.rank.cmp(&b.rank),
        _ => a.cmp(&b),
    };
    match ord {
        std::cmp::Ordering::Less => CompareOutcome::Less,
        std::cmp::Ordering::Greater => CompareOutcome::Greater,
        std::cmp::Ordering::Equal => CompareOutcome::EqualForbidden,
    }
}
