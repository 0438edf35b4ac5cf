//! Domain layer: pure Big Two rules, table state, and events.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod combos;
pub mod dealing;
pub mod events;
pub mod legal_moves;
pub mod ranking;
pub mod rules;
pub mod seed_derivation;
pub mod state;
pub mod timer;
pub mod tricks;
pub mod unbeatable;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_ranking;
#[cfg(test)]
mod tests_props_tricks;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use combos::{classify, ComboKind, Combination, KindCategory};
pub use dealing::{install_deal, shuffled_deal};
pub use events::{EventEnvelope, TableEvent};
pub use legal_moves::{legal_actions, LegalActions};
pub use ranking::{beats, compare_combos, CompareOutcome};
pub use seed_derivation::{derive_bot_seed, derive_deal_seed};
pub use state::{elect_coordinator, Seat, SeatInfo, SeatOccupant, TablePhase, TableState};
pub use timer::{arm_auto_pass, AutoPassTimer, TimerClearReason};
pub use tricks::{submit_pass, submit_play, PassOutcome, PlayOutcome};
