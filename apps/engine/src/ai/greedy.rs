//! Greedy bot policy: always sheds the weakest legal play.
//!
//! Legal plays arrive weakest-first from the enumeration, so "first play or
//! pass" is the whole strategy. Deterministic by construction, which makes it
//! the default policy for bot seats.

use super::trait_def::{BotAction, BotPolicy, PolicyError, TableView};

pub struct GreedyPolicy;

impl GreedyPolicy {
    pub const NAME: &'static str = "GreedyPolicy";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl BotPolicy for GreedyPolicy {
    fn choose_action(&self, view: &TableView<'_>) -> Result<BotAction, PolicyError> {
        let legal = view.legal_actions();
        if let Some(weakest) = legal.plays.first() {
            return Ok(BotAction::Play(weakest.cards().to_vec()));
        }
        if legal.may_pass {
            return Ok(BotAction::Pass);
        }
        Err(PolicyError::NoLegalAction)
    }
}
