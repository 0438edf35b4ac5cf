//! Random bot policy: uniform choice among legal actions.
//!
//! Seedable for reproducible simulator runs; a seeded instance replays the
//! same decisions against the same sequence of views.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{BotAction, BotPolicy, PolicyError, TableView};

pub struct RandomPolicy {
    /// `Mutex` for interior mutability: trait methods take `&self` but the
    /// RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPolicy {
    pub const NAME: &'static str = "RandomPolicy";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` replays deterministically; `None` draws from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl BotPolicy for RandomPolicy {
    fn choose_action(&self, view: &TableView<'_>) -> Result<BotAction, PolicyError> {
        let legal = view.legal_actions();

        let mut actions: Vec<BotAction> = legal
            .plays
            .iter()
            .map(|combo| BotAction::Play(combo.cards().to_vec()))
            .collect();
        if legal.may_pass {
            actions.push(BotAction::Pass);
        }
        if actions.is_empty() {
            return Err(PolicyError::NoLegalAction);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PolicyError::Internal(format!("RNG lock poisoned: {e}")))?;

        let choice = actions
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| PolicyError::Internal("Failed to choose random action".into()))?;

        Ok(choice)
    }
}
