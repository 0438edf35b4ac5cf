//! How to register your bot policy
//!
//! 1) Implement `BotPolicy` for your type in its module.
//! 2) Add a new `PolicyFactory` entry to the static list with stable `name`
//!    and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use crate::ai::{BotPolicy, GreedyPolicy, RandomPolicy};

/// Policy name a bot seat gets when nothing else is specified.
pub const DEFAULT_BOT_POLICY: &str = GreedyPolicy::NAME;

/// Factory definition for constructing bot policies.
pub struct PolicyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn BotPolicy + Send + Sync>,
}

static POLICY_FACTORIES: &[PolicyFactory] = &[
    PolicyFactory {
        name: GreedyPolicy::NAME,
        version: GreedyPolicy::VERSION,
        make: make_greedy,
    },
    PolicyFactory {
        name: RandomPolicy::NAME,
        version: RandomPolicy::VERSION,
        make: make_random,
    },
];

/// Returns the statically registered policy factories.
pub fn registered_policies() -> &'static [PolicyFactory] {
    POLICY_FACTORIES
}

/// Finds a registered policy factory by its name.
pub fn by_name(name: &str) -> Option<&'static PolicyFactory> {
    registered_policies()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_greedy(_seed: Option<u64>) -> Box<dyn BotPolicy + Send + Sync> {
    Box::new(GreedyPolicy::new())
}

fn make_random(seed: Option<u64>) -> Box<dyn BotPolicy + Send + Sync> {
    Box::new(RandomPolicy::new(seed))
}
