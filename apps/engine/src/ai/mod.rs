//! Bot policy module - automated seat decisions.
//!
//! This module provides:
//! - `BotPolicy` trait for pluggable decision logic
//! - `GreedyPolicy`: deterministic weakest-play-first (default)
//! - `RandomPolicy`: uniform random legal action (seedable for tests)
//! - A static registry resolving policy names stored on bot seats

mod greedy;
mod random;
pub mod registry;
mod trait_def;

pub use greedy::GreedyPolicy;
pub use random::RandomPolicy;
pub use registry::{by_name, registered_policies, PolicyFactory, DEFAULT_BOT_POLICY};
pub use trait_def::{BotAction, BotPolicy, PolicyError, TableView};
