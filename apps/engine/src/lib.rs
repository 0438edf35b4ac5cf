#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Authoritative table engine for four-player Big Two.
//!
//! The crate splits into a pure, synchronous `domain` layer (cards, combo
//! ranking, trick and deal state machines) and the async layers above it:
//! `store` for versioned room state with an event stream, `services` for
//! orchestration, `ai` for bot policies, and `client` for the per-connection
//! driver. All writes funnel through one commit gate per room, so every
//! accepted action has a single authoritative order.

pub mod ai;
pub mod client;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod store;
pub mod telemetry;

// Re-exports for public API
pub use ai::{BotAction, BotPolicy, GreedyPolicy, RandomPolicy, TableView, DEFAULT_BOT_POLICY};
pub use client::TableDriver;
pub use clock::{ManualClock, SystemClock, WallClock};
pub use config::EngineConfig;
pub use error::EngineError;
pub use services::GameFlowService;
pub use store::{BotCoordinatorAssignment, CommitOutcome, MemoryStore, RoomSnapshot, RoomStore};

// Prelude for test convenience
pub mod prelude {
    pub use super::ai::*;
    pub use super::clock::*;
    pub use super::config::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::errors::*;
    pub use super::services::*;
    pub use super::store::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
