//! Service layer: orchestrates domain logic over the room store.

pub mod game_flow;

pub use game_flow::GameFlowService;
