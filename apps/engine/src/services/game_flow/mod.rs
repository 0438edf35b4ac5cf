//! Table orchestration: bridges the pure domain layer with the room store.
//!
//! Split into submodules by concern: `player_actions` for deal installation
//! and play/pass submission, `presence` for connection flags and coordinator
//! assignment, `coordinator` for the bot-driving loop. Every write goes
//! through the store's commit gate, so concurrent drivers can only race on
//! the turn seat, never corrupt state.

mod coordinator;
mod player_actions;
mod presence;

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;
use uuid::Uuid;

use crate::clock::{SystemClock, WallClock};
use crate::config::EngineConfig;
use crate::domain::events::EventEnvelope;
use crate::domain::rules::SEATS;
use crate::domain::state::SeatInfo;
use crate::error::EngineError;
use crate::store::{RoomSnapshot, RoomStore};

/// Table flow service, generic over the store implementation.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct GameFlowService<S> {
    store: Arc<S>,
    config: EngineConfig,
    clock: Arc<dyn WallClock>,
}

impl<S: RoomStore> GameFlowService<S> {
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    /// Tests inject a hand-driven clock here.
    pub fn with_clock(store: Arc<S>, config: EngineConfig, clock: Arc<dyn WallClock>) -> Self {
        Self {
            store,
            config,
            clock,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current wall-clock time in milliseconds since the Unix epoch.
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Create a room with a fixed seating arrangement.
    pub async fn create_room(
        &self,
        room_id: Uuid,
        seats: [SeatInfo; SEATS],
    ) -> Result<RoomSnapshot, EngineError> {
        let snapshot = self.store.create_room(room_id, seats).await?;
        info!(%room_id, "Room created");
        Ok(snapshot)
    }

    /// Current state and version of a room.
    pub async fn read_room(&self, room_id: Uuid) -> Result<RoomSnapshot, EngineError> {
        Ok(self.store.read_room(room_id).await?)
    }

    /// Subscribe to the room's committed-event stream.
    pub async fn subscribe(
        &self,
        room_id: Uuid,
    ) -> Result<broadcast::Receiver<EventEnvelope>, EngineError> {
        Ok(self.store.subscribe(room_id).await?)
    }
}
