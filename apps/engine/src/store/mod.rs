//! Room persistence: versioned table state plus an ordered event feed.
//!
//! The store owns atomicity. A [`RoomStore::commit`] applies a mutation
//! closure to the room's state all-or-nothing, bumps the version, and
//! publishes the resulting events stamped with that version. Readers always
//! see a committed state; there are no partial writes to observe.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::events::{EventEnvelope, TableEvent};
use crate::domain::rules::SEATS;
use crate::domain::state::{Seat, SeatInfo, TableState};
use crate::errors::domain::DomainError;

/// A room's state at a specific version.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSnapshot {
    pub state: TableState,
    pub version: u64,
}

/// Who currently coordinates bot turns for a room, if anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotCoordinatorAssignment {
    pub coordinator_seat: Option<Seat>,
}

/// What a successful commit produced.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    /// Version the room holds after this commit.
    pub version: u64,
    /// Events the mutation emitted, in order.
    pub events: Vec<TableEvent>,
}

/// A state mutation run under the room lock. Returns the events describing
/// what changed; any error aborts the commit with no visible effect.
pub type Mutation<'a> =
    dyn FnMut(&mut TableState) -> Result<Vec<TableEvent>, DomainError> + Send + 'a;

/// Room persistence contract.
#[async_trait]
pub trait RoomStore: Send + Sync + 'static {
    /// Create a room with fixed seat assignments. Fails if the id exists.
    async fn create_room(
        &self,
        room_id: Uuid,
        seats: [SeatInfo; SEATS],
    ) -> Result<RoomSnapshot, DomainError>;

    /// Current state and version.
    async fn read_room(&self, room_id: Uuid) -> Result<RoomSnapshot, DomainError>;

    /// Subscribe to the room's committed events.
    async fn subscribe(
        &self,
        room_id: Uuid,
    ) -> Result<broadcast::Receiver<EventEnvelope>, DomainError>;

    /// Atomically mutate the room.
    ///
    /// `expected_turn_seat` is the commit gate for actions: when `Some`, the
    /// commit only proceeds if the stored turn still equals it. A stale
    /// submission fails with a turn-changed conflict before the mutation
    /// runs.
    async fn commit(
        &self,
        room_id: Uuid,
        expected_turn_seat: Option<Seat>,
        mutation: &mut Mutation<'_>,
    ) -> Result<CommitOutcome, DomainError>;

    /// Coordinator for bot turns, derived from current presence.
    async fn read_bot_assignment(
        &self,
        room_id: Uuid,
    ) -> Result<BotCoordinatorAssignment, DomainError>;
}
