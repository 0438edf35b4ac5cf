//! In-memory room store backed by a concurrent map.
//!
//! Each room is one mutex-guarded cell. Commits run the mutation, bump the
//! version, and publish every event while still holding the lock, so the
//! broadcast channel carries versions in strictly increasing order.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::{BotCoordinatorAssignment, CommitOutcome, Mutation, RoomSnapshot, RoomStore};
use crate::domain::elect_coordinator;
use crate::domain::events::EventEnvelope;
use crate::domain::rules::SEATS;
use crate::domain::state::{Seat, SeatInfo, TableState};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

struct RoomInner {
    state: TableState,
    version: u64,
}

struct RoomCell {
    inner: Mutex<RoomInner>,
    events: broadcast::Sender<EventEnvelope>,
}

pub struct MemoryStore {
    rooms: DashMap<Uuid, Arc<RoomCell>>,
    event_buffer: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_event_buffer(256)
    }

    /// A deeper buffer keeps slow subscribers from lagging out when a burst
    /// of commits lands (bot-only tables produce hundreds per deal).
    pub fn with_event_buffer(capacity: usize) -> Self {
        Self {
            rooms: DashMap::new(),
            event_buffer: capacity,
        }
    }

    fn cell(&self, room_id: Uuid) -> Result<Arc<RoomCell>, DomainError> {
        self.rooms
            .get(&room_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Room, format!("Room {room_id} not found"))
            })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomStore for MemoryStore {
    async fn create_room(
        &self,
        room_id: Uuid,
        seats: [SeatInfo; SEATS],
    ) -> Result<RoomSnapshot, DomainError> {
        match self.rooms.entry(room_id) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::RoomExists,
                format!("Room {room_id} already exists"),
            )),
            Entry::Vacant(slot) => {
                let state = TableState::new(seats);
                let (events, _) = broadcast::channel(self.event_buffer);
                slot.insert(Arc::new(RoomCell {
                    inner: Mutex::new(RoomInner {
                        state: state.clone(),
                        version: 0,
                    }),
                    events,
                }));
                Ok(RoomSnapshot { state, version: 0 })
            }
        }
    }

    async fn read_room(&self, room_id: Uuid) -> Result<RoomSnapshot, DomainError> {
        let cell = self.cell(room_id)?;
        let inner = cell.inner.lock();
        Ok(RoomSnapshot {
            state: inner.state.clone(),
            version: inner.version,
        })
    }

    async fn subscribe(
        &self,
        room_id: Uuid,
    ) -> Result<broadcast::Receiver<EventEnvelope>, DomainError> {
        Ok(self.cell(room_id)?.events.subscribe())
    }

    async fn commit(
        &self,
        room_id: Uuid,
        expected_turn_seat: Option<Seat>,
        mutation: &mut Mutation<'_>,
    ) -> Result<CommitOutcome, DomainError> {
        let cell = self.cell(room_id)?;
        let mut inner = cell.inner.lock();

        if let Some(expected) = expected_turn_seat {
            if inner.state.turn != Some(expected) {
                return Err(DomainError::conflict(
                    ConflictKind::TurnChanged,
                    format!(
                        "Turn moved on (expected seat {expected}, now {:?})",
                        inner.state.turn
                    ),
                ));
            }
        }

        // mutate a copy so an error leaves the stored state untouched
        let mut next = inner.state.clone();
        let events = mutation(&mut next)?;

        inner.state = next;
        inner.version += 1;
        let version = inner.version;

        // published under the lock; send errors just mean nobody listens
        for event in &events {
            let _ = cell.events.send(EventEnvelope {
                room_id,
                version,
                event: event.clone(),
            });
        }

        Ok(CommitOutcome { version, events })
    }

    async fn read_bot_assignment(
        &self,
        room_id: Uuid,
    ) -> Result<BotCoordinatorAssignment, DomainError> {
        let cell = self.cell(room_id)?;
        let inner = cell.inner.lock();
        Ok(BotCoordinatorAssignment {
            coordinator_seat: elect_coordinator(&inner.state.seats),
        })
    }
}
