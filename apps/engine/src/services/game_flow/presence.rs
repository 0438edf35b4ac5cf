//! Seat presence and the bot-coordinator assignment derived from it.

use tracing::debug;
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::events::TableEvent;
use crate::domain::rules::SEATS;
use crate::domain::state::{elect_coordinator, Seat};
use crate::error::EngineError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::store::{BotCoordinatorAssignment, CommitOutcome, RoomStore};

impl<S: RoomStore> GameFlowService<S> {
    /// Flip a human seat's connection flag.
    ///
    /// The emitted event carries the coordinator seat elected after the flip,
    /// so subscribers learn about coordinator handover without a second read.
    pub async fn set_connected(
        &self,
        room_id: Uuid,
        seat: Seat,
        connected: bool,
    ) -> Result<CommitOutcome, EngineError> {
        if usize::from(seat) >= SEATS {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("Seat {seat} is out of range"),
            )
            .into());
        }

        let outcome = self
            .store
            .commit(room_id, None, &mut |state| {
                let info = &mut state.seats[usize::from(seat)];
                if info.is_bot() {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidSeat,
                        format!("Seat {seat} is a bot seat and has no connection state"),
                    ));
                }
                info.connected = connected;

                let coordinator_seat = elect_coordinator(&state.seats);
                Ok(vec![TableEvent::SeatPresenceChanged {
                    seat,
                    connected,
                    coordinator_seat,
                }])
            })
            .await?;

        debug!(%room_id, seat, connected, "Seat presence changed");
        Ok(outcome)
    }

    /// Which seat currently holds the bot-coordinator assignment.
    pub async fn bot_assignment(
        &self,
        room_id: Uuid,
    ) -> Result<BotCoordinatorAssignment, EngineError> {
        Ok(self.store.read_bot_assignment(room_id).await?)
    }
}
