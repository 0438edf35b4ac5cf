//! The bot-driving loop run by the coordinator seat.
//!
//! Any connected human may call this, but only the current coordinator makes
//! progress; everyone else bails out on the assignment check. Losing a turn
//! race to another driver is expected and handled by re-reading.

use tracing::{debug, info};
use uuid::Uuid;

use super::GameFlowService;
use crate::ai::{by_name, BotAction, TableView};
use crate::domain::seed_derivation::derive_bot_seed;
use crate::domain::state::{Seat, SeatOccupant, TablePhase};
use crate::error::EngineError;
use crate::store::RoomStore;

/// Upper bound on loop iterations per invocation. A full deal takes well
/// under half of this even with every trick going to three passes.
const MAX_BOT_ACTIONS: u32 = 512;

impl<S: RoomStore> GameFlowService<S> {
    /// Advance the table through consecutive bot turns.
    ///
    /// Re-reads the room before every action, so handover and human turns are
    /// observed promptly. Returns the number of bot actions performed.
    pub async fn run_bot_turns(
        &self,
        room_id: Uuid,
        coordinator_seat: Seat,
    ) -> Result<u32, EngineError> {
        let mut performed = 0u32;

        for _ in 0..MAX_BOT_ACTIONS {
            let snapshot = self.store.read_room(room_id).await?;
            if snapshot.state.phase != TablePhase::Playing {
                return Ok(performed);
            }

            let assignment = self.store.read_bot_assignment(room_id).await?;
            if assignment.coordinator_seat != Some(coordinator_seat) {
                debug!(
                    %room_id,
                    coordinator_seat,
                    current = ?assignment.coordinator_seat,
                    "Coordinator assignment moved, stopping bot processing"
                );
                return Ok(performed);
            }

            let Some(turn_seat) = snapshot.state.turn else {
                return Ok(performed);
            };
            let SeatOccupant::Bot { policy } =
                &snapshot.state.seats[usize::from(turn_seat)].occupant
            else {
                debug!(%room_id, turn_seat, "Human player's turn, stopping bot processing");
                return Ok(performed);
            };

            let factory = by_name(policy).ok_or_else(|| {
                EngineError::internal(format!("Unknown bot policy '{policy}' at seat {turn_seat}"))
            })?;
            let bot = (factory.make)(Some(derive_bot_seed(room_id, turn_seat)));

            let view = TableView::for_seat(&snapshot.state, turn_seat);
            let action = bot.choose_action(&view)?;

            if !self.config.bot_pacing.is_zero() {
                tokio::time::sleep(self.config.bot_pacing).await;
            }

            let submitted = match &action {
                BotAction::Play(cards) => self
                    .submit_play(room_id, turn_seat, cards)
                    .await
                    .map(|_| ()),
                BotAction::Pass => self.submit_pass(room_id, turn_seat).await.map(|_| ()),
            };

            match submitted {
                Ok(()) => {
                    performed += 1;
                    info!(
                        %room_id,
                        seat = turn_seat,
                        action = action.kind_str(),
                        "Processed bot turn"
                    );
                }
                Err(err) if err.is_turn_race() => {
                    debug!(%room_id, seat = turn_seat, error = %err, "Bot turn lost a race, re-reading");
                }
                Err(err) => return Err(err),
            }
        }

        Err(EngineError::internal(format!(
            "Bot processing did not converge after {MAX_BOT_ACTIONS} iterations in room {room_id}"
        )))
    }
}
