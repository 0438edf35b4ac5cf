//! Per-connection table driver.
//!
//! One driver runs per connected human seat. It marks the seat connected for
//! as long as it runs, mirrors auto-pass timers into a local countdown and
//! submits the expiry pass, and runs bot turns whenever its seat holds the
//! coordinator assignment. Several drivers doing the same work concurrently
//! is fine: the store's turn gate makes duplicates lose cleanly.

use std::sync::Arc;

use futures::StreamExt;
use tokio::time::{self, Instant};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::events::{EventEnvelope, TableEvent};
use crate::domain::state::Seat;
use crate::error::EngineError;
use crate::services::GameFlowService;
use crate::store::RoomStore;

/// Local mirror of an armed auto-pass timer.
struct ArmedCountdown {
    sequence_id: u64,
    deadline: Instant,
}

pub struct TableDriver<S> {
    service: Arc<GameFlowService<S>>,
    room_id: Uuid,
    seat: Seat,
    cancel: CancellationToken,
    armed: Option<ArmedCountdown>,
    /// Highest timer sequence observed; events about older timers are stale.
    last_seen_seq: u64,
}

impl<S: RoomStore> TableDriver<S> {
    pub fn new(service: Arc<GameFlowService<S>>, room_id: Uuid, seat: Seat) -> Self {
        Self {
            service,
            room_id,
            seat,
            cancel: CancellationToken::new(),
            armed: None,
            last_seen_seq: 0,
        }
    }

    /// Token that stops `run` when cancelled. Clone before spawning.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Drive the seat until cancelled or the event stream closes.
    ///
    /// Subscribes before flipping the seat to connected, so no event between
    /// the two is missed. The disconnect on the way out is best effort.
    pub async fn run(mut self) -> Result<(), EngineError> {
        let receiver = self.service.subscribe(self.room_id).await?;
        let mut events = BroadcastStream::new(receiver);

        self.service
            .set_connected(self.room_id, self.seat, true)
            .await?;
        info!(room_id = %self.room_id, seat = self.seat, "Driver connected");

        let result = self.event_loop(&mut events).await;

        if let Err(err) = self
            .service
            .set_connected(self.room_id, self.seat, false)
            .await
        {
            warn!(
                room_id = %self.room_id,
                seat = self.seat,
                error = %err,
                "Failed to mark seat disconnected"
            );
        }

        result
    }

    async fn event_loop(
        &mut self,
        events: &mut BroadcastStream<EventEnvelope>,
    ) -> Result<(), EngineError> {
        // Catch up on anything committed before we subscribed.
        self.resync().await?;

        let cancel = self.cancel.clone();
        loop {
            let deadline = self.armed.as_ref().map(|c| c.deadline);
            tokio::select! {
                _ = cancel.cancelled() => break,
                maybe = events.next() => match maybe {
                    Some(Ok(envelope)) => self.handle_event(envelope).await?,
                    Some(Err(BroadcastStreamRecvError::Lagged(skipped))) => {
                        warn!(room_id = %self.room_id, skipped, "Event stream lagged, resyncing");
                        self.resync().await?;
                    }
                    None => {
                        warn!(room_id = %self.room_id, "Event stream closed");
                        break;
                    }
                },
                _ = wait_until(deadline) => self.fire_auto_pass().await?,
            }
        }
        Ok(())
    }

    async fn handle_event(&mut self, envelope: EventEnvelope) -> Result<(), EngineError> {
        match envelope.event {
            TableEvent::AutoPassTimerStarted {
                started_at_ms,
                duration_ms,
                sequence_id,
                ..
            } => {
                if sequence_id <= self.last_seen_seq {
                    debug!(
                        room_id = %self.room_id,
                        sequence_id,
                        last_seen = self.last_seen_seq,
                        "Stale timer event discarded"
                    );
                    return Ok(());
                }
                self.last_seen_seq = sequence_id;

                let deadline_ms = started_at_ms + duration_ms as i64;
                let left_ms = (deadline_ms - self.service.now_ms()).max(0) as u64;
                self.armed = Some(ArmedCountdown {
                    sequence_id,
                    deadline: Instant::now() + time::Duration::from_millis(left_ms),
                });
                debug!(room_id = %self.room_id, sequence_id, left_ms, "Countdown armed");
                Ok(())
            }
            TableEvent::AutoPassTimerCleared { sequence_id, .. } => {
                if self
                    .armed
                    .as_ref()
                    .is_some_and(|c| c.sequence_id == sequence_id)
                {
                    self.armed = None;
                    debug!(room_id = %self.room_id, sequence_id, "Countdown disarmed");
                }
                if sequence_id > self.last_seen_seq {
                    self.last_seen_seq = sequence_id;
                }
                Ok(())
            }
            // Anything else may have handed the turn to a bot or moved the
            // coordinator assignment onto this seat.
            _ => self.perform_duties().await,
        }
    }

    /// Submit the pass an expired countdown stands for.
    ///
    /// The store is re-read first: another driver may have fired already, or
    /// the timer may have been cleared while this one slept. While the anchor
    /// stays armed the expired countdown applies to every seat the turn walks
    /// through, so the local countdown is re-armed after each submission and
    /// only dies when the clearing event (or a fresh read) shows the timer
    /// gone.
    async fn fire_auto_pass(&mut self) -> Result<(), EngineError> {
        let Some(armed) = self.armed.take() else {
            return Ok(());
        };

        let snapshot = self.service.read_room(self.room_id).await?;
        let still_armed = snapshot
            .state
            .round
            .auto_pass
            .as_ref()
            .is_some_and(|t| t.sequence_id == armed.sequence_id);
        if !still_armed {
            debug!(
                room_id = %self.room_id,
                sequence_id = armed.sequence_id,
                "Timer already cleared, skipping auto-pass"
            );
            return Ok(());
        }
        let Some(turn_seat) = snapshot.state.turn else {
            return Ok(());
        };

        match self.service.submit_pass(self.room_id, turn_seat).await {
            Ok(_) => {
                info!(
                    room_id = %self.room_id,
                    seat = turn_seat,
                    sequence_id = armed.sequence_id,
                    "Auto-pass submitted on expiry"
                );
            }
            Err(err) if err.is_turn_race() => {
                debug!(
                    room_id = %self.room_id,
                    error = %err,
                    "Auto-pass raced another driver, ignoring"
                );
            }
            Err(err) => return Err(err),
        }

        self.armed = Some(armed);
        Ok(())
    }

    /// Rebuild the countdown from current state and re-check duties.
    async fn resync(&mut self) -> Result<(), EngineError> {
        let snapshot = self.service.read_room(self.room_id).await?;
        let now_ms = self.service.now_ms();

        let mut armed = None;
        if let Some(timer) = &snapshot.state.round.auto_pass {
            if timer.sequence_id > self.last_seen_seq {
                self.last_seen_seq = timer.sequence_id;
            }
            armed = Some(ArmedCountdown {
                sequence_id: timer.sequence_id,
                deadline: Instant::now() + timer.remaining(now_ms),
            });
        }
        self.armed = armed;

        self.perform_duties().await
    }

    /// Run bot turns if this seat currently holds the coordinator assignment.
    async fn perform_duties(&self) -> Result<(), EngineError> {
        let assignment = self.service.bot_assignment(self.room_id).await?;
        if assignment.coordinator_seat == Some(self.seat) {
            self.service.run_bot_turns(self.room_id, self.seat).await?;
        }
        Ok(())
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}
