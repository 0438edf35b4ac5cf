//! Deal installation and play/pass submission.
//!
//! Each method is a single store commit: the closure applies the domain
//! mutation and returns the events describing what changed, in the order
//! clients should apply them.

use tracing::{debug, info};
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::cards_types::Card;
use crate::domain::dealing;
use crate::domain::events::TableEvent;
use crate::domain::rules::SEATS;
use crate::domain::state::Seat;
use crate::domain::timer::arm_auto_pass;
use crate::domain::tricks;
use crate::error::EngineError;
use crate::store::{CommitOutcome, RoomStore};

impl<S: RoomStore> GameFlowService<S> {
    /// Install a dealt set of hands and open play at the Three of Diamonds.
    ///
    /// Rejected if the room is mid-deal or the hands do not form a full deck.
    pub async fn install_deal(
        &self,
        room_id: Uuid,
        hands: [Vec<Card>; SEATS],
    ) -> Result<CommitOutcome, EngineError> {
        debug!(%room_id, "Installing deal");

        let outcome = self
            .store
            .commit(room_id, None, &mut |state| {
                let opening_seat = dealing::install_deal(state, hands.clone())?;
                Ok(vec![TableEvent::DealInstalled { opening_seat }])
            })
            .await?;

        info!(%room_id, version = outcome.version, "Deal installed");
        Ok(outcome)
    }

    /// Submit a play for a seat.
    ///
    /// The commit is gated on `seat` still holding the turn, so two drivers
    /// acting on the same snapshot resolve to exactly one accepted play.
    pub async fn submit_play(
        &self,
        room_id: Uuid,
        seat: Seat,
        cards: &[Card],
    ) -> Result<CommitOutcome, EngineError> {
        debug!(%room_id, seat, n_cards = cards.len(), "Submitting play");

        let now_ms = self.now_ms();
        let auto_pass_duration = self.config.auto_pass_duration;
        let outcome = self
            .store
            .commit(room_id, Some(seat), &mut |state| {
                let play = tricks::submit_play(state, seat, cards)?;

                let mut events = vec![TableEvent::PlayAccepted {
                    seat,
                    combo: play.combo.clone(),
                }];
                if let Some(cleared) = play.cleared_timer {
                    events.push(TableEvent::AutoPassTimerCleared {
                        sequence_id: cleared.sequence_id,
                        reason: cleared.reason,
                    });
                }
                if play.deal_completed {
                    events.push(TableEvent::DealCompleted {
                        finished_order: state.finished_order.clone(),
                    });
                } else if let Some(timer) = arm_auto_pass(state, now_ms, auto_pass_duration) {
                    events.push(TableEvent::timer_started(timer));
                }
                Ok(events)
            })
            .await?;

        info!(%room_id, seat, version = outcome.version, "Play accepted");
        Ok(outcome)
    }

    /// Submit a pass for a seat.
    ///
    /// A third consecutive pass resolves the trick; the commit then also
    /// carries the resolution event and any timer clear it caused.
    pub async fn submit_pass(
        &self,
        room_id: Uuid,
        seat: Seat,
    ) -> Result<CommitOutcome, EngineError> {
        debug!(%room_id, seat, "Submitting pass");

        let outcome = self
            .store
            .commit(room_id, Some(seat), &mut |state| {
                let pass = tricks::submit_pass(state, seat)?;

                let mut events = vec![TableEvent::PassAccepted { seat }];
                if let Some(cleared) = pass.cleared_timer {
                    events.push(TableEvent::AutoPassTimerCleared {
                        sequence_id: cleared.sequence_id,
                        reason: cleared.reason,
                    });
                }
                if let Some(leader_seat) = pass.resolved_leader {
                    events.push(TableEvent::TrickResolved { leader_seat });
                }
                Ok(events)
            })
            .await?;

        info!(%room_id, seat, version = outcome.version, "Pass accepted");
        Ok(outcome)
    }
}
