//! Table events emitted by committed mutations.
//!
//! Events describe what a commit did, in order. Consumers that only need the
//! latest truth can ignore them and re-read the room; drivers use them to run
//! countdowns without polling.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::combos::Combination;
use crate::domain::state::Seat;
use crate::domain::timer::{AutoPassTimer, TimerClearReason};

/// One domain event, tagged for the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    DealInstalled {
        opening_seat: Seat,
    },
    PlayAccepted {
        seat: Seat,
        combo: Combination,
    },
    PassAccepted {
        seat: Seat,
    },
    TrickResolved {
        leader_seat: Seat,
    },
    /// Snapshot of the armed countdown. Clients derive the remaining time
    /// from `started_at_ms + duration_ms` against their own clock.
    AutoPassTimerStarted {
        started_at_ms: i64,
        duration_ms: u64,
        sequence_id: u64,
        combo: Combination,
    },
    AutoPassTimerCleared {
        sequence_id: u64,
        reason: TimerClearReason,
    },
    SeatPresenceChanged {
        seat: Seat,
        connected: bool,
        /// Coordinator after the change, recomputed from presence.
        coordinator_seat: Option<Seat>,
    },
    DealCompleted {
        finished_order: Vec<Seat>,
    },
}

impl TableEvent {
    pub fn timer_started(timer: &AutoPassTimer) -> Self {
        TableEvent::AutoPassTimerStarted {
            started_at_ms: timer.started_at_ms,
            duration_ms: timer.duration.as_millis() as u64,
            sequence_id: timer.sequence_id,
            combo: timer.combo.clone(),
        }
    }
}

/// A [`TableEvent`] stamped with its room and the post-commit version.
///
/// Versions within a room are strictly increasing; a subscriber that observes
/// a gap knows it lagged and should re-read the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub room_id: Uuid,
    pub version: u64,
    pub event: TableEvent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let event = TableEvent::PassAccepted { seat: 1 };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "pass_accepted", "seat": 1})
        );

        let event = TableEvent::AutoPassTimerCleared {
            sequence_id: 4,
            reason: TimerClearReason::TrickResolved,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "auto_pass_timer_cleared",
                "sequence_id": 4,
                "reason": "trick_resolved"
            })
        );
    }

    #[test]
    fn envelope_round_trips() {
        let envelope = EventEnvelope {
            room_id: Uuid::from_u128(1),
            version: 9,
            event: TableEvent::TrickResolved { leader_seat: 2 },
        };
        let encoded = serde_json::to_string(&envelope).unwrap();
        let decoded: EventEnvelope = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, envelope);
    }
}
