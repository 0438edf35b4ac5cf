//! Auto-pass countdown record and arming rule.
//!
//! The timer is an immutable anchor: `started_at_ms`, `duration`, and
//! `sequence_id` are fixed the moment the timer is armed and never updated
//! while it lives. Clients derive the remaining time locally from the anchor;
//! no per-tick state exists anywhere.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};

use super::combos::{ComboKind, Combination};
use super::state::{TablePhase, TableState};
use super::unbeatable::is_unbeatable;
use crate::domain::Card;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoPassTimer {
    /// Wall-clock Unix milliseconds when the timer was armed.
    pub started_at_ms: i64,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub duration: Duration,
    /// Monotonic per-room id; stale countdown events carry a lower value.
    pub sequence_id: u64,
    /// The unbeatable play the countdown belongs to.
    pub combo: Combination,
}

impl AutoPassTimer {
    pub fn deadline_ms(&self) -> i64 {
        self.started_at_ms + self.duration.as_millis() as i64
    }

    /// Remaining time at `now_ms`, saturating at zero.
    pub fn remaining(&self, now_ms: i64) -> Duration {
        let left = self.deadline_ms() - now_ms;
        if left <= 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(left as u64)
        }
    }

    pub fn expired(&self, now_ms: i64) -> bool {
        now_ms >= self.deadline_ms()
    }
}

/// Why an armed timer went away. Carried on the clearing event so observers
/// can disarm without re-reading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerClearReason {
    BeatenByPlay,
    TrickResolved,
    DealCompleted,
}

/// A cleared timer, reported out of a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedTimer {
    pub sequence_id: u64,
    pub reason: TimerClearReason,
}

/// Arm the countdown after an accepted play, if it qualifies.
///
/// Qualifying means: the deal is running, no timer is already armed for this
/// trick, the play to beat is a single, and nothing held at the table beats
/// it. Passes never re-arm or extend an armed timer.
pub fn arm_auto_pass(
    state: &mut TableState,
    now_ms: i64,
    duration: Duration,
) -> Option<&AutoPassTimer> {
    if state.phase != TablePhase::Playing || state.round.auto_pass.is_some() {
        return None;
    }
    let combo = match &state.round.last_accepted {
        Some(c) if c.kind() == ComboKind::Single => c.clone(),
        _ => return None,
    };
    let cards_in_play: Vec<Card> = state.hands.iter().flatten().copied().collect();
    if !is_unbeatable(&combo, &cards_in_play) {
        return None;
    }
    state.next_timer_seq += 1;
    state.round.auto_pass = Some(AutoPassTimer {
        started_at_ms: now_ms,
        duration,
        sequence_id: state.next_timer_seq,
        combo,
    });
    state.round.auto_pass.as_ref()
}
