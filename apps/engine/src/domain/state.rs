use serde::{Deserialize, Serialize};

use crate::domain::rules::SEATS;
use crate::domain::timer::AutoPassTimer;
use crate::domain::{Card, Combination};
use crate::errors::domain::DomainError;

pub type Seat = u8; // 0..=3

/// Who occupies a seat. Fixed for the lifetime of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeatOccupant {
    /// A human player. `join_index` is the room's append-only join order and
    /// drives coordinator election.
    Human { user_id: i64, join_index: u32 },
    /// A bot seat driven by the named policy.
    Bot { policy: String },
}

/// A seat plus its live connection flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    pub occupant: SeatOccupant,
    pub connected: bool,
}

impl SeatInfo {
    pub fn human(user_id: i64, join_index: u32) -> Self {
        Self {
            occupant: SeatOccupant::Human {
                user_id,
                join_index,
            },
            connected: false,
        }
    }

    pub fn bot(policy: impl Into<String>) -> Self {
        Self {
            occupant: SeatOccupant::Bot {
                policy: policy.into(),
            },
            connected: false,
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.occupant, SeatOccupant::Bot { .. })
    }

    pub fn is_human(&self) -> bool {
        matches!(self.occupant, SeatOccupant::Human { .. })
    }

    pub fn join_index(&self) -> Option<u32> {
        match self.occupant {
            SeatOccupant::Human { join_index, .. } => Some(join_index),
            SeatOccupant::Bot { .. } => None,
        }
    }
}

/// Overall table progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePhase {
    /// Room created, no deal installed yet.
    Lobby,
    /// A deal is in progress.
    Playing,
    /// The deal ended (one or zero seats still hold cards).
    Completed,
}

/// Per-trick state, reset whenever a trick resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// The play currently to beat; `None` while awaiting a lead.
    pub last_accepted: Option<Combination>,
    /// Seat that made `last_accepted`.
    pub last_player: Option<Seat>,
    /// Seats that declined (or were skipped as finished) since the last
    /// accepted play. Three resolves the trick, so the stored value is 0..=2.
    pub consecutive_passes: u8,
    /// Seat that led (or will lead) the current trick.
    pub trick_leader: Option<Seat>,
    /// 1-based trick counter within the deal.
    pub trick_no: u32,
    /// Armed auto-pass countdown, if any.
    pub auto_pass: Option<AutoPassTimer>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            last_accepted: None,
            last_player: None,
            consecutive_passes: 0,
            trick_leader: None,
            trick_no: 0,
            auto_pass: None,
        }
    }
}

/// Entire table container, sufficient for pure domain operations.
///
/// Versioning lives at the store layer; this struct is the value a commit
/// mutates all-or-nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    /// Current phase of the table.
    pub phase: TablePhase,
    /// Fixed seat assignments plus presence flags.
    pub seats: [SeatInfo; SEATS],
    /// Players' hands.
    pub hands: [Vec<Card>; SEATS],
    /// Seat whose turn it is to act.
    /// - Some(seat) when someone is expected to act
    /// - None in Lobby and Completed
    pub turn: Option<Seat>,
    /// Per-trick container.
    pub round: RoundState,
    /// Seats that emptied their hands, in finishing order.
    pub finished_order: Vec<Seat>,
    /// Monotonic source for auto-pass timer sequence ids. Never reset, not
    /// even across deals, so stale timer events stay detectable.
    pub next_timer_seq: u64,
}

impl TableState {
    pub fn new(seats: [SeatInfo; SEATS]) -> Self {
        Self {
            phase: TablePhase::Lobby,
            seats,
            hands: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
            turn: None,
            round: RoundState::empty(),
            finished_order: Vec::new(),
            next_timer_seq: 0,
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat as usize]
    }

    /// A seat is finished once its hand is empty.
    pub fn seat_finished(&self, seat: Seat) -> bool {
        self.hands[seat as usize].is_empty()
    }

    pub fn unfinished_count(&self) -> usize {
        self.hands.iter().filter(|h| !h.is_empty()).count()
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// These live in `domain` so every layer (services, stores, drivers) shares a
/// single source of truth for rotation and "who acts next".
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(4)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// First unfinished seat strictly after `from`, clockwise.
pub fn next_unfinished_seat(state: &TableState, from: Seat) -> Option<Seat> {
    let mut cursor = from;
    for _ in 0..SEATS - 1 {
        cursor = next_seat(cursor);
        if !state.seat_finished(cursor) {
            return Some(cursor);
        }
    }
    None
}

/// First unfinished seat starting at `from` itself, clockwise.
pub fn first_unfinished_from(state: &TableState, from: Seat) -> Option<Seat> {
    let mut cursor = from;
    for _ in 0..SEATS {
        if !state.seat_finished(cursor) {
            return Some(cursor);
        }
        cursor = next_seat(cursor);
    }
    None
}

/// The seat that coordinates bot turns: the connected human with the lowest
/// join index, or `None` while no human is connected.
///
/// Recomputed from seat data on every read; there is nothing to hand over
/// when a coordinator disconnects.
pub fn elect_coordinator(seats: &[SeatInfo; SEATS]) -> Option<Seat> {
    let mut best: Option<(u32, Seat)> = None;
    for (seat, info) in seats.iter().enumerate() {
        if !info.connected {
            continue;
        }
        if let Some(join_index) = info.join_index() {
            if best.map_or(true, |(bi, _)| join_index < bi) {
                best = Some((join_index, seat as Seat));
            }
        }
    }
    best.map(|(_, seat)| seat)
}

pub fn require_turn(state: &TableState, ctx: &'static str) -> Result<Seat, DomainError> {
    state.turn.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: turn must be set ({ctx})"))
    })
}

pub fn require_last_player(state: &TableState, ctx: &'static str) -> Result<Seat, DomainError> {
    state.round.last_player.ok_or_else(|| {
        DomainError::validation_other(format!(
            "Invariant violated: last_player must be set ({ctx})"
        ))
    })
}
