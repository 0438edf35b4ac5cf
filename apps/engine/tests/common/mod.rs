#![allow(dead_code)]

// tests/common/mod.rs

use std::collections::BTreeSet;
use std::sync::Arc;

use engine::domain::dealing::full_deck;
use engine::domain::rules::{HAND_SIZE, SEATS};
use engine::domain::state::{Seat, SeatInfo, TableState};
use engine::domain::{try_parse_cards, Card, EventEnvelope};
use engine::{
    CommitOutcome, EngineConfig, EngineError, GameFlowService, ManualClock, MemoryStore,
};
use tokio::sync::broadcast;
use uuid::Uuid;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Parse compact card tokens ("3D", "TS", "2H").
pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("test card tokens parse")
}

pub fn four_humans() -> [SeatInfo; SEATS] {
    [
        SeatInfo::human(101, 0),
        SeatInfo::human(102, 1),
        SeatInfo::human(103, 2),
        SeatInfo::human(104, 3),
    ]
}

/// Seat 0 human, seats 1..=3 bots running the given policy.
pub fn human_with_bots(policy: &str) -> [SeatInfo; SEATS] {
    [
        SeatInfo::human(101, 0),
        SeatInfo::bot(policy),
        SeatInfo::bot(policy),
        SeatInfo::bot(policy),
    ]
}

/// Build a full deal where each seat is guaranteed the given cards. The
/// remaining slots are filled from the rest of the deck in ascending game
/// order, seat 0 first, so forced high cards stay meaningful.
pub fn rigged_deal(forced: [&[&str]; SEATS]) -> [Vec<Card>; SEATS] {
    let forced: Vec<Vec<Card>> = forced.iter().map(|tokens| cards(tokens)).collect();
    let taken: BTreeSet<Card> = forced.iter().flatten().copied().collect();
    assert_eq!(
        taken.len(),
        forced.iter().map(Vec::len).sum::<usize>(),
        "forced cards overlap"
    );

    let mut rest = full_deck().into_iter().filter(|c| !taken.contains(c));
    let mut hands: [Vec<Card>; SEATS] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    for (i, hand) in forced.into_iter().enumerate() {
        hands[i] = hand;
    }
    for hand in hands.iter_mut() {
        while hand.len() < HAND_SIZE {
            hand.push(rest.next().expect("full deck covers all hands"));
        }
    }
    hands
}

/// An in-memory room behind an unpaced service with a hand-driven clock.
pub struct TestTable {
    pub service: Arc<GameFlowService<MemoryStore>>,
    pub clock: Arc<ManualClock>,
    pub room_id: Uuid,
}

impl TestTable {
    pub async fn with_seats(seats: [SeatInfo; SEATS]) -> Self {
        let config = EngineConfig::unpaced();
        let store = Arc::new(MemoryStore::with_event_buffer(config.event_buffer));
        let clock = Arc::new(ManualClock::new(1_000));
        let service = Arc::new(GameFlowService::with_clock(store, config, clock.clone()));
        let room_id = Uuid::new_v4();
        service
            .create_room(room_id, seats)
            .await
            .expect("create room");
        Self {
            service,
            clock,
            room_id,
        }
    }

    pub async fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.service
            .subscribe(self.room_id)
            .await
            .expect("subscribe to room")
    }

    pub async fn install(&self, hands: [Vec<Card>; SEATS]) -> CommitOutcome {
        self.service
            .install_deal(self.room_id, hands)
            .await
            .expect("install deal")
    }

    pub async fn play(&self, seat: Seat, tokens: &[&str]) -> CommitOutcome {
        self.try_play(seat, tokens)
            .await
            .unwrap_or_else(|err| panic!("play {tokens:?} by seat {seat}: {err}"))
    }

    pub async fn try_play(
        &self,
        seat: Seat,
        tokens: &[&str],
    ) -> Result<CommitOutcome, EngineError> {
        self.service
            .submit_play(self.room_id, seat, &cards(tokens))
            .await
    }

    pub async fn pass(&self, seat: Seat) -> CommitOutcome {
        self.try_pass(seat)
            .await
            .unwrap_or_else(|err| panic!("pass by seat {seat}: {err}"))
    }

    pub async fn try_pass(&self, seat: Seat) -> Result<CommitOutcome, EngineError> {
        self.service.submit_pass(self.room_id, seat).await
    }

    pub async fn state(&self) -> TableState {
        self.service
            .read_room(self.room_id)
            .await
            .expect("read room")
            .state
    }
}

/// Drain everything currently buffered on a subscription.
pub fn drain(rx: &mut broadcast::Receiver<EventEnvelope>) -> Vec<EventEnvelope> {
    let mut out = Vec::new();
    while let Ok(envelope) = rx.try_recv() {
        out.push(envelope);
    }
    out
}
