//! In-memory room simulator.
//!
//! Runs one all-bot room through the full engine stack: real store commits,
//! real event stream, real policies. Nothing is stubbed; the only difference
//! from production is that this process drives every seat itself instead of
//! waiting on a coordinator election (all-bot rooms have no connected human
//! to elect).

use std::sync::Arc;

use engine::ai::{by_name, BotAction, BotPolicy, TableView};
use engine::domain::seed_derivation::{derive_bot_seed, derive_deal_seed};
use engine::domain::state::{SeatInfo, TablePhase};
use engine::domain::{shuffled_deal, TableEvent};
use engine::{EngineConfig, GameFlowService, MemoryStore};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

/// A deal never takes this many actions; exceeding it means the room wedged.
const MAX_ACTIONS: u32 = 600;

/// Result of one simulated room, written out as a JSON line.
#[derive(Debug, Clone, Serialize)]
pub struct RoomResult {
    pub room: u32,
    pub room_id: Uuid,
    pub policies: Vec<String>,
    pub winner: u8,
    pub finished_order: Vec<u8>,
    pub plays: u32,
    pub passes: u32,
    pub tricks_resolved: u32,
    pub timers_armed: u32,
    pub finished_at: String,
}

/// Deal, play, and complete one all-bot room.
pub async fn run_room(
    room_no: u32,
    policy_names: [&'static str; 4],
    base_seed: u64,
) -> Result<RoomResult, Box<dyn std::error::Error>> {
    let config = EngineConfig::unpaced();
    let store = Arc::new(MemoryStore::with_event_buffer(config.event_buffer));
    let service = GameFlowService::new(store, config);
    let room_id = Uuid::new_v4();

    let seats: [SeatInfo; 4] = [
        SeatInfo::bot(policy_names[0]),
        SeatInfo::bot(policy_names[1]),
        SeatInfo::bot(policy_names[2]),
        SeatInfo::bot(policy_names[3]),
    ];
    service.create_room(room_id, seats).await?;
    let mut events = service.subscribe(room_id).await?;

    let hands = shuffled_deal(derive_deal_seed(base_seed, room_no));
    service.install_deal(room_id, hands).await?;

    let mut policies: Vec<Box<dyn BotPolicy>> = Vec::with_capacity(4);
    for (seat, name) in policy_names.iter().enumerate() {
        let factory = by_name(name).ok_or_else(|| format!("Unknown bot policy: {name}"))?;
        policies.push((factory.make)(Some(derive_bot_seed(room_id, seat as u8))));
    }

    for _ in 0..MAX_ACTIONS {
        let snapshot = service.read_room(room_id).await?;
        if snapshot.state.phase != TablePhase::Playing {
            break;
        }
        let Some(seat) = snapshot.state.turn else {
            break;
        };

        let view = TableView::for_seat(&snapshot.state, seat);
        let action = policies[usize::from(seat)].choose_action(&view)?;
        match action {
            BotAction::Play(cards) => {
                service.submit_play(room_id, seat, &cards).await?;
            }
            BotAction::Pass => {
                service.submit_pass(room_id, seat).await?;
            }
        }
    }

    let snapshot = service.read_room(room_id).await?;
    if snapshot.state.phase != TablePhase::Completed {
        return Err(format!("room {room_no} did not complete within {MAX_ACTIONS} actions").into());
    }
    debug!(room_no, %room_id, version = snapshot.version, "Room completed");

    let mut plays = 0;
    let mut passes = 0;
    let mut tricks_resolved = 0;
    let mut timers_armed = 0;
    while let Ok(envelope) = events.try_recv() {
        match envelope.event {
            TableEvent::PlayAccepted { .. } => plays += 1,
            TableEvent::PassAccepted { .. } => passes += 1,
            TableEvent::TrickResolved { .. } => tricks_resolved += 1,
            TableEvent::AutoPassTimerStarted { .. } => timers_armed += 1,
            _ => {}
        }
    }

    let finished_order = snapshot.state.finished_order.clone();
    let winner = finished_order
        .first()
        .copied()
        .ok_or("completed room has an empty finished order")?;
    Ok(RoomResult {
        room: room_no,
        room_id,
        policies: policy_names.iter().map(|s| s.to_string()).collect(),
        winner,
        finished_order,
        plays,
        passes,
        tricks_resolved,
        timers_armed,
        finished_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
    })
}
