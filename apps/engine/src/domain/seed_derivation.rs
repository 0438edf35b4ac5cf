//! RNG seed derivation for deterministic bot and dealing behavior.
//!
//! Seeds are derived by hashing a context label with the identifying inputs,
//! so every (room, seat) and (run, deal) combination gets its own stable
//! stream without any shared counter.

use uuid::Uuid;

use crate::domain::state::Seat;

/// Derive the RNG seed for a bot seat in a room.
///
/// Same room + seat always yields the same seed, so a coordinator failover
/// resumes a seeded policy exactly where any other driver would have.
pub fn derive_bot_seed(room_id: Uuid, seat: Seat) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"bot-policy");
    hasher.update(room_id.as_bytes());
    hasher.update(&[seat]);
    first_eight_le(hasher.finalize())
}

/// Derive the dealing seed for the `deal_no`-th deal of a run.
///
/// Used by the simulator to fan one base seed out into independent,
/// reproducible deals.
pub fn derive_deal_seed(base_seed: u64, deal_no: u32) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"deal");
    hasher.update(&base_seed.to_le_bytes());
    hasher.update(&deal_no.to_le_bytes());
    first_eight_le(hasher.finalize())
}

fn first_eight_le(digest: blake3::Hash) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
