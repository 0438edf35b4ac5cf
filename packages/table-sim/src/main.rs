//! Table simulator CLI - fast in-memory rooms for policy evaluation.
//!
//! Runs all-bot rooms through the full engine (store commits, event stream,
//! policies) with deterministic seeds, and prints one JSON line per room
//! plus a per-seat win summary.

mod simulator;

use std::time::Instant;

use clap::{Parser, ValueEnum};
use engine::{GreedyPolicy, RandomPolicy};
use simulator::{run_room, RoomResult};
use tracing::warn;

#[derive(Parser)]
#[command(name = "table-sim")]
#[command(about = "Fast in-memory table simulator for bot policy evaluation")]
struct Args {
    /// Number of rooms to simulate
    #[arg(short, long, default_value = "1")]
    rooms: u32,

    /// Policy for all seats (shortcut to set all 4 seats to the same policy)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<PolicyType>,

    /// Policy for seat 0
    #[arg(long, default_value = "greedy")]
    seat0: PolicyType,

    /// Policy for seat 1
    #[arg(long, default_value = "greedy")]
    seat1: PolicyType,

    /// Policy for seat 2
    #[arg(long, default_value = "greedy")]
    seat2: PolicyType,

    /// Policy for seat 3
    #[arg(long, default_value = "greedy")]
    seat3: PolicyType,

    /// Base seed for deterministic deals; per-room seeds are derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyType {
    Greedy,
    Random,
}

impl PolicyType {
    fn name(&self) -> &'static str {
        match self {
            PolicyType::Greedy => GreedyPolicy::NAME,
            PolicyType::Random => RandomPolicy::NAME,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean JSONL.
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seat_policies = if let Some(all) = args.seats {
        [all; 4]
    } else {
        [args.seat0, args.seat1, args.seat2, args.seat3]
    };
    let policy_names = [
        seat_policies[0].name(),
        seat_policies[1].name(),
        seat_policies[2].name(),
        seat_policies[3].name(),
    ];
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for room_no in 1..=args.rooms {
        match run_room(room_no, policy_names, base_seed).await {
            Ok(result) => {
                println!("{}", serde_json::to_string(&result)?);
                results.push(result);
            }
            Err(err) => {
                errors += 1;
                warn!("Room {} failed: {}", room_no, err);
            }
        }
    }

    print_summary(&results, errors, start.elapsed(), args.rooms, &policy_names);
    Ok(())
}

fn print_summary(
    results: &[RoomResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
    policy_names: &[&str; 4],
) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Rooms completed: {}/{}", results.len(), total);
    if errors > 0 {
        eprintln!("Errors: {}", errors);
    }
    eprintln!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    eprintln!(
        "Average time per room: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = [0u32; 4];
    let mut timers = 0u32;
    for result in results {
        wins[usize::from(result.winner)] += 1;
        timers += result.timers_armed;
    }

    eprintln!("\n=== Results by Seat ===");
    for seat in 0..4 {
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        eprintln!(
            "Seat {} ({}): wins={} ({:.1}%)",
            seat, policy_names[seat], wins[seat], win_rate
        );
    }
    eprintln!("Auto-pass timers armed: {}", timers);
}
