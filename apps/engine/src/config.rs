//! Engine configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::EngineError;

const AUTO_PASS_MS_VAR: &str = "ENGINE_AUTO_PASS_MS";
const BOT_PACING_MS_VAR: &str = "ENGINE_BOT_PACING_MS";
const EVENT_BUFFER_VAR: &str = "ENGINE_EVENT_BUFFER";

const DEFAULT_AUTO_PASS_MS: u64 = 10_000;
const DEFAULT_BOT_PACING_MS: u64 = 1_000;
const DEFAULT_EVENT_BUFFER: usize = 256;

/// Runtime tunables for a table engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long an armed auto-pass countdown runs.
    pub auto_pass_duration: Duration,
    /// Delay between bot actions so humans can follow along. Zero disables
    /// pacing entirely (simulator and tests).
    pub bot_pacing: Duration,
    /// Capacity of each room's broadcast event channel.
    pub event_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            auto_pass_duration: Duration::from_millis(DEFAULT_AUTO_PASS_MS),
            bot_pacing: Duration::from_millis(DEFAULT_BOT_PACING_MS),
            event_buffer: DEFAULT_EVENT_BUFFER,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to defaults for
    /// unset variables. Set but unparseable values are an error.
    pub fn from_env() -> Result<Self, EngineError> {
        Ok(Self {
            auto_pass_duration: Duration::from_millis(parse_var(
                AUTO_PASS_MS_VAR,
                DEFAULT_AUTO_PASS_MS,
            )?),
            bot_pacing: Duration::from_millis(parse_var(BOT_PACING_MS_VAR, DEFAULT_BOT_PACING_MS)?),
            event_buffer: parse_var(EVENT_BUFFER_VAR, DEFAULT_EVENT_BUFFER)?,
        })
    }

    /// Zero pacing and a deep event buffer, for driving tables flat out.
    pub fn unpaced() -> Self {
        Self {
            bot_pacing: Duration::ZERO,
            event_buffer: 1024,
            ..Self::default()
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, EngineError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| EngineError::config(format!("Invalid value for '{name}': '{raw}'"))),
        Err(_) => Ok(default),
    }
}
