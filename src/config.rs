//! Start-up configuration from environment variables.
//!
//! | var | default |
//! |---|---|
//! | `PIPES_PLAYER` | `$USER`, else `player` |
//! | `PIPES_RECORDS_PATH` | `pipes-records.json` |
//! | `PIPES_ROWS` / `PIPES_COLS` | 9 / 9, clamped to the board bounds |
//! | `PIPES_SEED` | derived from the clock |
//! | `PIPES_LOG_PATH` | unset: no logging |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};

pub const DEFAULT_RECORDS_PATH: &str = "pipes-records.json";
pub const DEFAULT_PLAYER: &str = "player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub player: String,
    pub records_path: PathBuf,
    pub rows: u8,
    pub cols: u8,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player: DEFAULT_PLAYER.to_string(),
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            rows: MIN_ROWS,
            cols: MIN_COLS,
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let player = non_empty("PIPES_PLAYER")
            .or_else(|| non_empty("USER"))
            .unwrap_or_else(|| DEFAULT_PLAYER.to_string());

        let records_path = non_empty("PIPES_RECORDS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_PATH));

        let rows = non_empty("PIPES_ROWS")
            .and_then(|s| s.parse::<u8>().ok())
            .map_or(MIN_ROWS, |v| v.clamp(MIN_ROWS, MAX_ROWS));
        let cols = non_empty("PIPES_COLS")
            .and_then(|s| s.parse::<u8>().ok())
            .map_or(MIN_COLS, |v| v.clamp(MIN_COLS, MAX_COLS));

        let seed = non_empty("PIPES_SEED").and_then(|s| s.parse().ok());
        let log_path = non_empty("PIPES_LOG_PATH").map(PathBuf::from);

        Self {
            player,
            records_path,
            rows,
            cols,
            seed,
            log_path,
        }
    }

    /// Configured seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
