//! Runtime configuration.
//!
//! Board size and tick rate are fixed constants (see `term_tetris_types`).
//! Only the things that vary between runs come from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for the next-piece picker.
    pub seed: u32,
    /// Where log records go. Logging stays off without it unless `RUST_LOG`
    /// is set, since stderr shares the terminal with the game.
    pub log_file: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_file: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_SEED`: u32 seed (default: derived from the clock)
    /// - `TETRIS_LOG_FILE`: path for log output (default: none)
    pub fn from_env() -> Self {
        let seed = env::var("TETRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_file = env::var("TETRIS_LOG_FILE")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self { seed, log_file }
    }

    /// Gravity interval.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(TICK_MS as u64)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
