//! Simulation configuration.

use crate::constants::TICKS_PER_SECOND;

/// Configuration for a batch of rounds.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_runs: u32,

    /// Seed of the first round; round `i` uses `seed + i` (None = random)
    pub seed: Option<u64>,

    /// Rounds still alive after this many ticks are stopped and counted as timed out
    pub max_ticks_per_run: u64,

    /// How far above the gap's lower edge the autopilot starts flapping
    pub flap_margin: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per round)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: TICKS_PER_SECOND * 60 * 5,
            flap_margin: 10.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible batch for quick checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_ticks_per_run: TICKS_PER_SECOND * 60,
            ..Default::default()
        }
    }
}
