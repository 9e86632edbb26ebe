//! Simulation configuration.

use crate::core::constants::{DEFAULT_MAX_TURNS, DEFAULT_SIMULATIONS, MIN_MAX_TURNS};
use crate::core::error::ConfigError;

/// Configuration for a batch of games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of games to play
    pub num_simulations: u32,

    /// Player-turn cap per game
    pub max_turns: u32,

    /// Base seed; game `n` uses `seed + n` (None = fresh entropy per game)
    pub seed: Option<u64>,

    /// Spread games across a rayon thread pool
    pub parallel: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_SIMULATIONS,
            max_turns: DEFAULT_MAX_TURNS,
            seed: None,
            parallel: false,
        }
    }
}

impl SimConfig {
    /// Small seeded batch for smoke runs
    pub fn quick() -> Self {
        Self {
            num_simulations: 50,
            seed: Some(42),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_simulations == 0 {
            return Err(ConfigError::NoSimulations);
        }
        if self.max_turns < MIN_MAX_TURNS {
            return Err(ConfigError::TurnCapTooLow {
                min: MIN_MAX_TURNS,
                got: self.max_turns,
            });
        }
        Ok(())
    }
}
