//! Monte Carlo batch runner for comparing buying strategies.
//!
//! Each game owns its board, players and a ChaCha generator seeded from the
//! batch seed and the game number, so games are independent and can run on
//! any thread.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{SimReport, StrategyStats};
pub use runner::{game_rng, run, run_simulation};
