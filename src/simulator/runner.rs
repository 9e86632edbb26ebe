//! Batch runner: one independent, seeded game per simulation.

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::error::{GameError, SimError};
use crate::game::{Game, GameResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

/// Play a single game to completion.
pub fn run<R: Rng>(game_number: u32, max_turns: u32, rng: R) -> Result<GameResult, GameError> {
    let mut game = Game::new(game_number, rng);
    game.play(max_turns)
}

/// Generator for game `game_number`: derived from the base seed, or fresh entropy.
pub fn game_rng(seed: Option<u64>, game_number: u32) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(game_number as u64)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run the full batch and return a report. Results stay ordered by game number.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SimError> {
    config.validate()?;

    info!(
        games = config.num_simulations,
        max_turns = config.max_turns,
        seed = ?config.seed,
        parallel = config.parallel,
        "starting simulation"
    );

    let results = if config.parallel {
        (0..config.num_simulations)
            .into_par_iter()
            .map(|n| run_one(config, n))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        (0..config.num_simulations)
            .map(|n| run_one(config, n))
            .collect::<Result<Vec<_>, _>>()?
    };

    let report = SimReport::from_results(results, config.max_turns);
    info!(
        timed_out = report.timed_out,
        avg_turns = report.avg_turns,
        best = ?report.best_strategy,
        "simulation finished"
    );
    Ok(report)
}

fn run_one(config: &SimConfig, game_number: u32) -> Result<GameResult, SimError> {
    let rng = game_rng(config.seed, game_number);
    let result = run(game_number, config.max_turns, rng).map_err(|source| SimError::Game {
        game_number,
        source,
    })?;

    debug!(
        game = result.game_number,
        turns = result.turns,
        winner = %result.winner,
        timed_out = result.timed_out,
        "game finished"
    );
    Ok(result)
}
