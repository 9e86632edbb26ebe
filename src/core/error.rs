//! Error types for the engine and the batch runner.

use thiserror::Error;

/// Precondition failures when building or playing a single game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("player id {0} appears more than once")]
    DuplicatePlayer(u8),

    #[error("turn cap must be at least 1")]
    ZeroTurnCap,

    #[error("player id {id} starts at position {position}, outside the board")]
    PositionOffBoard { id: u8, position: usize },

    #[error("tile {position} is owned by player id {owner}, who is not in the game")]
    UnknownOwner { position: usize, owner: u8 },
}

/// Rejected batch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("number of simulations must be greater than zero")]
    NoSimulations,

    #[error("max turns must be at least {min} (got {got})")]
    TurnCapTooLow { min: u32, got: u32 },
}

/// Anything that can stop a simulation batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("game {game_number} failed: {source}")]
    Game {
        game_number: u32,
        #[source]
        source: GameError,
    },
}
