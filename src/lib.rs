//! Landlord - Monte Carlo simulator for a property-trading board game.
//!
//! Four players with fixed buying strategies race around a 20-tile board,
//! buying properties and paying rent until one is left standing or the turn
//! cap runs out. The `simulator` module plays many such games and reports
//! how often each strategy wins.

pub mod build_info;
pub mod core;
pub mod game;
pub mod simulator;

pub use crate::core::error::{ConfigError, GameError, SimError};
pub use game::{Board, Game, GameResult, Player, PlayerId, Property, Strategy};
pub use simulator::{run, run_simulation, SimConfig, SimReport};
