//! Property-trading board game engine.

pub mod board;
pub mod logic;
pub mod player;
pub mod types;

pub use board::{Board, Property};
pub use logic::{Game, TileAction, TurnReport};
pub use player::Player;
pub use types::{GameResult, PlayerId, Strategy};
