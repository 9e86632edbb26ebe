//! Identity, strategy, and result types shared by the engine and the runner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a player within one game.
///
/// Property ownership is keyed by this, never by strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Buying policy applied when a player lands on an unowned property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Buys whenever it can afford the property.
    Impulsive,
    /// Buys only when the rent is above the demanding threshold.
    Demanding,
    /// Buys only when a reserve is left after paying.
    Careful,
    /// Flips a fair coin.
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Impulsive,
        Strategy::Demanding,
        Strategy::Careful,
        Strategy::Random,
    ];

    pub fn index(self) -> usize {
        match self {
            Strategy::Impulsive => 0,
            Strategy::Demanding => 1,
            Strategy::Careful => 2,
            Strategy::Random => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Strategy> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Impulsive => "impulsive",
            Strategy::Demanding => "demanding",
            Strategy::Careful => "careful",
            Strategy::Random => "random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_number: u32,
    /// Player-turns played, not rounds.
    pub turns: u32,
    pub winner: Strategy,
    /// True when the turn cap ended the game with several players left.
    pub timed_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_index_roundtrip() {
        for (i, s) in Strategy::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Strategy::from_index(i), Some(*s));
        }
        assert_eq!(Strategy::from_index(4), None);
    }

    #[test]
    fn test_strategy_serializes_lowercase() {
        let json = serde_json::to_string(&Strategy::Careful).unwrap();
        assert_eq!(json, "\"careful\"");
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(3).to_string(), "P3");
    }
}
