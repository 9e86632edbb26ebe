//! The turn loop: movement, buying, rent, elimination and termination.
//!
//! Rounds iterate over a snapshot of player ids taken when the round starts.
//! Only the moving player can go bankrupt, and it is removed with an
//! order-preserving `retain` right after its turn, so nobody else in the
//! round is skipped or visited twice. Its tiles are released in the same step,
//! before any other player can land on them.

use super::board::Board;
use super::player::Player;
use super::types::{GameResult, PlayerId, Strategy};
use crate::core::constants::BOARD_SIZE;
use crate::core::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::ops::ControlFlow;
use tracing::{debug, trace, warn};

/// What happened on the tile a player landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAction {
    Bought { price: i64 },
    Declined,
    PaidRent { owner: PlayerId, rent: i64 },
}

/// Summary of a single player-turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub roll: u8,
    pub position: usize,
    pub action: TileAction,
    pub eliminated: bool,
}

/// One self-contained game. Owns its board, players and random source.
pub struct Game<R: Rng> {
    number: u32,
    turns: u32,
    players: Vec<Player>,
    board: Board,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Random board, one player per strategy, shuffled turn order.
    pub fn new(number: u32, mut rng: R) -> Self {
        let board = Board::random(&mut rng);
        let mut players: Vec<Player> = Strategy::ALL
            .iter()
            .enumerate()
            .map(|(i, &strategy)| Player::new(PlayerId(i as u8), strategy))
            .collect();
        players.shuffle(&mut rng);

        Self {
            number,
            turns: 0,
            players,
            board,
            rng,
        }
    }

    /// Build a game from explicit parts. `players` is taken as the turn order.
    ///
    /// Every player must stand on the board and every owned tile must belong
    /// to one of `players`.
    pub fn from_parts(
        number: u32,
        board: Board,
        players: Vec<Player>,
        rng: R,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = players.iter().find(|p| !seen.insert(p.id)) {
            return Err(GameError::DuplicatePlayer(dup.id.0));
        }
        if let Some(off) = players.iter().find(|p| p.position >= BOARD_SIZE) {
            return Err(GameError::PositionOffBoard {
                id: off.id.0,
                position: off.position,
            });
        }
        let stray = board
            .tiles()
            .iter()
            .enumerate()
            .find_map(|(position, t)| {
                t.owner
                    .filter(|owner| !seen.contains(owner))
                    .map(|owner| (position, owner))
            });
        if let Some((position, owner)) = stray {
            return Err(GameError::UnknownOwner {
                position,
                owner: owner.0,
            });
        }

        Ok(Self {
            number,
            turns: 0,
            players,
            board,
            rng,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Active players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until one player is left or `max_turns` player-turns have run.
    pub fn play(&mut self, max_turns: u32) -> Result<GameResult, GameError> {
        if max_turns == 0 {
            return Err(GameError::ZeroTurnCap);
        }

        while self.turns < max_turns {
            if self.play_round(max_turns).is_break() {
                break;
            }
            if self.players.len() <= 1 {
                break;
            }
        }

        self.finish()
    }

    /// Result for the current state: the last player standing, or else the
    /// richest player, keeping the earliest in turn order on ties.
    pub fn finish(&self) -> Result<GameResult, GameError> {
        let winner = self
            .players
            .iter()
            .reduce(|best, p| if p.balance > best.balance { p } else { best })
            .ok_or(GameError::NoPlayers)?;

        Ok(GameResult {
            game_number: self.number,
            turns: self.turns,
            winner: winner.strategy,
            timed_out: self.players.len() > 1,
        })
    }

    /// One turn for every player active at the start of the round.
    /// Breaks as soon as the turn cap is hit, even mid-round.
    fn play_round(&mut self, max_turns: u32) -> ControlFlow<()> {
        let order: Vec<PlayerId> = self.players.iter().map(|p| p.id).collect();

        for id in order {
            if self.take_turn(id).is_none() {
                continue;
            }
            self.turns += 1;
            if self.turns >= max_turns {
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    /// Move, settle the tile, then check for bankruptcy.
    /// Returns `None` if `id` is no longer active.
    fn take_turn(&mut self, id: PlayerId) -> Option<TurnReport> {
        let idx = self.players.iter().position(|p| p.id == id)?;

        let player = &mut self.players[idx];
        let roll = player.take_move(&mut self.rng);
        let position = player.position;
        trace!(game = self.number, %id, roll, position, balance = player.balance, "moved");

        let tile = self.board.tile(position);
        let (price, rent, owner) = (tile.price, tile.rent, tile.owner);

        let action = match owner {
            None => {
                if player.negotiate(price, rent, &mut self.rng) {
                    self.board.tile_mut(position).owner = Some(id);
                    debug!(game = self.number, %id, position, price, "bought property");
                    TileAction::Bought { price }
                } else {
                    TileAction::Declined
                }
            }
            // No exemption when the mover owns the tile: it pays and collects.
            Some(owner) => {
                player.pay(rent);
                self.credit_rent(owner, rent);
                debug!(game = self.number, payer = %id, %owner, rent, "paid rent");
                TileAction::PaidRent { owner, rent }
            }
        };

        let eliminated = self.players[idx].lost();
        if eliminated {
            self.eliminate(id);
        }

        Some(TurnReport {
            player: id,
            roll,
            position,
            action,
            eliminated,
        })
    }

    fn credit_rent(&mut self, owner: PlayerId, rent: i64) {
        match self.players.iter_mut().find(|p| p.id == owner) {
            Some(landlord) => landlord.collect(rent),
            None => {
                // Tiles are released on elimination, so this is a bookkeeping bug.
                warn!(game = self.number, %owner, rent, "rent owed to an inactive player");
                debug_assert!(false, "tile still owned by inactive player {owner}");
            }
        }
    }

    fn eliminate(&mut self, id: PlayerId) {
        self.players.retain(|p| p.id != id);
        let freed = self.board.clear_properties(id);
        debug!(
            game = self.number,
            %id,
            freed,
            remaining = self.players.len(),
            turn = self.turns + 1,
            "player eliminated"
        );
    }
}
