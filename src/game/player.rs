//! Player state and the four buying policies.

use super::types::{PlayerId, Strategy};
use crate::core::constants::{
    BOARD_SIZE, CAREFUL_RESERVE, DEMANDING_MIN_RENT, DICE_SIDES, LAP_BONUS, RANDOM_BUY_CHANCE,
    STARTING_BALANCE,
};
use rand::Rng;

/// A participant moving around the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub strategy: Strategy,
    /// Goes negative when the player cannot cover a rent; that is the elimination signal.
    pub balance: i64,
    /// Board index in `0..BOARD_SIZE`.
    pub position: usize,
}

impl Player {
    pub fn new(id: PlayerId, strategy: Strategy) -> Self {
        Self {
            id,
            strategy,
            balance: STARTING_BALANCE,
            position: 0,
        }
    }

    /// Roll one die and advance. Returns the roll.
    pub fn take_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        let roll = rng.gen_range(1..=DICE_SIDES);
        self.advance(roll);
        roll
    }

    /// Advance by `roll` tiles, wrapping past the last tile.
    /// Completing a lap pays `LAP_BONUS`. Returns whether the move wrapped.
    pub(crate) fn advance(&mut self, roll: u8) -> bool {
        debug_assert!((1..=DICE_SIDES).contains(&roll), "roll {roll} is not a die face");
        let roll = roll.clamp(1, DICE_SIDES);
        let new_position = self.position + roll as usize;
        let wrapped = new_position >= BOARD_SIZE;

        if wrapped {
            self.position = new_position - BOARD_SIZE;
            self.balance += LAP_BONUS;
        } else {
            self.position = new_position;
        }

        debug_assert!(self.position < BOARD_SIZE);
        wrapped
    }

    /// Decide whether to buy a property, paying for it on success.
    ///
    /// Never touches the balance when it returns `false`.
    pub fn negotiate<R: Rng + ?Sized>(&mut self, price: i64, rent: i64, rng: &mut R) -> bool {
        if self.balance < price {
            return false;
        }

        let buys = match self.strategy {
            Strategy::Impulsive => true,
            Strategy::Demanding => rent > DEMANDING_MIN_RENT,
            Strategy::Careful => self.balance - price >= CAREFUL_RESERVE,
            Strategy::Random => rng.gen_bool(RANDOM_BUY_CHANCE),
        };

        if buys {
            self.balance -= price;
        }
        buys
    }

    /// Unconditional debit, no floor.
    pub fn pay(&mut self, value: i64) {
        self.balance -= value;
    }

    pub fn collect(&mut self, value: i64) {
        self.balance += value;
    }

    pub fn lost(&self) -> bool {
        self.balance < 0
    }
}
