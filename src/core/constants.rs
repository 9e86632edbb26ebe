// Board layout
pub const BOARD_SIZE: usize = 20;
pub const PROPERTY_PRICE_MIN: i64 = 100;
pub const PROPERTY_PRICE_MAX: i64 = 100_000;
pub const PROPERTY_RENT_MIN: i64 = 100;
pub const PROPERTY_RENT_MAX: i64 = 100_000;

// Players and money
pub const PLAYER_COUNT: usize = 4;
pub const STARTING_BALANCE: i64 = 300;
pub const LAP_BONUS: i64 = 300;
pub const DICE_SIDES: u8 = 6;

// Buying policies
pub const DEMANDING_MIN_RENT: i64 = 50; // buys only when rent is strictly above this
pub const CAREFUL_RESERVE: i64 = 80;
pub const RANDOM_BUY_CHANCE: f64 = 0.5;

// Batch defaults
pub const DEFAULT_SIMULATIONS: u32 = 300;
pub const DEFAULT_MAX_TURNS: u32 = 1000;
pub const MIN_MAX_TURNS: u32 = 4;
