//! Integration test: game engine
//!
//! Drives whole games through the public API: buying policies, rent,
//! elimination and both ways a game can end.

use landlord::{Board, Game, GameError, Player, PlayerId, Property, Strategy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn player(id: u8, strategy: Strategy, balance: i64) -> Player {
    Player {
        balance,
        ..Player::new(PlayerId(id), strategy)
    }
}

/// Every tile reachable with a single roll from the start belongs to `owner`.
fn board_owned_near_start(owner: PlayerId, rent: i64) -> Board {
    Board::from_tiles(std::array::from_fn(|i| {
        let mut tile = Property::new(100_000, rent);
        if (1..=6).contains(&i) {
            tile.owner = Some(owner);
        }
        tile
    }))
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_three_bankruptcies_end_game_before_cap() {
    let owner = PlayerId(3);
    let mut game = Game::from_parts(
        1,
        board_owned_near_start(owner, 500),
        vec![
            player(0, Strategy::Impulsive, 300),
            player(1, Strategy::Demanding, 300),
            player(2, Strategy::Careful, 300),
            player(3, Strategy::Random, 300),
        ],
        create_test_rng(1),
    )
    .unwrap();

    let result = game.play(1000).unwrap();

    assert_eq!(result.turns, 4);
    assert!(!result.timed_out);
    assert_eq!(result.winner, Strategy::Random);
    assert_eq!(game.players().len(), 1);
    assert_eq!(game.players()[0].balance, 300 + 3 * 500);
}

#[test]
fn test_four_turn_cap_without_eliminations_picks_richest() {
    let mut game = Game::from_parts(
        0,
        Board::uniform(100_000, 100),
        vec![
            player(0, Strategy::Impulsive, 300),
            player(1, Strategy::Demanding, 300),
            player(2, Strategy::Careful, 450),
            player(3, Strategy::Random, 300),
        ],
        create_test_rng(2),
    )
    .unwrap();

    let result = game.play(4).unwrap();
    assert_eq!(result.turns, 4);
    assert!(result.timed_out);
    assert_eq!(result.winner, Strategy::Careful);
    assert_eq!(game.players().len(), 4);
}

#[test]
fn test_default_games_always_respect_the_cap() {
    for seed in 0..100u64 {
        let mut game = Game::new(seed as u32, create_test_rng(seed));
        let result = game.play(50).unwrap();

        assert!(result.turns <= 50);
        if result.turns < 50 {
            assert_eq!(game.players().len(), 1);
        }
    }
}

#[test]
fn test_zero_cap_is_rejected() {
    let mut game = Game::new(0, create_test_rng(0));
    assert_eq!(game.play(0), Err(GameError::ZeroTurnCap));
}

// =============================================================================
// Ownership
// =============================================================================

#[test]
fn test_impulsive_player_buys_cheap_tile() {
    let mut game = Game::from_parts(
        0,
        Board::uniform(100, 0),
        vec![player(0, Strategy::Impulsive, 300)],
        create_test_rng(3),
    )
    .unwrap();

    game.play(1).unwrap();

    assert_eq!(game.players()[0].balance, 200);
    assert_eq!(game.board().owned_by(PlayerId(0)), 1);
}

#[test]
fn test_demanding_player_skips_low_rent_tiles() {
    let mut game = Game::from_parts(
        0,
        Board::uniform(100, 10),
        vec![player(0, Strategy::Demanding, 300)],
        create_test_rng(4),
    )
    .unwrap();

    game.play(1).unwrap();

    assert_eq!(game.players()[0].balance, 300);
    assert_eq!(game.board().owned_by(PlayerId(0)), 0);
}

#[test]
fn test_landing_on_owned_tile_moves_rent_between_players() {
    let mut game = Game::from_parts(
        0,
        board_owned_near_start(PlayerId(1), 120),
        vec![
            player(0, Strategy::Careful, 300),
            player(1, Strategy::Impulsive, 300),
        ],
        create_test_rng(5),
    )
    .unwrap();

    game.play(1).unwrap();

    assert_eq!(game.players()[0].balance, 180);
    assert_eq!(game.players()[1].balance, 420);
}

#[test]
fn test_no_tile_is_left_owned_by_an_eliminated_player() {
    for seed in 0..100u64 {
        let mut game = Game::new(0, create_test_rng(seed));
        game.play(1000).unwrap();

        for tile in game.board().tiles() {
            if let Some(owner) = tile.owner {
                assert!(game.players().iter().any(|p| p.id == owner));
            }
        }
    }
}

// =============================================================================
// Setup validation
// =============================================================================

#[test]
fn test_from_parts_refuses_player_standing_off_board() {
    let stray = Player {
        position: 40,
        ..player(1, Strategy::Careful, 300)
    };
    let result = Game::from_parts(
        0,
        Board::uniform(100, 100),
        vec![player(0, Strategy::Impulsive, 300), stray],
        create_test_rng(6),
    );
    assert!(matches!(
        result,
        Err(GameError::PositionOffBoard { id: 1, position: 40 })
    ));
}

#[test]
fn test_from_parts_refuses_tiles_owned_by_outsider() {
    let result = Game::from_parts(
        0,
        board_owned_near_start(PlayerId(9), 100),
        vec![
            player(0, Strategy::Impulsive, 300),
            player(1, Strategy::Demanding, 300),
        ],
        create_test_rng(7),
    );
    assert!(matches!(
        result,
        Err(GameError::UnknownOwner { owner: 9, .. })
    ));
}
