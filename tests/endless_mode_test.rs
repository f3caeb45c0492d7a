//! Integration test: Endless mode
//!
//! Collision, freezing and restart behavior of `EndlessGame`, plus a
//! randomized run checking that length only ever grows within a round.

use gridsnake::game::{Cell, Direction, EndlessGame, GameInput, GameStatus, Mode, Snake};
use gridsnake::{GameConfig, ModeKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const STEP_MS: u64 = 201;

fn started(seed: u64) -> (EndlessGame, u64) {
    let mut game = EndlessGame::new(&GameConfig::seeded(seed)).unwrap();
    game.tick(0);
    (game, 0)
}

#[test]
fn test_self_collision_ends_game_on_exact_step() {
    let (mut game, mut now) = started(4);
    let body = [
        Cell::new(10, 10),
        Cell::new(9, 10),
        Cell::new(8, 10),
        Cell::new(7, 10),
        Cell::new(6, 10),
    ];
    game.round.snake = Snake::with_body(20, 20, body, Direction::Right);
    game.round.food = Some(Cell::new(0, 0));

    // Down, Left, Up curls the head back onto (9,10)
    for (turn, expected_head) in [
        (Direction::Down, Cell::new(10, 11)),
        (Direction::Left, Cell::new(9, 11)),
    ] {
        assert!(game.change_direction(turn));
        now += STEP_MS;
        game.tick(now);
        assert!(game.round.snake.is_alive());
        assert_eq!(game.round.snake.head(), expected_head);
    }

    assert!(game.change_direction(Direction::Up));
    now += STEP_MS;
    assert!(game.tick(now));
    assert!(!game.round.snake.is_alive());
    assert_eq!(game.status, GameStatus::GameOver);
    // Head did not advance into the body
    assert_eq!(game.round.snake.head(), Cell::new(9, 11));

    for _ in 0..5 {
        now += STEP_MS;
        assert!(!game.tick(now));
        assert!(!game.is_running());
    }

    assert!(game.restart());
    assert!(game.is_running());
    assert_eq!(game.round.snake.len(), 3);
    assert_eq!(game.round.snake.head(), Cell::new(10, 10));
}

#[test]
fn test_queued_turns_apply_one_per_step() {
    let (mut game, mut now) = started(6);
    game.round.food = Some(Cell::new(0, 0));

    assert!(game.change_direction(Direction::Up));
    // Reverse of the current direction is rejected even when queued behind Up
    assert!(!game.change_direction(Direction::Left));

    now += STEP_MS;
    game.tick(now);
    assert_eq!(game.round.snake.head(), Cell::new(10, 9));
    assert_eq!(game.round.snake.direction(), Direction::Up);

    assert!(game.change_direction(Direction::Left));
    now += STEP_MS;
    game.tick(now);
    assert_eq!(game.round.snake.head(), Cell::new(9, 9));
}

#[test]
fn test_reversal_alone_never_kills() {
    let (mut game, mut now) = started(8);
    game.round.food = Some(Cell::new(0, 0));
    assert!(!game.change_direction(Direction::Left));
    now += STEP_MS;
    game.tick(now);
    assert!(game.is_running());
    assert_eq!(game.round.snake.head(), Cell::new(11, 10));
}

#[test]
fn test_length_never_shrinks_within_a_round() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut mode = Mode::new(ModeKind::Endless, &GameConfig::seeded(77)).unwrap();
    let mut now = 0;
    mode.tick(now);

    let mut last_len = mode.snapshot().body.len();
    let mut rounds = 0;
    for _ in 0..5_000 {
        let turn = match rng.random_range(0..6) {
            0 => Some(GameInput::Up),
            1 => Some(GameInput::Down),
            2 => Some(GameInput::Left),
            3 => Some(GameInput::Right),
            _ => None,
        };
        if let Some(input) = turn {
            mode.process_input(input);
        }
        now += STEP_MS;
        mode.tick(now);

        let snap = mode.snapshot();
        assert!(snap.body.len() >= last_len, "snake shrank mid-round");
        last_len = snap.body.len();

        if !mode.is_running() {
            assert!(mode.process_input(GameInput::Restart));
            rounds += 1;
            now += STEP_MS;
            mode.tick(now);
            last_len = mode.snapshot().body.len();
            assert_eq!(last_len, 3);
        }
    }
    assert!(rounds > 0);
}

/// Turn toward the food half the time, otherwise pick a random turn.
fn wander_toward_food(game: &EndlessGame, rng: &mut ChaCha8Rng) -> Option<Direction> {
    let head = game.round.snake.head();
    match (game.round.food, rng.random_range(0..4)) {
        (Some(food), 0 | 1) if food.x != head.x => Some(if food.x < head.x {
            Direction::Left
        } else {
            Direction::Right
        }),
        (Some(food), 0 | 1) if food.y != head.y => Some(if food.y < head.y {
            Direction::Up
        } else {
            Direction::Down
        }),
        (_, 2) => Some(Direction::ALL[rng.random_range(0..4)]),
        _ => None,
    }
}

#[test]
fn test_growth_follows_only_an_eating_step() {
    let mut rng = ChaCha8Rng::seed_from_u64(515);
    let (mut game, mut now) = started(515);

    let mut ate_last_step = false;
    let mut meals = 0;
    let mut deaths = 0;
    for _ in 0..20_000 {
        if let Some(turn) = wander_toward_food(&game, &mut rng) {
            game.change_direction(turn);
        }
        let food_before = game.round.food;
        let len_before = game.round.snake.len();

        now += STEP_MS;
        assert!(game.tick(now));
        let len_after = game.round.snake.len();

        if !game.is_running() {
            // A fatal step leaves the body alone, pending growth included
            assert_eq!(len_after, len_before);
            assert!(game.restart());
            game.tick(now);
            ate_last_step = false;
            deaths += 1;
            continue;
        }

        assert_eq!(
            len_after > len_before,
            ate_last_step,
            "length changed {} -> {} but previous step ate: {}",
            len_before,
            len_after,
            ate_last_step
        );
        assert!(len_after <= len_before + 1);

        ate_last_step = food_before == Some(game.round.snake.head());
        if ate_last_step {
            meals += 1;
        }
    }
    assert!(meals > 0);
    assert!(deaths > 0);
}
