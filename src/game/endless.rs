//! Endless mode: survive as long as possible on an open, unwalled grid.

use super::mode::{Hud, Snapshot};
use super::round::{game_rng, Round, RoundEvent};
use super::snake::Snake;
use super::types::{Cell, Direction, GameStatus};
use crate::config::GameConfig;
use crate::error::GameError;
use rand::rngs::StdRng;

/// Spawn cell for a `width` x `height` board: the center, rounded down.
///
/// On any board of at least 4x4 the trailing body and the first cell ahead
/// (heading Right) are in bounds.
pub fn endless_start(width: i16, height: i16) -> Cell {
    Cell::new(width / 2, height / 2)
}

#[derive(Debug, Clone)]
pub struct EndlessGame {
    pub round: Round,
    pub status: GameStatus,
    pub grid_width: i16,
    pub grid_height: i16,
    config: GameConfig,
    rng: StdRng,
}

impl EndlessGame {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = game_rng(config.seed);
        let round = Self::new_round(config, &mut rng);
        Ok(Self {
            round,
            status: GameStatus::Running,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            config: config.clone(),
            rng,
        })
    }

    fn new_round(config: &GameConfig, rng: &mut StdRng) -> Round {
        let snake = Snake::new(
            config.grid_width,
            config.grid_height,
            endless_start(config.grid_width, config.grid_height),
            Direction::Right,
        );
        Round::new(
            snake,
            None,
            config.move_interval_ms,
            config.food_sample_attempts,
            rng,
        )
    }

    /// Advance to `now_ms`. Returns true if the snake moved or died.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        match self.round.tick(now_ms, None, &mut self.rng) {
            RoundEvent::Waiting => false,
            RoundEvent::Moved | RoundEvent::Ate => true,
            RoundEvent::Died(cause) => {
                log::debug!(
                    "endless: snake {} at length {}",
                    cause,
                    self.round.snake.len()
                );
                self.status = GameStatus::GameOver;
                true
            }
        }
    }

    /// Buffer a turn. Ignored unless running.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        self.is_running() && self.round.snake.change_direction(direction)
    }

    /// Start over with a fresh snake and food. Only honored after game over.
    pub fn restart(&mut self) -> bool {
        if self.status != GameStatus::GameOver {
            return false;
        }
        self.round = Self::new_round(&self.config, &mut self.rng);
        self.status = GameStatus::Running;
        log::info!("endless: restarted");
        true
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            width: self.grid_width,
            height: self.grid_height,
            grid: None,
            body: self.round.snake.body(),
            food: self.round.food,
            status: self.status,
            move_interval_ms: self.round.move_interval_ms,
            tick_count: self.round.tick_count,
            hud: Hud::Endless {
                length: self.round.snake.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_GRID_SIZE;

    /// Default move interval (200ms) plus one, enough for exactly one step.
    const STEP_MS: u64 = 201;

    fn started_game() -> (EndlessGame, u64) {
        let mut game = EndlessGame::new(&GameConfig::seeded(17)).unwrap();
        game.tick(0);
        (game, 0)
    }

    fn step(game: &mut EndlessGame, now: &mut u64) -> bool {
        *now += STEP_MS;
        game.tick(*now)
    }

    #[test]
    fn test_new_game_defaults() {
        let game = EndlessGame::new(&GameConfig::seeded(1)).unwrap();
        assert_eq!(game.status, GameStatus::Running);
        assert!(game.is_running());
        assert_eq!(game.round.snake.head(), Cell::new(10, 10));
        assert_eq!(game.round.snake.len(), 3);
        assert_eq!(game.round.snake.direction(), Direction::Right);
        assert!(!game.round.snake.is_occupying(game.round.food.unwrap()));
    }

    #[test]
    fn test_start_is_board_center() {
        assert_eq!(endless_start(20, 20), Cell::new(10, 10));
        assert_eq!(endless_start(11, 11), Cell::new(5, 5));
        assert_eq!(endless_start(5, 5), Cell::new(2, 2));
    }

    #[test]
    fn test_first_move_survives_on_every_valid_size() {
        for size in MIN_GRID_SIZE..=20 {
            let config = GameConfig {
                grid_width: size,
                grid_height: size,
                ..GameConfig::seeded(size as u64)
            };
            let mut game = EndlessGame::new(&config).unwrap();
            // Keep the food out of the way so the first step is a plain move
            game.round.food = None;
            game.tick(0);
            assert!(game.tick(STEP_MS), "{}x{}", size, size);
            assert!(game.is_running(), "{}x{} died on its first move", size, size);
            assert!(game.round.snake.body().iter().all(|c| c.in_bounds(size, size)));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            move_interval_ms: 0,
            ..Default::default()
        };
        assert!(EndlessGame::new(&config).is_err());
    }

    #[test]
    fn test_frames_within_interval_do_nothing() {
        let (mut game, _) = started_game();
        assert!(!game.tick(50));
        assert!(!game.tick(200));
        assert_eq!(game.round.snake.head(), Cell::new(10, 10));
        assert!(game.tick(201));
        assert_eq!(game.round.snake.head(), Cell::new(11, 10));
    }

    #[test]
    fn test_eating_food_grows_snake() {
        let (mut game, mut now) = started_game();
        game.round.food = Some(Cell::new(11, 10));

        step(&mut game, &mut now);
        assert_eq!(game.round.snake.len(), 3);

        game.round.food = Some(Cell::new(0, 0));
        step(&mut game, &mut now);
        assert_eq!(game.round.snake.len(), 4);
    }

    #[test]
    fn test_wall_of_grid_ends_game() {
        let (mut game, mut now) = started_game();
        game.round.food = Some(Cell::new(0, 0));
        // Head at (10,10) heading right: (19,10) is the last in-bounds cell
        for _ in 0..9 {
            step(&mut game, &mut now);
        }
        assert!(game.is_running());
        let body_before: Vec<Cell> = game.round.snake.body().iter().copied().collect();

        assert!(step(&mut game, &mut now));
        assert_eq!(game.status, GameStatus::GameOver);
        assert!(!game.round.snake.is_alive());
        assert_eq!(
            game.round.snake.body().iter().copied().collect::<Vec<_>>(),
            body_before
        );

        // Frozen afterwards
        assert!(!step(&mut game, &mut now));
    }

    #[test]
    fn test_direction_ignored_after_game_over() {
        let (mut game, _) = started_game();
        game.status = GameStatus::GameOver;
        assert!(!game.change_direction(Direction::Up));
        assert_eq!(game.round.snake.queued().count(), 0);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let (mut game, mut now) = started_game();
        assert!(!game.restart());

        game.round.food = Some(Cell::new(0, 0));
        game.change_direction(Direction::Up);
        for _ in 0..11 {
            step(&mut game, &mut now);
        }
        assert_eq!(game.status, GameStatus::GameOver);

        assert!(game.restart());
        assert!(game.is_running());
        assert!(game.round.snake.is_alive());
        assert_eq!(game.round.snake.head(), Cell::new(10, 10));
        assert_eq!(game.round.snake.len(), 3);
        assert!(game.round.last_move_ms.is_none());
    }

    #[test]
    fn test_snapshot_has_no_grid() {
        let (game, _) = started_game();
        let snap = game.snapshot();
        assert!(snap.grid.is_none());
        assert_eq!(snap.width, 20);
        assert_eq!(snap.body[0], Cell::new(10, 10));
        assert_eq!(snap.hud, Hud::Endless { length: 3 });
    }
}
