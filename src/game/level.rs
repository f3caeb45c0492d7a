//! Level mode: eat a target number of foods on each obstacle map in turn.

use super::grid::Grid;
use super::levels::{self, level_name, target_food_count};
use super::mode::{Hud, Snapshot};
use super::round::{game_rng, Round, RoundEvent};
use super::snake::Snake;
use super::types::{Direction, GameStatus};
use crate::config::GameConfig;
use crate::error::GameError;
use rand::rngs::StdRng;

/// Result of a next-level request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the given level (1-based).
    Advanced(usize),
    /// The final level was already cleared; the campaign is over.
    Completed,
    /// Not in `LevelCleared`; nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct LevelGame {
    pub round: Round,
    pub status: GameStatus,
    /// Current level, 1-based.
    pub level: usize,
    pub food_eaten: u32,
    pub target_food: u32,
    levels: Vec<Grid>,
    config: GameConfig,
    rng: StdRng,
}

impl LevelGame {
    /// Start the campaign at `config.start_level`.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let levels = levels::campaign()?;
        Self::with_levels(config, levels)
    }

    /// Start a campaign over a custom list of maps.
    pub fn with_levels(config: &GameConfig, maps: Vec<Grid>) -> Result<Self, GameError> {
        config.validate()?;
        if maps.is_empty() {
            return Err(GameError::InvalidConfig(
                "level mode needs at least one map".to_string(),
            ));
        }
        let level = config.start_level;
        if level > maps.len() {
            return Err(GameError::InvalidConfig(format!(
                "start_level {} is past the last level ({})",
                level,
                maps.len()
            )));
        }
        let (start, direction) = levels::level_start();
        for (i, grid) in maps.iter().enumerate() {
            grid.check_start(i + 1, start, direction)?;
        }

        let mut rng = game_rng(config.seed);
        let round = Self::new_round(&maps[level - 1], config, &mut rng);
        Ok(Self {
            round,
            status: GameStatus::Running,
            level,
            food_eaten: 0,
            target_food: target_food_count(level),
            levels: maps,
            config: config.clone(),
            rng,
        })
    }

    fn new_round(grid: &Grid, config: &GameConfig, rng: &mut StdRng) -> Round {
        let (start, direction) = levels::level_start();
        let snake = Snake::new(grid.width(), grid.height(), start, direction);
        Round::new(
            snake,
            Some(grid),
            config.move_interval_ms,
            config.food_sample_attempts,
            rng,
        )
    }

    /// Reset snake, food and counters for the current level.
    fn enter_level(&mut self) {
        let grid = &self.levels[self.level - 1];
        self.round = Self::new_round(grid, &self.config, &mut self.rng);
        self.food_eaten = 0;
        self.target_food = target_food_count(self.level);
        self.status = GameStatus::Running;
    }

    /// The active obstacle map.
    pub fn grid(&self) -> &Grid {
        &self.levels[self.level - 1]
    }

    pub fn max_level(&self) -> usize {
        self.levels.len()
    }

    /// Advance to `now_ms`. Returns true if the snake moved or died.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let grid = &self.levels[self.level - 1];
        match self.round.tick(now_ms, Some(grid), &mut self.rng) {
            RoundEvent::Waiting => false,
            RoundEvent::Moved => true,
            RoundEvent::Ate => {
                self.food_eaten += 1;
                if self.food_eaten >= self.target_food {
                    self.status = GameStatus::LevelCleared;
                    log::info!(
                        "level {} cleared ({}/{} food)",
                        self.level,
                        self.food_eaten,
                        self.target_food
                    );
                }
                true
            }
            RoundEvent::Died(cause) => {
                log::debug!(
                    "level {}: snake {} after {}/{} food",
                    self.level,
                    cause,
                    self.food_eaten,
                    self.target_food
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

    /// Move on from a cleared level.
    ///
    /// Advancing from the final level ends the campaign in
    /// `AllLevelsCleared` rather than wrapping around.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.status != GameStatus::LevelCleared {
            return AdvanceOutcome::Ignored;
        }
        if self.level >= self.max_level() {
            self.status = GameStatus::AllLevelsCleared;
            log::info!("all {} levels cleared", self.max_level());
            return AdvanceOutcome::Completed;
        }
        self.level += 1;
        self.enter_level();
        log::info!(
            "entering level {} ({}), target {} food",
            self.level,
            level_name(self.level),
            self.target_food
        );
        AdvanceOutcome::Advanced(self.level)
    }

    /// Retry after dying (same level), or begin a new campaign once every
    /// level is cleared. Ignored in any other state.
    pub fn restart(&mut self) -> bool {
        match self.status {
            GameStatus::GameOver => {}
            GameStatus::AllLevelsCleared => self.level = 1,
            GameStatus::Running | GameStatus::LevelCleared => return false,
        }
        self.enter_level();
        log::info!("level {}: restarted", self.level);
        true
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let grid = self.grid();
        Snapshot {
            width: grid.width(),
            height: grid.height(),
            grid: Some(grid),
            body: self.round.snake.body(),
            food: self.round.food,
            status: self.status,
            move_interval_ms: self.round.move_interval_ms,
            tick_count: self.round.tick_count,
            hud: Hud::Level {
                level: self.level,
                max_level: self.max_level(),
                name: level_name(self.level),
                food_eaten: self.food_eaten,
                target: self.target_food,
                cleared: matches!(
                    self.status,
                    GameStatus::LevelCleared | GameStatus::AllLevelsCleared
                ),
            },
        }
    }
}
