//! One round of play: a snake, its food and the move clock.
//!
//! Both mode controllers own a `Round` and only react to the events it
//! reports, so stepping, eating and respawning live in one place.

use super::food::{self, Placement};
use super::grid::Grid;
use super::snake::{DeathCause, Snake, StepOutcome};
use super::types::Cell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What a tick did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// Not enough time has passed (or the clock was just anchored).
    Waiting,
    Moved,
    /// The head landed on the food. Growth shows up on the next step.
    Ate,
    Died(DeathCause),
}

#[derive(Debug, Clone)]
pub struct Round {
    pub snake: Snake,
    pub food: Option<Cell>,
    /// Timestamp of the last step. `None` until the first tick anchors it.
    pub last_move_ms: Option<u64>,
    pub move_interval_ms: u64,
    pub food_sample_attempts: u32,
    /// Total movement steps taken this round.
    pub tick_count: u64,
}

impl Round {
    /// Start a round with `snake` and a freshly placed food.
    pub fn new<R: Rng>(
        snake: Snake,
        grid: Option<&Grid>,
        move_interval_ms: u64,
        food_sample_attempts: u32,
        rng: &mut R,
    ) -> Self {
        let mut round = Self {
            snake,
            food: None,
            last_move_ms: None,
            move_interval_ms,
            food_sample_attempts,
            tick_count: 0,
        };
        let placed = food::place_initial(&round.placement(grid), rng);
        round.food = placed;
        round
    }

    fn placement<'a>(&'a self, grid: Option<&'a Grid>) -> Placement<'a> {
        Placement {
            width: self.snake.width(),
            height: self.snake.height(),
            grid,
            snake: &self.snake,
            attempts: self.food_sample_attempts,
        }
    }

    /// Advance the clock to `now_ms` and step once if the move interval has
    /// been exceeded since the last step.
    ///
    /// Frames inside the interval are no-ops. The first tick of a round only
    /// records its timestamp.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, grid: Option<&Grid>, rng: &mut R) -> RoundEvent {
        match self.last_move_ms {
            None => {
                self.last_move_ms = Some(now_ms);
                return RoundEvent::Waiting;
            }
            Some(last) if now_ms.saturating_sub(last) <= self.move_interval_ms => {
                return RoundEvent::Waiting;
            }
            Some(_) => {}
        }
        self.last_move_ms = Some(now_ms);
        self.step(grid, rng)
    }

    /// Single movement step, ignoring the clock.
    pub fn step<R: Rng>(&mut self, grid: Option<&Grid>, rng: &mut R) -> RoundEvent {
        match self.snake.step(grid) {
            StepOutcome::Idle => RoundEvent::Waiting,
            StepOutcome::Died(cause) => RoundEvent::Died(cause),
            StepOutcome::Moved | StepOutcome::Grew => {
                self.tick_count += 1;
                if self.food == Some(self.snake.head()) {
                    self.snake.grow();
                    let placed = food::respawn(&self.placement(grid), rng);
                    self.food = placed;
                    RoundEvent::Ate
                } else {
                    RoundEvent::Moved
                }
            }
        }
    }
}

/// Deterministic RNG when a seed is configured, OS-seeded otherwise.
pub fn game_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
