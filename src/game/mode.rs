//! The active game mode and the read-only view a renderer draws from.

use super::endless::EndlessGame;
use super::grid::Grid;
use super::level::{AdvanceOutcome, LevelGame};
use super::types::{Cell, GameInput, GameStatus, ModeKind};
use crate::config::GameConfig;
use crate::error::GameError;
use std::collections::VecDeque;

/// Mode-specific heads-up display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hud {
    Endless {
        length: usize,
    },
    Level {
        level: usize,
        max_level: usize,
        name: &'static str,
        food_eaten: u32,
        target: u32,
        cleared: bool,
    },
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub width: i16,
    pub height: i16,
    /// Obstacle map; `None` in Endless mode.
    pub grid: Option<&'a Grid>,
    /// Head first.
    pub body: &'a VecDeque<Cell>,
    pub food: Option<Cell>,
    pub status: GameStatus,
    pub move_interval_ms: u64,
    pub tick_count: u64,
    pub hud: Hud,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }
}

/// A running game under one of the two controllers.
#[derive(Debug, Clone)]
pub enum Mode {
    Endless(EndlessGame),
    Level(LevelGame),
}

impl Mode {
    pub fn new(kind: ModeKind, config: &GameConfig) -> Result<Self, GameError> {
        let mode = match kind {
            ModeKind::Endless => Mode::Endless(EndlessGame::new(config)?),
            ModeKind::Level => Mode::Level(LevelGame::new(config)?),
        };
        log::info!("starting {} mode", kind);
        Ok(mode)
    }

    /// Build a mode from its name (`endless` or `level`).
    pub fn from_name(name: &str, config: &GameConfig) -> Result<Self, GameError> {
        Self::new(name.parse()?, config)
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Endless(_) => ModeKind::Endless,
            Mode::Level(_) => ModeKind::Level,
        }
    }

    /// Advance game time to `now_ms`. Returns true if the state changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self {
            Mode::Endless(game) => game.tick(now_ms),
            Mode::Level(game) => game.tick(now_ms),
        }
    }

    /// Process player input. Returns true if it had any effect.
    ///
    /// Turns only register while running, restart only after the round has
    /// ended, and next-level only from a cleared level.
    pub fn process_input(&mut self, input: GameInput) -> bool {
        if let Some(direction) = input.direction() {
            return match self {
                Mode::Endless(game) => game.change_direction(direction),
                Mode::Level(game) => game.change_direction(direction),
            };
        }
        match (self, input) {
            (Mode::Endless(game), GameInput::Restart) => game.restart(),
            (Mode::Level(game), GameInput::Restart) => game.restart(),
            (Mode::Level(game), GameInput::NextLevel) => {
                game.advance() != AdvanceOutcome::Ignored
            }
            _ => false,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self {
            Mode::Endless(game) => game.status,
            Mode::Level(game) => game.status,
        }
    }

    /// True while ticks affect gameplay.
    pub fn is_running(&self) -> bool {
        self.status() == GameStatus::Running
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        match self {
            Mode::Endless(game) => game.snapshot(),
            Mode::Level(game) => game.snapshot(),
        }
    }
}
