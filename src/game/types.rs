//! Snake game data structures shared by the snake, food and mode controllers.

use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction. Y grows downward.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`. May be off-grid.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True if the cell lies inside a `width` x `height` grid.
    pub fn in_bounds(self, width: i16, height: i16) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

impl From<(i16, i16)> for Cell {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

/// Which controller a game runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Endless,
    Level,
}

impl ModeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Endless => "endless",
            Self::Level => "level",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModeKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "endless" => Ok(Self::Endless),
            "level" | "levels" => Ok(Self::Level),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}

/// Lifecycle of a mode controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Ticks advance the snake.
    Running,
    /// The snake died. Waiting for a restart.
    GameOver,
    /// Level target reached. Waiting for the next-level request.
    LevelCleared,
    /// The final level was cleared and advanced past. Terminal until restart.
    AllLevelsCleared,
}

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
    Restart,
    NextLevel,
}

impl GameInput {
    /// The movement direction this input requests, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Restart | Self::NextLevel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0), "{:?}", dir);
        }
    }

    #[test]
    fn test_cell_step_and_bounds() {
        let cell = Cell::new(0, 3);
        assert_eq!(cell.step(Direction::Right), Cell::new(1, 3));
        assert!(!cell.step(Direction::Left).in_bounds(20, 20));
        assert!(cell.in_bounds(20, 20));
        assert!(!Cell::new(20, 0).in_bounds(20, 20));
        assert!(!Cell::new(0, 20).in_bounds(20, 20));
    }

    #[test]
    fn test_mode_kind_parse() {
        assert_eq!("endless".parse::<ModeKind>().unwrap(), ModeKind::Endless);
        assert_eq!("Level".parse::<ModeKind>().unwrap(), ModeKind::Level);
        assert_eq!(" levels ".parse::<ModeKind>().unwrap(), ModeKind::Level);
    }

    #[test]
    fn test_unknown_mode_is_error() {
        let err = "arcade".parse::<ModeKind>().unwrap_err();
        assert!(matches!(err, GameError::UnknownMode(ref name) if name == "arcade"));
    }

    #[test]
    fn test_input_direction() {
        assert_eq!(GameInput::Left.direction(), Some(Direction::Left));
        assert_eq!(GameInput::Restart.direction(), None);
        assert_eq!(GameInput::NextLevel.direction(), None);
    }
}
