//! Grid snake game core.
//!
//! A snake moves across a fixed grid one cell per move interval, eats food to
//! grow, and dies on leaving the grid, hitting a wall or biting itself.
//! Endless mode plays on an open board; Level mode runs a campaign of walled
//! maps with a food quota per level.

pub mod endless;
pub mod food;
pub mod grid;
pub mod level;
pub mod levels;
pub mod mode;
pub mod round;
pub mod snake;
pub mod types;

pub use endless::EndlessGame;
pub use grid::{Grid, Tile};
pub use level::{AdvanceOutcome, LevelGame};
pub use mode::{Hud, Mode, Snapshot};
pub use round::{Round, RoundEvent};
pub use snake::{DeathCause, Snake, StepOutcome};
pub use types::*;
