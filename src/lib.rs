//! gridsnake - Terminal Grid Snake Library
//!
//! This module exposes the game core for testing and external use.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Mode, ModeKind};
