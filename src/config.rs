//! Game configuration.

use crate::constants::*;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables shared by both modes. Every field has a default, so a config file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Endless-mode grid width (level maps carry their own size)
    pub grid_width: i16,
    /// Endless-mode grid height
    pub grid_height: i16,
    /// Milliseconds between snake steps
    pub move_interval_ms: u64,
    /// Random food candidates tried before falling back to a full scan
    pub food_sample_attempts: u32,
    /// Level to begin on in Level mode (1-based)
    pub start_level: usize,
    /// Random seed for reproducible food placement (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            move_interval_ms: MOVE_INTERVAL_MS,
            food_sample_attempts: FOOD_SAMPLE_ATTEMPTS,
            start_level: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default config with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width < MIN_GRID_SIZE || self.grid_height < MIN_GRID_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least {}x{}, got {}x{}",
                MIN_GRID_SIZE, MIN_GRID_SIZE, self.grid_width, self.grid_height
            )));
        }
        if self.move_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "move_interval_ms must be positive".to_string(),
            ));
        }
        if self.food_sample_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "food_sample_attempts must be positive".to_string(),
            ));
        }
        if self.start_level == 0 {
            return Err(GameError::InvalidConfig(
                "start_level is 1-based".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.move_interval_ms, 200);
        assert_eq!(config.start_level, 1);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "move_interval_ms": 120, "seed": 9 }"#).unwrap();
        assert_eq!(config.move_interval_ms, 120);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.food_sample_attempts, FOOD_SAMPLE_ATTEMPTS);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = GameConfig::from_json(r#"{ "move_interval_ms": 0 }"#);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_tiny_grid_rejected() {
        let config = GameConfig {
            grid_width: 4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig {
            grid_width: MIN_GRID_SIZE,
            grid_height: MIN_GRID_SIZE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_start_level_rejected() {
        let config = GameConfig {
            start_level: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let result = GameConfig::from_json("{ not json");
        assert!(matches!(result, Err(GameError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }

    #[test]
    fn test_seeded_preset() {
        let config = GameConfig::seeded(42);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.move_interval_ms, MOVE_INTERVAL_MS);
    }
}
