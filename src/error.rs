//! Error type shared by configuration loading and game construction.

use std::fmt;

/// Everything that can go wrong before a game starts ticking.
///
/// Gameplay itself never errors: collisions resolve to a dead snake and
/// ignored requests simply report that nothing changed.
#[derive(Debug)]
pub enum GameError {
    /// A mode name that is neither `endless` nor `level`.
    UnknownMode(String),
    /// A config value outside its allowed range.
    InvalidConfig(String),
    /// A level map that failed to parse or traps the start position.
    InvalidMap { level: usize, reason: String },
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownMode(name) => {
                write!(f, "unknown game mode '{}' (expected 'endless' or 'level')", name)
            }
            GameError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            GameError::InvalidMap { level, reason } => {
                write!(f, "invalid map for level {}: {}", level, reason)
            }
            GameError::Io(e) => write!(f, "i/o error: {}", e),
            GameError::Json(e) => write!(f, "config parse error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::UnknownMode("arcade".to_string());
        assert_eq!(
            err.to_string(),
            "unknown game mode 'arcade' (expected 'endless' or 'level')"
        );

        let err = GameError::InvalidMap {
            level: 4,
            reason: "row 2 has 19 columns".to_string(),
        };
        assert_eq!(err.to_string(), "invalid map for level 4: row 2 has 19 columns");
    }

    #[test]
    fn test_json_error_has_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = GameError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
