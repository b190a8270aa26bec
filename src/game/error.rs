use std::fmt;

/// Errors raised by the game core.
///
/// Everything except `NoFreeCell` is a configuration problem and is reported
/// when a session is built, never mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidGrid { width: usize, height: usize },
    InvalidObstacle { index: usize, reason: &'static str },
    InvalidSetting(&'static str),
    NoFreeCell,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidGrid { width, height } => {
                write!(f, "Invalid grid size {}x{}", width, height)
            }
            GameError::InvalidObstacle { index, reason } => {
                write!(f, "Invalid obstacle #{}: {}", index, reason)
            }
            GameError::InvalidSetting(what) => write!(f, "Invalid setting: {}", what),
            GameError::NoFreeCell => write!(f, "No free cell left to place the fruit"),
        }
    }
}

impl std::error::Error for GameError {}
