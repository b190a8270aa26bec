//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering dependencies.
//! Randomness is injected, so a seeded generator replays the same game.

pub mod action;
pub mod config;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod obstacle;
pub mod session;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use error::GameError;
pub use fruit::Fruit;
pub use grid::{Cell, EdgePolicy, Grid};
pub use obstacle::{Obstacle, ObstacleSet, Orientation};
pub use session::{Session, TickInfo};
pub use snake::{Snake, StepOutcome};
pub use state::{CollisionType, GameState, Phase, SoundEffect};
