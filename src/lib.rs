//! Snake Arcade - the classic grid snake game for the terminal
//!
//! This library provides:
//! - Core game rules: grid, walls, snake, fruit and the session state machine (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Sound effects (audio module)
//! - The interactive play loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod settings;
