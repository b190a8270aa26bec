use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::GameError;
use super::grid::{EdgePolicy, Grid};
use super::obstacle::{Obstacle, ObstacleSet};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Wrap around the edges, or crash into them
    pub edge_policy: EdgePolicy,
    /// Wall segments placed at session start
    pub obstacles: Vec<Obstacle>,
    /// Points per fruit, multiplied by the current level
    pub points_per_fruit: u32,
    /// Level cap; each fruit raises the level by one up to this
    pub max_level: u32,
    /// Simulation ticks per second
    pub ticks_per_second: u32,
    /// How long the game-over screen stays up before an automatic restart
    pub game_over_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// Walls, wraparound edges, 10 points per fruit
    pub fn classic() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            edge_policy: EdgePolicy::Wrap,
            obstacles: ObstacleSet::classic_layout(),
            points_per_fruit: 10,
            max_level: 5,
            ticks_per_second: 10,
            game_over_delay_ms: 2000,
        }
    }

    /// No walls, the grid edge is deadly, 2 points per fruit
    pub fn simple() -> Self {
        Self {
            edge_policy: EdgePolicy::Bounded,
            obstacles: Vec::new(),
            points_per_fruit: 2,
            ..Self::classic()
        }
    }

    /// Resize the grid, keeping everything else
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    pub fn grid(&self) -> Result<Grid, GameError> {
        Grid::new(self.grid_width, self.grid_height, self.edge_policy)
    }

    /// Check every setting, building the grid and walls it describes
    pub fn validate(&self) -> Result<(Grid, ObstacleSet), GameError> {
        if self.ticks_per_second == 0 {
            return Err(GameError::InvalidSetting("ticks_per_second must be positive"));
        }
        if self.points_per_fruit == 0 {
            return Err(GameError::InvalidSetting("points_per_fruit must be positive"));
        }
        if self.max_level == 0 {
            return Err(GameError::InvalidSetting("max_level must be at least 1"));
        }

        let grid = self.grid()?;
        let obstacles = ObstacleSet::new(self.obstacles.clone(), &grid)?;
        Ok((grid, obstacles))
    }
}
