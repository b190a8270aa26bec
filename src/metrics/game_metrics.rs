use std::time::{Duration, Instant};

use crate::game::TickInfo;

/// Play statistics for the current process run
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub fruits_eaten: u32,
    pub soft_resets: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            games_played: 0,
            fruits_eaten: 0,
            soft_resets: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Fold one tick's events into the counters
    pub fn on_tick(&mut self, info: &TickInfo) {
        if info.ate_fruit {
            self.fruits_eaten += 1;
        }
        if info.soft_reset {
            self.soft_resets += 1;
        }
        if info.collision_type.is_some() {
            self.games_played += 1;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
