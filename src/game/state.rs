use super::fruit::Fruit;
use super::snake::Snake;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid (bounded edges only)
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Snake's head landed on a wall segment
    Obstacle,
}

/// Sound cues produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Eat,
    Crash,
}

/// Mutable state of one game, reset on restart except for `high_score`
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Fruit,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub phase: Phase,
    pub steps: u32,
}

impl GameState {
    pub fn new(snake: Snake, fruit: Fruit) -> Self {
        Self {
            snake,
            fruit,
            score: 0,
            high_score: 0,
            level: 1,
            phase: Phase::Playing,
            steps: 0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Add the fruit reward at the current level, then level up.
    ///
    /// The score saturates at `u32::MAX`.
    pub(crate) fn award_fruit(&mut self, points_per_fruit: u32, max_level: u32) {
        self.score = self
            .score
            .saturating_add(points_per_fruit.saturating_mul(self.level));
        if self.level < max_level {
            self.level += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::game::grid::Cell;

    fn state() -> GameState {
        GameState::new(
            Snake::new(Cell::new(5, 5), Direction::Right),
            Fruit {
                position: Cell::new(1, 1),
            },
        )
    }

    #[test]
    fn test_new_state() {
        let state = state();
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, Phase::Playing);
        assert!(!state.is_paused());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_level_multiplier_and_cap() {
        let mut state = state();
        let mut expected = 0;
        for level in 1..=7 {
            state.award_fruit(10, 5);
            expected += 10 * level.min(5);
            assert_eq!(state.score, expected);
        }
        assert_eq!(state.level, 5);
    }

    #[test]
    fn test_huge_reward_saturates() {
        let mut state = state();
        state.award_fruit(3_000_000_000, 5);
        assert_eq!(state.score, 3_000_000_000);
        state.award_fruit(3_000_000_000, 5);
        assert_eq!(state.score, u32::MAX);
        state.award_fruit(3_000_000_000, 5);
        assert_eq!(state.score, u32::MAX);
        assert_eq!(state.level, 4);
    }
}
