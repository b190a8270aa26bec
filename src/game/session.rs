use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    action::Direction,
    config::GameConfig,
    error::GameError,
    fruit::Fruit,
    grid::{Cell, Grid},
    obstacle::ObstacleSet,
    snake::{Snake, StepOutcome},
    state::{CollisionType, GameState, Phase, SoundEffect},
};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInfo {
    /// Whether the snake advanced at all (false while paused or game over)
    pub advanced: bool,
    /// Whether the snake ate the fruit this tick
    pub ate_fruit: bool,
    /// Whether the snake was sent back to the center by a wall
    pub soft_reset: bool,
    /// Collision that ended the game, if one occurred
    pub collision_type: Option<CollisionType>,
    /// Sounds to play, in order
    pub effects: Vec<SoundEffect>,
}

/// One run of the game: grid, walls, snake, fruit and counters
pub struct Session<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    obstacles: ObstacleSet,
    state: GameState,
    rng: R,
}

impl Session<StdRng> {
    /// Session with a reproducible random sequence
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GameConfig) -> Result<Self, GameError> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R> Session<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }
}

impl<R: Rng> Session<R> {
    /// Validate the configuration and set up the first game
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        let (grid, obstacles) = config.validate()?;
        let snake = Snake::spawn(&grid, &obstacles, &mut rng);
        let fruit = Fruit::spawn(&grid, &obstacles, &mut rng)?;

        Ok(Self {
            config,
            grid,
            obstacles,
            state: GameState::new(snake, fruit),
            rng,
        })
    }

    /// Queue a heading for the next tick; ignored unless playing
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.phase != Phase::Playing {
            return false;
        }
        self.state.snake.set_direction(direction)
    }

    /// Flip between playing and paused. Has no effect on a finished game.
    pub fn toggle_pause(&mut self) -> Phase {
        self.state.phase = match self.state.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver => Phase::GameOver,
        };
        self.state.phase
    }

    /// Start a new game, keeping only the high score
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.state
            .snake
            .reset(&self.grid, &self.obstacles, &mut self.rng);
        self.state
            .fruit
            .randomize_position(&self.grid, &self.obstacles, &mut self.rng)?;
        self.state.score = 0;
        self.state.level = 1;
        self.state.steps = 0;
        self.state.phase = Phase::Playing;

        info!("New game started (high score {})", self.state.high_score);
        Ok(())
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> Result<TickInfo, GameError> {
        let mut info = TickInfo::default();
        if self.state.phase != Phase::Playing {
            return Ok(info);
        }

        let outcome = self
            .state
            .snake
            .step(&self.grid, &self.obstacles, &mut self.rng);
        self.state.steps += 1;
        info.advanced = true;

        if outcome == StepOutcome::Blocked {
            debug!("Snake hit a wall at step {}, back to center", self.state.steps);
            info.soft_reset = true;
            info.effects.push(SoundEffect::Crash);
        }

        if self.state.snake.head() == self.state.fruit.position {
            self.state.snake.grow();
            self.state
                .fruit
                .randomize_position(&self.grid, &self.obstacles, &mut self.rng)?;
            self.state
                .award_fruit(self.config.points_per_fruit, self.config.max_level);
            info.ate_fruit = true;
            info.effects.push(SoundEffect::Eat);
            debug!(
                "Fruit eaten: score {}, level {}",
                self.state.score, self.state.level
            );
        }

        // A freshly reset snake sits at the center and cannot have collided.
        if let StepOutcome::Moved { vacated } = outcome {
            if let Some(collision) = self.check_collision(vacated) {
                self.state.phase = Phase::GameOver;
                info.collision_type = Some(collision);
                info.effects.push(SoundEffect::Crash);
                info!(
                    "Game over ({:?}) with score {} after {} steps",
                    collision, self.state.score, self.state.steps
                );
            }
        }

        self.state.high_score = self.state.high_score.max(self.state.score);

        Ok(info)
    }

    /// Terminal collisions for the head after a normal move.
    ///
    /// The tail cell dropped on this same step still counts as body.
    fn check_collision(&self, vacated: Option<Cell>) -> Option<CollisionType> {
        let snake = &self.state.snake;
        let head = snake.head();

        if !self.grid.contains(head) {
            return Some(CollisionType::Wall);
        }

        if snake.body_segments().contains(&head) || vacated == Some(head) {
            return Some(CollisionType::SelfCollision);
        }

        if self.obstacles.occupies(head) {
            return Some(CollisionType::Obstacle);
        }

        None
    }
}
