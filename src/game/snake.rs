use rand::Rng;

use super::action::Direction;
use super::grid::{Cell, EdgePolicy, Grid};
use super::obstacle::ObstacleSet;

/// Result of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The head moved; `vacated` is the tail cell dropped this step, if any
    Moved { vacated: Option<Cell> },
    /// The head would have entered a wall, so the snake was reset to the center
    Blocked,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
    /// Heading used on the next step
    pub direction: Direction,
    /// Heading actually used on the last completed step
    pub last_applied_direction: Direction,
    /// Fruits eaten whose extra segment has not appeared yet
    pub growth_pending: usize,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
            last_applied_direction: direction,
            growth_pending: 0,
        }
    }

    /// Create a snake with extra segments trailing behind the head
    pub fn with_length(head: Cell, direction: Direction, length: usize) -> Self {
        let mut snake = Self::new(head, direction);
        let (dx, dy) = direction.delta();
        for i in 1..length {
            let prev = snake.body[i - 1];
            snake.body.push(prev.moved_by(-dx, -dy));
        }
        snake
    }

    /// Fresh snake at the grid center heading somewhere random.
    ///
    /// Only headings whose first cell is on the grid and not a wall are
    /// drawn; if the center is boxed in, any heading goes.
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, obstacles: &ObstacleSet, rng: &mut R) -> Self {
        let center = grid.center();
        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&direction| {
                let next = grid.advance(center, direction);
                grid.contains(next) && !obstacles.occupies(next)
            })
            .collect();

        let direction = if open.is_empty() {
            Direction::random(rng)
        } else {
            open[rng.gen_range(0..open.len())]
        };
        Self::new(center, direction)
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Number of cells currently on the board
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Length the snake is growing towards, counting undigested fruit
    pub fn length(&self) -> usize {
        self.body.len() + self.growth_pending
    }

    /// Queue a new heading for the next step.
    ///
    /// Returns false, and leaves the heading alone, when `direction` would
    /// reverse the last applied one.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.last_applied_direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn grow(&mut self) {
        self.growth_pending += 1;
    }

    /// Back to a single cell at the grid center with a new random heading
    pub fn reset<R: Rng + ?Sized>(&mut self, grid: &Grid, obstacles: &ObstacleSet, rng: &mut R) {
        *self = Self::spawn(grid, obstacles, rng);
    }

    /// Advance one cell in the current heading.
    ///
    /// With a wrapping grid, a snake longer than two cells that runs into a
    /// wall is put back at the center instead of moving.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        obstacles: &ObstacleSet,
        rng: &mut R,
    ) -> StepOutcome {
        self.last_applied_direction = self.direction;
        let new_head = grid.advance(self.head(), self.direction);

        if grid.edge_policy() == EdgePolicy::Wrap
            && self.body.len() > 2
            && obstacles.occupies(new_head)
        {
            self.reset(grid, obstacles, rng);
            return StepOutcome::Blocked;
        }

        self.body.insert(0, new_head);
        let vacated = if self.growth_pending > 0 {
            self.growth_pending -= 1;
            None
        } else {
            self.body.pop()
        };

        StepOutcome::Moved { vacated }
    }
}
