use rand::Rng;

use super::error::GameError;
use super::grid::{Cell, Grid};
use super::obstacle::ObstacleSet;

/// The single fruit on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    pub position: Cell,
}

impl Fruit {
    /// Place a new fruit on a random cell that is not a wall
    pub fn spawn<R: Rng + ?Sized>(
        grid: &Grid,
        obstacles: &ObstacleSet,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut fruit = Self {
            position: Cell::new(0, 0),
        };
        fruit.randomize_position(grid, obstacles, rng)?;
        Ok(fruit)
    }

    /// Move the fruit to a random free cell.
    ///
    /// Draws uniformly over the grid and redraws on walls. The snake is not
    /// avoided.
    pub fn randomize_position<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        obstacles: &ObstacleSet,
        rng: &mut R,
    ) -> Result<(), GameError> {
        if obstacles.free_cells() == 0 {
            return Err(GameError::NoFreeCell);
        }

        loop {
            let x = rng.gen_range(0..grid.width());
            let y = rng.gen_range(0..grid.height());
            let cell = Cell::new(x, y);

            if !obstacles.occupies(cell) {
                self.position = cell;
                return Ok(());
            }
        }
    }
}
