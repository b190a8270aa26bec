use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::error::GameError;

/// A cell on the game grid, in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta, without any edge handling
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// What happens when the snake crosses the edge of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Coordinates wrap to the opposite edge
    Wrap,
    /// Coordinates leave the grid; the session treats that as a crash
    Bounded,
}

/// Fixed-size rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    edge_policy: EdgePolicy,
}

impl Grid {
    pub fn new(width: usize, height: usize, edge_policy: EdgePolicy) -> Result<Self, GameError> {
        let invalid = GameError::InvalidGrid { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let w = i32::try_from(width).map_err(|_| invalid.clone())?;
        let h = i32::try_from(height).map_err(|_| invalid.clone())?;
        if w.checked_mul(h).is_none() {
            return Err(invalid);
        }

        Ok(Self {
            width: w,
            height: h,
            edge_policy,
        })
    }

    /// Build a grid from window dimensions in pixels and the pixel size of one cell
    pub fn from_pixels(
        width_px: u32,
        height_px: u32,
        cell_px: u32,
        edge_policy: EdgePolicy,
    ) -> Result<Self, GameError> {
        if cell_px == 0 {
            return Err(GameError::InvalidSetting("cell size in pixels must be positive"));
        }
        Self::new(
            (width_px / cell_px) as usize,
            (height_px / cell_px) as usize,
            edge_policy,
        )
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Starting cell of a fresh snake
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Next cell one step from `cell`, honouring the edge policy
    pub fn advance(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let next = cell.moved_by(dx, dy);
        match self.edge_policy {
            EdgePolicy::Wrap => Cell::new(
                next.x.rem_euclid(self.width),
                next.y.rem_euclid(self.height),
            ),
            EdgePolicy::Bounded => next,
        }
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}
