use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight wall segment starting at `anchor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub anchor: Cell,
    pub orientation: Orientation,
    pub length: u32,
}

impl Obstacle {
    pub fn horizontal(x: i32, y: i32, length: u32) -> Self {
        Self {
            anchor: Cell::new(x, y),
            orientation: Orientation::Horizontal,
            length,
        }
    }

    pub fn vertical(x: i32, y: i32, length: u32) -> Self {
        Self {
            anchor: Cell::new(x, y),
            orientation: Orientation::Vertical,
            length,
        }
    }

    /// Whether `cell` lies on this segment
    pub fn occupies(&self, cell: Cell) -> bool {
        // Offsets in i64 so no anchor/length combination can overflow
        let (on_line, offset) = match self.orientation {
            Orientation::Horizontal => (
                cell.y == self.anchor.y,
                cell.x as i64 - self.anchor.x as i64,
            ),
            Orientation::Vertical => (
                cell.x == self.anchor.x,
                cell.y as i64 - self.anchor.y as i64,
            ),
        };
        on_line && offset >= 0 && offset < self.length as i64
    }

    /// Cells covered by the segment, anchor first; stops at the edge of i32 space
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.length).map_while(move |i| {
            let i = i32::try_from(i).ok()?;
            match self.orientation {
                Orientation::Horizontal => {
                    Some(Cell::new(self.anchor.x.checked_add(i)?, self.anchor.y))
                }
                Orientation::Vertical => {
                    Some(Cell::new(self.anchor.x, self.anchor.y.checked_add(i)?))
                }
            }
        })
    }
}

/// Immutable set of wall segments for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleSet {
    segments: Vec<Obstacle>,
    free_cells: usize,
}

impl ObstacleSet {
    /// No walls at all on `grid`
    pub fn empty(grid: &Grid) -> Self {
        Self {
            segments: Vec::new(),
            free_cells: grid.cell_count(),
        }
    }

    /// Validate the segments against the grid they will live on.
    ///
    /// Segments may run past the far edge, but no further than the longer
    /// grid side; the anchor has to be on the grid.
    pub fn new(segments: Vec<Obstacle>, grid: &Grid) -> Result<Self, GameError> {
        let max_length = grid.width().max(grid.height()) as u32;
        for (index, segment) in segments.iter().enumerate() {
            if segment.length == 0 {
                return Err(GameError::InvalidObstacle {
                    index,
                    reason: "length must be at least 1",
                });
            }
            if !grid.contains(segment.anchor) {
                return Err(GameError::InvalidObstacle {
                    index,
                    reason: "anchor lies outside the grid",
                });
            }
            if segment.length > max_length {
                return Err(GameError::InvalidObstacle {
                    index,
                    reason: "longer than the grid",
                });
            }
        }

        let mut set = Self {
            segments,
            free_cells: 0,
        };
        set.free_cells = set.free_cell_count(grid);
        Ok(set)
    }

    /// The arcade layout: three horizontal and three vertical walls on a 30x20 grid
    pub fn classic_layout() -> Vec<Obstacle> {
        vec![
            Obstacle::horizontal(5, 5, 4),
            Obstacle::horizontal(10, 10, 6),
            Obstacle::horizontal(15, 15, 8),
            Obstacle::vertical(20, 5, 4),
            Obstacle::vertical(25, 10, 6),
            Obstacle::vertical(5, 15, 8),
        ]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.iter().any(|segment| segment.occupies(cell))
    }

    pub fn segments(&self) -> &[Obstacle] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Free cells on the grid this set was built for, counted once at construction
    pub fn free_cells(&self) -> usize {
        self.free_cells
    }

    /// Number of grid cells not covered by any segment
    pub fn free_cell_count(&self, grid: &Grid) -> usize {
        grid.cells().filter(|&cell| !self.occupies(cell)).count()
    }
}
