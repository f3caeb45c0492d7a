//! Tile-based obstacle map for a single level.

use super::types::{Cell, Direction};
use crate::constants::INITIAL_SNAKE_LENGTH;
use crate::error::GameError;

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
}

/// Immutable row-major obstacle layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i16,
    height: i16,
    tiles: Vec<Tile>,
}

impl Grid {
    /// A `width` x `height` grid whose outermost ring is wall and whose
    /// interior is open. Negative dimensions are treated as zero.
    pub fn bordered(width: i16, height: i16) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let edge = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                tiles.push(if edge { Tile::Wall } else { Tile::Open });
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Parse a map from ASCII rows: `#` is wall, `.` is open.
    ///
    /// Every row must have the same width. `level` is only used to label
    /// errors.
    pub fn from_rows(level: usize, rows: &[&str]) -> Result<Self, GameError> {
        let invalid = |reason: String| GameError::InvalidMap { level, reason };

        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(invalid("map is empty".to_string()));
        }
        if width > i16::MAX as usize || height > i16::MAX as usize {
            return Err(invalid(format!("map {}x{} is too large", width, height)));
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let columns = row.chars().count();
            if columns != width {
                return Err(invalid(format!(
                    "row {} has {} columns, expected {}",
                    y, columns, width
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Open,
                    other => {
                        return Err(invalid(format!(
                            "unexpected '{}' at ({}, {})",
                            other, x, y
                        )))
                    }
                };
                tiles.push(tile);
            }
        }

        Ok(Self {
            width: width as i16,
            height: height as i16,
            tiles,
        })
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    /// Tile at `cell`, or `None` when off-grid.
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        if !cell.in_bounds(self.width, self.height) {
            return None;
        }
        let index = cell.y as usize * self.width as usize + cell.x as usize;
        self.tiles.get(index).copied()
    }

    /// True only for in-bounds wall tiles.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.tile(cell) == Some(Tile::Wall)
    }

    /// True only for in-bounds open tiles.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.tile(cell) == Some(Tile::Open)
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == Tile::Open)
            .map(move |(i, _)| Cell::new((i % width) as i16, (i / width) as i16))
    }

    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Open).count()
    }

    /// Check that a snake spawned at `start` heading `direction` is not
    /// trapped: its starting body and the first cell ahead must be open.
    pub fn check_start(
        &self,
        level: usize,
        start: Cell,
        direction: Direction,
    ) -> Result<(), GameError> {
        let behind = direction.opposite();
        let mut cell = start;
        for _ in 0..INITIAL_SNAKE_LENGTH {
            if !self.is_open(cell) {
                return Err(GameError::InvalidMap {
                    level,
                    reason: format!("start body cell ({}, {}) is not open", cell.x, cell.y),
                });
            }
            cell = cell.step(behind);
        }

        let ahead = start.step(direction);
        if !self.is_open(ahead) {
            return Err(GameError::InvalidMap {
                level,
                reason: format!(
                    "first step from the start lands on ({}, {}), which is not open",
                    ahead.x, ahead.y
                ),
            });
        }
        Ok(())
    }
}
