//! Food placement: random open cells away from the snake and walls.

use super::grid::Grid;
use super::snake::Snake;
use super::types::Cell;
use rand::Rng;

/// Where food may and may not go on the active board.
pub struct Placement<'a> {
    pub width: i16,
    pub height: i16,
    /// Active obstacle map, if the mode has one.
    pub grid: Option<&'a Grid>,
    pub snake: &'a Snake,
    /// Random candidates to try before scanning the whole board.
    pub attempts: u32,
}

impl Placement<'_> {
    /// A cell food may occupy: in bounds, not a wall, not under the snake.
    pub fn is_valid(&self, cell: Cell) -> bool {
        cell.in_bounds(self.width, self.height)
            && !self.grid.is_some_and(|g| g.is_wall(cell))
            && !self.snake.is_occupying(cell)
    }

    /// Every valid cell in row-major order.
    pub fn free_cells(&self) -> Vec<Cell> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|&cell| self.is_valid(cell))
            .collect()
    }
}

/// Place the first food of a round.
pub fn place_initial<R: Rng>(placement: &Placement, rng: &mut R) -> Option<Cell> {
    spawn_food(placement, rng)
}

/// Place a new food after the previous one was eaten.
pub fn respawn<R: Rng>(placement: &Placement, rng: &mut R) -> Option<Cell> {
    spawn_food(placement, rng)
}

/// Find a random valid cell for food.
///
/// Samples uniformly for up to `attempts` tries, then falls back to picking
/// uniformly among all free cells. Returns `None` only when the snake and
/// walls cover the whole board.
fn spawn_food<R: Rng>(placement: &Placement, rng: &mut R) -> Option<Cell> {
    if placement.width <= 0 || placement.height <= 0 {
        return None;
    }

    for _ in 0..placement.attempts {
        let cell = Cell::new(
            rng.random_range(0..placement.width),
            rng.random_range(0..placement.height),
        );
        if placement.is_valid(cell) {
            return Some(cell);
        }
    }

    let free = placement.free_cells();
    if free.is_empty() {
        log::warn!("no free cell left for food");
        return None;
    }
    log::debug!(
        "food sampling exhausted {} attempts; picking from {} free cells",
        placement.attempts,
        free.len()
    );
    Some(free[rng.random_range(0..free.len())])
}
