//! Snake state machine: movement, buffered turns, growth and collision.

use super::grid::Grid;
use super::types::{Cell, Direction};
use crate::constants::{DIRECTION_QUEUE_CAPACITY, INITIAL_SNAKE_LENGTH};
use std::collections::VecDeque;
use std::fmt;

/// Why a step killed the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    OutOfBounds,
    Wall,
    SelfCollision,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeathCause::OutOfBounds => "left the grid",
            DeathCause::Wall => "hit a wall",
            DeathCause::SelfCollision => "bit itself",
        };
        f.write_str(text)
    }
}

/// Result of a single [`Snake::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Already dead; nothing changed.
    Idle,
    /// Head advanced and the tail followed.
    Moved,
    /// Head advanced and the tail stayed (pending growth consumed).
    Grew,
    /// The move was fatal. Body is unchanged.
    Died(DeathCause),
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Body segments. Head is at the front (index 0).
    body: VecDeque<Cell>,
    direction: Direction,
    /// Pending turns, oldest first. Never longer than `DIRECTION_QUEUE_CAPACITY`.
    queue: VecDeque<Direction>,
    alive: bool,
    grow_pending: bool,
    width: i16,
    height: i16,
}

impl Snake {
    /// A fresh snake with its head on `start`, facing `direction`, and the
    /// rest of its body trailing straight behind.
    pub fn new(width: i16, height: i16, start: Cell, direction: Direction) -> Self {
        let behind = direction.opposite();
        let mut body = VecDeque::with_capacity(INITIAL_SNAKE_LENGTH);
        let mut cell = start;
        for _ in 0..INITIAL_SNAKE_LENGTH {
            body.push_back(cell);
            cell = cell.step(behind);
        }
        Self::with_body(width, height, body, direction)
    }

    /// A snake with an arbitrary body (head first). Used to script scenarios.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty: a snake always has a head.
    pub fn with_body(
        width: i16,
        height: i16,
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Self {
        let body: VecDeque<Cell> = body.into_iter().collect();
        assert!(!body.is_empty(), "snake body must have at least a head");
        Self {
            body,
            direction,
            queue: VecDeque::with_capacity(DIRECTION_QUEUE_CAPACITY),
            alive: true,
            grow_pending: false,
            width,
            height,
        }
    }

    /// Buffer a turn for a later step.
    ///
    /// An exact reversal of the current direction is rejected outright and
    /// leaves the queue untouched. When the queue is full the oldest entry is
    /// dropped to make room, so a flood of input keeps only the latest turns.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() {
            return false;
        }
        if self.queue.len() >= DIRECTION_QUEUE_CAPACITY {
            self.queue.pop_front();
        }
        self.queue.push_back(requested);
        true
    }

    /// Advance one grid step.
    ///
    /// Death is checked in order: out of bounds, wall (when `grid` is
    /// given), then any current body cell including the tail. A fatal step
    /// only clears `alive`.
    pub fn step(&mut self, grid: Option<&Grid>) -> StepOutcome {
        if !self.alive {
            return StepOutcome::Idle;
        }

        // A queued turn can go stale if the snake turned after it was
        // accepted; only the current direction is checked.
        if let Some(next) = self.queue.pop_front() {
            if next != self.direction.opposite() {
                self.direction = next;
            }
        }

        let new_head = self.head().step(self.direction);

        let cause = if !new_head.in_bounds(self.width, self.height) {
            Some(DeathCause::OutOfBounds)
        } else if grid.is_some_and(|g| g.is_wall(new_head)) {
            Some(DeathCause::Wall)
        } else if self.is_occupying(new_head) {
            Some(DeathCause::SelfCollision)
        } else {
            None
        };
        if let Some(cause) = cause {
            self.alive = false;
            return StepOutcome::Died(cause);
        }

        self.body.push_front(new_head);
        if self.grow_pending {
            self.grow_pending = false;
            StepOutcome::Grew
        } else {
            self.body.pop_back();
            StepOutcome::Moved
        }
    }

    /// Keep the tail on the next step.
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    pub fn is_occupying(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Buffered turns, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = Direction> + '_ {
        self.queue.iter().copied()
    }

    pub fn growth_pending(&self) -> bool {
        self.grow_pending
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }
}
