use rand::Rng;

use crate::grid::{Cell, Direction, Grid};

/// What a single `move_step` did to the snake.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Moved, but the snake is a single cell long afterwards.
    ShrunkToOne,
    /// The new head hit the body; the snake was reset in place.
    Collided,
}

impl MoveOutcome {
    /// Whether the session score has to be cleared after this move.
    pub fn resets_score(self) -> bool {
        !matches!(self, MoveOutcome::Moved)
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    grid: Grid,
    // head first
    segments: Vec<Cell>,
    heading: Direction,
    length: usize,
}

impl Snake {
    pub fn new<R: Rng>(grid: Grid, rng: &mut R) -> Self {
        Self {
            grid,
            segments: vec![grid.center()],
            heading: Direction::random(rng),
            length: 1,
        }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Changes heading unless that would reverse a snake longer than one cell.
    /// Returns whether the turn was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.length > 1 && direction == self.heading.opposite() {
            return false;
        }
        self.heading = direction;
        true
    }

    /// Raises the target length; the tail stops being trimmed on the next move.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn move_step<R: Rng>(&mut self, rng: &mut R) -> MoveOutcome {
        let new_head = self.grid.step(self.head(), self.heading);

        // Index 1 is about to be vacated by the neck, so only 2.. can be hit.
        if self.segments.len() > 2 && self.segments[2..].contains(&new_head) {
            self.reset(rng);
            return MoveOutcome::Collided;
        }

        self.segments.insert(0, new_head);
        if self.segments.len() > self.length {
            self.segments.pop();
        }

        if self.segments.len() == 1 {
            MoveOutcome::ShrunkToOne
        } else {
            MoveOutcome::Moved
        }
    }

    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.length = 1;
        self.segments.clear();
        self.segments.push(self.grid.center());
        self.heading = Direction::random(rng);
    }
}
