use rand::Rng;

use crate::grid::{Cell, Grid};

/// A single piece of food. Placement ignores the snake body, so food can
/// land underneath it.
#[derive(Clone, Debug)]
pub struct Food {
    grid: Grid,
    position: Cell,
}

impl Food {
    pub fn new<R: Rng>(grid: Grid, rng: &mut R) -> Self {
        let mut food = Self {
            grid,
            position: Cell::new(0, 0),
        };
        food.randomize_position(rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn randomize_position<R: Rng>(&mut self, rng: &mut R) {
        self.position = self.grid.random_cell(rng);
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, cell: Cell) {
        self.position = cell;
    }
}
