use super::grid::Cell;
use crate::consts;
use rand::Rng;
use std::collections::VecDeque;

/// The food item the snake is chasing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) position: Cell,
}

impl Food {
    pub(super) fn new<R: Rng>(rng: &mut R, occupied: &VecDeque<Cell>) -> Food {
        let mut food = Food {
            position: Cell::new(0, 0),
        };
        food.regenerate(rng, occupied);
        food
    }

    pub(super) fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a random cell not in `occupied`
    pub(super) fn regenerate<R: Rng>(&mut self, rng: &mut R, occupied: &VecDeque<Cell>) {
        self.position = loop {
            let candidate = Cell::new(
                rng.random_range(0..consts::GRID_SIZE),
                rng.random_range(0..consts::GRID_SIZE),
            );
            if !occupied.contains(&candidate) {
                break candidate;
            }
        };
    }
}
