use super::direction::Direction;
use super::grid::Cell;
use crate::consts;
use std::collections::VecDeque;

/// Cells that the snake starts out occupying, head first
const INITIAL_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];

const INITIAL_DIRECTION: Direction = Direction::Right;

/// Snake state
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, with the head at the front
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// Whether the tail should be kept on the next advance
    grow: bool,
}

impl Snake {
    pub(super) fn new() -> Snake {
        Snake {
            body: VecDeque::from(INITIAL_BODY),
            direction: INITIAL_DIRECTION,
            grow: false,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        *self.body.front().expect("snake body should be nonempty")
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Return the cells occupied by the snake
    pub(super) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Return the cell the head will occupy after the next advance.  The
    /// result may lie outside the grid.
    pub(super) fn next_head(&self) -> Cell {
        self.direction.apply(self.head())
    }

    /// Change the snake's direction to `direction`.  Turning back on the
    /// current direction of travel is ignored.
    pub(super) fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Lengthen the snake by one cell on the next advance
    pub(super) fn schedule_growth(&mut self) {
        self.grow = true;
    }

    /// Move the snake forwards one cell in the current direction
    pub(super) fn advance(&mut self) {
        self.body.push_front(self.next_head());
        if self.grow {
            self.grow = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Returns `true` if the snake's head occupies the same cell as a part of
    /// its body
    pub(super) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Put the snake back in its starting position
    pub(super) fn reset(&mut self) {
        *self = Snake::new();
    }
}
