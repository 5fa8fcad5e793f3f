use super::grid::Cell;

/// A direction in which the snake can travel
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The change in grid coordinates from moving one cell in this direction
    fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Return the cell one step in this direction from `cell`.  The result may
    /// lie outside the grid.
    pub(super) fn apply(self, cell: Cell) -> Cell {
        let (dx, dy) = self.delta();
        Cell::new(cell.x + dx, cell.y + dy)
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
