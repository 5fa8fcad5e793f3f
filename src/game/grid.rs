use crate::consts;
use ratatui::layout::{Position, Rect};

/// A cell of the play grid.  Coordinates are signed so that a cell one step
/// past an edge can be represented while checking for collisions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(super) struct Cell {
    pub(super) x: i16,
    pub(super) y: i16,
}

impl Cell {
    pub(super) const fn new(x: i16, y: i16) -> Cell {
        Cell { x, y }
    }

    /// Returns `true` if the cell lies on the grid
    pub(super) fn in_bounds(self) -> bool {
        (0..consts::GRID_SIZE).contains(&self.x) && (0..consts::GRID_SIZE).contains(&self.y)
    }

    /// Convert the cell to a position in `buf` given the area of the buffer in
    /// which the grid is drawn.  Returns `None` if the cell falls outside
    /// `grid_area`.
    pub(super) fn buffer_position(self, grid_area: Rect) -> Option<Position> {
        let x = grid_area.x.checked_add(u16::try_from(self.x).ok()?)?;
        let y = grid_area.y.checked_add(u16::try_from(self.y).ok()?)?;
        (x < grid_area.right() && y < grid_area.bottom()).then_some(Position { x, y })
    }
}
