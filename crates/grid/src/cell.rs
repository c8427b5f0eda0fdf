use serde::{Deserialize, Serialize};
use std::fmt;

use crate::GridError;

/// Number of columns (and rows) of the board.
pub const GRID_WIDTH: usize = 5;
/// Total number of cells on the board.
pub const GRID_SIZE: usize = GRID_WIDTH * GRID_WIDTH;

/// One of the 25 board positions.
///
/// The wrapped index is always in `[0, GRID_SIZE)`; outside this crate the only way in is
/// [`Cell::new`] (or `TryFrom<usize>`), which checks the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Cell(pub(crate) u8);

impl Cell {
    /// Creates a cell from a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfRange`] if `index >= GRID_SIZE`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(index: usize) -> Result<Self, GridError> {
        if index < GRID_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(GridError::CellOutOfRange(index))
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn row(self) -> usize {
        self.index() / GRID_WIDTH
    }

    #[must_use]
    pub fn column(self) -> usize {
        self.index() % GRID_WIDTH
    }

    /// Applies a signed index offset, returning `None` when the result
    /// leaves the board.
    #[must_use]
    pub fn offset(self, delta: isize) -> Option<Self> {
        let target = self.index().checked_add_signed(delta)?;
        Self::new(target).ok()
    }

    /// Iterates all cells in index order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Cell> + Clone {
        (0..GRID_SIZE as u8).map(Cell)
    }
}

impl TryFrom<usize> for Cell {
    type Error = GridError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_column_follow_integer_division() {
        let c = Cell::new(17).unwrap();
        assert_eq!(c.row(), 3);
        assert_eq!(c.column(), 2);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(Cell::new(25), Err(GridError::CellOutOfRange(25)));
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Cell::new(0).unwrap();
        assert_eq!(corner.offset(-1), None);
        assert_eq!(Cell::new(24).unwrap().offset(5), None);
        assert_eq!(corner.offset(5), Some(Cell::new(5).unwrap()));
    }

    #[test]
    fn all_yields_every_cell_once() {
        let cells: Vec<usize> = Cell::all().map(Cell::index).collect();
        assert_eq!(cells, (0..GRID_SIZE).collect::<Vec<_>>());
    }
}
