//! Neighbor table for the 5×5 board.
//!
//! The table is authored by hand rather than derived from a grid formula:
//! rows never wrap into each other, and the bottom rows carry walls (cell 15
//! does not connect to 16, cells 20 and 21 are dead ends reachable only from
//! the row above).

use crate::{Cell, GRID_SIZE};

const STANDARD_TABLE: [&[u8]; GRID_SIZE] = [
    &[1, 5],
    &[0, 2, 6],
    &[1, 3, 7],
    &[2, 4, 8],
    &[3, 9],
    &[0, 6, 10],
    &[1, 5, 7, 11],
    &[2, 6, 8, 12],
    &[3, 7, 9, 13],
    &[4, 8, 14],
    &[5, 11, 15],
    &[6, 10, 12, 16],
    &[7, 11, 13, 17],
    &[8, 12, 14, 18],
    &[9, 13, 19],
    &[10, 20],
    &[11, 17, 21],
    &[12, 16, 18, 22],
    &[13, 17, 19, 23],
    &[14, 18, 24],
    &[15],
    &[16],
    &[17, 23],
    &[18, 22, 24],
    &[19, 23],
];

/// Cells reachable from each cell in one legal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: Vec<Vec<Cell>>,
}

impl Adjacency {
    /// The robot-monster board.
    #[must_use]
    pub fn standard() -> Self {
        let neighbors = STANDARD_TABLE
            .iter()
            .map(|row| row.iter().map(|&i| Cell(i)).collect())
            .collect();
        Self { neighbors }
    }

    /// Neighbors of `cell`, in authored order.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        &self.neighbors[cell.index()]
    }

    #[must_use]
    pub fn is_adjacent(&self, from: Cell, to: Cell) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Every cell of the board, in index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().take(self.neighbors.len())
    }
}

impl Default for Adjacency {
    fn default() -> Self {
        Self::standard()
    }
}
