use std::fmt;

use crate::{GridError, GRID_WIDTH};

/// A move on the board.
///
/// Discriminants match the integer encoding callers pass to
/// `step`: `0 - north, 1 - east, 2 - west, 3 - south`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    North = 0,
    East = 1,
    West = 2,
    South = 3,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::North, Action::East, Action::West, Action::South];

    /// Index offset applied to the current cell. This single value is used
    /// for both the candidate cell and the adjacency check.
    #[must_use]
    pub const fn offset(self) -> isize {
        // GRID_WIDTH is tiny
        #[allow(clippy::cast_possible_wrap)]
        let row = GRID_WIDTH as isize;
        match self {
            Action::North => row,
            Action::East => 1,
            Action::West => -1,
            Action::South => -row,
        }
    }

    #[must_use]
    pub const fn index(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Action {
    type Error = GridError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::North),
            1 => Ok(Action::East),
            2 => Ok(Action::West),
            3 => Ok(Action::South),
            other => Err(GridError::InvalidAction(other)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "north",
            Action::East => "east",
            Action::West => "west",
            Action::South => "south",
        };
        f.write_str(name)
    }
}
