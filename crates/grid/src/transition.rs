//! Movement rule.
//!
//! A move is accepted only when `position + action.offset()` is listed as a
//! neighbor of `position`. The same offset drives both the candidate and the
//! check, so a move can never land on a cell the table does not allow.

use crate::{Action, Adjacency, Cell, GridError};

/// Returns the cell reached from `position` by `action`.
///
/// Walking into a wall or off the board leaves the position unchanged.
#[must_use]
pub fn transition(table: &Adjacency, position: Cell, action: Action) -> Cell {
    match position.offset(action.offset()) {
        Some(candidate) if table.is_adjacent(position, candidate) => candidate,
        _ => position,
    }
}

/// Same as [`transition`] for a raw integer action.
///
/// # Errors
///
/// Returns [`GridError::InvalidAction`] if `action` is not in `0..=3`.
pub fn transition_raw(table: &Adjacency, position: Cell, action: i64) -> Result<Cell, GridError> {
    let action = Action::try_from(action)?;
    Ok(transition(table, position, action))
}

/// Actions that actually move the robot away from `position`.
#[must_use]
pub fn legal_actions(table: &Adjacency, position: Cell) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|&a| transition(table, position, a) != position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: usize) -> Cell {
        Cell::new(i).unwrap()
    }

    #[test]
    fn east_from_eleven_reaches_twelve() {
        let table = Adjacency::standard();
        assert_eq!(transition(&table, cell(11), Action::East), cell(12));
    }

    #[test]
    fn north_adds_a_row() {
        let table = Adjacency::standard();
        assert_eq!(transition(&table, cell(0), Action::North), cell(5));
        assert_eq!(transition(&table, cell(19), Action::North), cell(24));
    }

    #[test]
    fn wall_between_fifteen_and_sixteen_blocks_east() {
        let table = Adjacency::standard();
        assert_eq!(transition(&table, cell(15), Action::East), cell(15));
        assert_eq!(transition(&table, cell(16), Action::West), cell(16));
    }

    #[test]
    fn leaving_the_board_is_a_no_op() {
        let table = Adjacency::standard();
        assert_eq!(transition(&table, cell(0), Action::South), cell(0));
        assert_eq!(transition(&table, cell(0), Action::West), cell(0));
        assert_eq!(transition(&table, cell(24), Action::North), cell(24));
    }

    #[test]
    fn dead_end_only_allows_south() {
        let table = Adjacency::standard();
        assert_eq!(legal_actions(&table, cell(20)), vec![Action::South]);
        assert_eq!(legal_actions(&table, cell(21)), vec![Action::South]);
    }

    #[test]
    fn raw_action_out_of_range_is_an_error() {
        let table = Adjacency::standard();
        assert_eq!(
            transition_raw(&table, cell(3), 7),
            Err(GridError::InvalidAction(7))
        );
        assert_eq!(transition_raw(&table, cell(3), 1), Ok(cell(4)));
    }
}
