use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("unknown action {0}, expected one of 0 (north), 1 (east), 2 (west), 3 (south)")]
    InvalidAction(i64),
    #[error("cell index {0} is outside the 5x5 grid")]
    CellOutOfRange(usize),
}
