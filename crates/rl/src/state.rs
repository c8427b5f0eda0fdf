//! Composite states and the enumerated state space.

use grid::{Cell, GRID_SIZE};
use std::fmt;

/// Raw prize marker values. `-1` means no prize; any other value names the
/// cell the prize sits on.
const PRIZE_VALUES: [i8; 5] = [-1, 0, 4, 20, 24];
const DANGER_VALUES: [bool; 2] = [false, true];

/// Total number of composite states.
pub const STATE_COUNT: usize = GRID_SIZE * DANGER_VALUES.len() * PRIZE_VALUES.len();

/// Which prize, if any, is present in a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrizeMarker(i8);

impl PrizeMarker {
    pub const NONE: PrizeMarker = PrizeMarker(-1);

    /// Marker for a prize on `cell`, if that cell can hold one.
    #[must_use]
    pub fn at(cell: Cell) -> Option<Self> {
        i8::try_from(cell.index()).ok().and_then(Self::from_value)
    }

    #[must_use]
    pub fn from_value(value: i8) -> Option<Self> {
        PRIZE_VALUES.contains(&value).then_some(Self(value))
    }

    /// All five markers in enumeration order.
    pub fn all() -> impl Iterator<Item = PrizeMarker> + Clone {
        PRIZE_VALUES.into_iter().map(PrizeMarker)
    }

    /// Cells that can hold a prize.
    pub fn cells() -> impl Iterator<Item = Cell> {
        Self::all().filter_map(PrizeMarker::cell)
    }

    #[must_use]
    pub fn value(self) -> i8 {
        self.0
    }

    #[must_use]
    pub fn is_present(self) -> bool {
        self != Self::NONE
    }

    #[must_use]
    pub fn cell(self) -> Option<Cell> {
        usize::try_from(self.0).ok().and_then(|i| Cell::new(i).ok())
    }

    /// Position of this marker in [`PrizeMarker::all`].
    #[must_use]
    pub fn slot(self) -> usize {
        PRIZE_VALUES
            .iter()
            .position(|&v| v == self.0)
            .unwrap_or_default()
    }
}

impl fmt::Display for PrizeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `(position, danger_flag, prize_marker)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeState {
    pub position: Cell,
    pub danger: bool,
    pub prize: PrizeMarker,
}

impl CompositeState {
    #[must_use]
    pub fn new(position: Cell, danger: bool, prize: PrizeMarker) -> Self {
        Self { position, danger, prize }
    }

    /// Index in the enumeration order of [`StateSpace`]: position-major,
    /// then danger flag, then prize marker.
    #[must_use]
    pub fn index(&self) -> usize {
        let per_position = DANGER_VALUES.len() * PRIZE_VALUES.len();
        self.position.index() * per_position
            + usize::from(self.danger) * PRIZE_VALUES.len()
            + self.prize.slot()
    }
}

/// Every composite state, enumerated once.
#[derive(Debug, Clone)]
pub struct StateSpace {
    states: Vec<CompositeState>,
}

impl StateSpace {
    #[must_use]
    pub fn new() -> Self {
        let mut states = Vec::with_capacity(STATE_COUNT);
        for position in Cell::all() {
            for danger in DANGER_VALUES {
                for prize in PrizeMarker::all() {
                    states.push(CompositeState::new(position, danger, prize));
                }
            }
        }
        Self { states }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CompositeState> {
        self.states.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompositeState> {
        self.states.iter()
    }
}

impl Default for StateSpace {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifts a bare position into the composite state used for scoring.
///
/// The danger flag is the environment-wide hazard switch; the prize marker
/// is set when the robot stands on one of the configured prize cells.
#[derive(Debug, Clone)]
pub struct StateLift {
    hazard_active: bool,
    prize_cells: Vec<Cell>,
}

impl StateLift {
    #[must_use]
    pub fn new(hazard_active: bool, prize_cells: Vec<Cell>) -> Self {
        Self { hazard_active, prize_cells }
    }

    #[must_use]
    pub fn lift(&self, position: Cell) -> CompositeState {
        let prize = if self.prize_cells.contains(&position) {
            PrizeMarker::at(position).unwrap_or(PrizeMarker::NONE)
        } else {
            PrizeMarker::NONE
        };
        CompositeState::new(position, self.hazard_active, prize)
    }

    #[must_use]
    pub fn prize_cells(&self) -> &[Cell] {
        &self.prize_cells
    }
}
