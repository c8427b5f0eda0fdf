use grid::Cell;

/// Where an episode is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly reset, no step taken yet.
    JustReset,
    /// At least one step taken since the last reset.
    Active,
}

/// Mutable per-episode state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    position: Cell,
    step_count: usize,
    phase: Phase,
}

impl Episode {
    #[must_use]
    pub fn start(position: Cell) -> Self {
        Self { position, step_count: 0, phase: Phase::JustReset }
    }

    /// Commits one step.
    pub fn advance(&mut self, next: Cell) {
        self.position = next;
        self.step_count += 1;
        self.phase = Phase::Active;
    }

    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_and_activates() {
        let mut ep = Episode::start(Cell::new(3).unwrap());
        assert_eq!(ep.phase(), Phase::JustReset);
        ep.advance(Cell::new(4).unwrap());
        ep.advance(Cell::new(4).unwrap());
        assert_eq!(ep.step_count(), 2);
        assert_eq!(ep.phase(), Phase::Active);
        assert_eq!(ep.position().index(), 4);
    }
}
