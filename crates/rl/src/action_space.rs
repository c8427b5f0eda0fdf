use grid::Action;

/// The discrete actions an environment accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpace {
    actions: Vec<Action>,
}

impl ActionSpace {
    #[must_use]
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Number of actions.
    #[must_use]
    pub fn n(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn contains(&self, raw: i64) -> bool {
        self.actions.iter().any(|a| a.index() == raw)
    }

    /// Draws an action uniformly.
    ///
    /// # Panics
    ///
    /// Panics if the space is empty.
    #[must_use]
    pub fn sample(&self, rng: &fastrand::Rng) -> Action {
        self.actions[rng.usize(..self.actions.len())]
    }
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self::new(Action::ALL.to_vec())
    }
}
