//! Observation encoders.
//!
//! The episode controller only tracks the robot's position, so the default
//! encoder one-hots the position inside a vector as wide as the full state
//! space. [`PositionOneHot::compact`] drops the unused tail and
//! [`CompositeOneHot`] encodes the whole composite state instead.

use grid::GRID_SIZE;

use crate::state::STATE_COUNT;
use crate::CompositeState;

pub trait StateEncoder: Send + Sync {
    /// Length of every encoded vector.
    fn dim(&self) -> usize;

    fn encode(&self, state: &CompositeState) -> Vec<f32>;
}

/// One-hot over the position only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOneHot {
    width: usize,
}

impl PositionOneHot {
    /// Width of the full state space; entries past the 25 positions stay zero.
    #[must_use]
    pub fn padded() -> Self {
        Self { width: STATE_COUNT }
    }

    /// One entry per position.
    #[must_use]
    pub fn compact() -> Self {
        Self { width: GRID_SIZE }
    }
}

impl StateEncoder for PositionOneHot {
    fn dim(&self) -> usize {
        self.width
    }

    fn encode(&self, state: &CompositeState) -> Vec<f32> {
        one_hot(self.width, state.position.index())
    }
}

/// One-hot over the composite state index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeOneHot;

impl StateEncoder for CompositeOneHot {
    fn dim(&self) -> usize {
        STATE_COUNT
    }

    fn encode(&self, state: &CompositeState) -> Vec<f32> {
        one_hot(STATE_COUNT, state.index())
    }
}

fn one_hot(width: usize, hot: usize) -> Vec<f32> {
    let mut v = vec![0.0; width];
    v[hot] = 1.0;
    v
}
