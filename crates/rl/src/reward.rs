use grid::Cell;

use crate::CompositeState;

/// Additive reward rule.
///
/// Each term is evaluated independently on the new and previous states:
/// a bonus when a prize is present, a penalty when the robot stands on the
/// monster while the hazard is active, and a penalty when the position did not
/// change.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardModel {
    pub monster_position: Cell,
    pub prize_bonus: f32,
    pub monster_penalty: f32,
    pub bump_penalty: f32,
}

impl RewardModel {
    #[must_use]
    pub fn new(monster_position: Cell) -> Self {
        Self {
            monster_position,
            prize_bonus: 10.0,
            monster_penalty: 10.0,
            bump_penalty: 1.0,
        }
    }

    #[must_use]
    pub fn reward(&self, new: &CompositeState, prev: &CompositeState) -> f32 {
        let mut r = 0.0;
        if new.prize.is_present() {
            r += self.prize_bonus;
        }
        if new.position == self.monster_position && new.danger {
            r -= self.monster_penalty;
        }
        if new.position == prev.position {
            r -= self.bump_penalty;
        }
        r
    }
}
