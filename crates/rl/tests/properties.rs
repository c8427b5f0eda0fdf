use grid::{Adjacency, Cell};
use proptest::prelude::*;
use rl::{CompositeState, Env, EnvConfig, PrizeMarker, RewardModel, RobotMonsterEnv};

fn env(seed: u64, monster: usize) -> RobotMonsterEnv {
    let mut config = EnvConfig::new(Cell::new(monster).unwrap());
    config.seed = Some(seed);
    RobotMonsterEnv::new(config).unwrap()
}

fn composite() -> impl Strategy<Value = CompositeState> {
    (0usize..25, any::<bool>(), prop::sample::select(vec![-1i8, 0, 4, 20, 24])).prop_map(
        |(p, danger, prize)| {
            CompositeState::new(
                Cell::new(p).unwrap(),
                danger,
                PrizeMarker::from_value(prize).unwrap(),
            )
        },
    )
}

proptest! {
    #[test]
    fn steps_only_move_to_neighbors_or_reset(
        seed in any::<u64>(),
        monster in 0usize..25,
        actions in proptest::collection::vec(-2i64..6, 1..300),
    ) {
        let mut env = env(seed, monster);
        let table = Adjacency::standard();
        let max = env.config().max_trajectory_length;
        for action in actions {
            let before = env.position();
            let count = env.step_count();
            match env.step(action) {
                Ok(step) => {
                    prop_assert_eq!(step.observation.len(), env.obs_size());
                    prop_assert_eq!(step.observation.iter().sum::<f32>(), 1.0);
                    if step.terminated {
                        prop_assert_eq!(env.step_count(), 0);
                    } else {
                        let after = env.position();
                        prop_assert!(table.is_adjacent(before, after));
                        prop_assert_eq!(env.step_count(), count + 1);
                        prop_assert!(env.step_count() < max);
                        prop_assert!(step.reward.abs() <= env.config().tolerance);
                    }
                }
                Err(_) => {
                    prop_assert!(!(0..4).contains(&action));
                    prop_assert_eq!(env.position(), before);
                    prop_assert_eq!(env.step_count(), count);
                }
            }
        }
    }

    #[test]
    fn reward_is_deterministic(new in composite(), prev in composite(), monster in 0usize..25) {
        let model = RewardModel::new(Cell::new(monster).unwrap());
        let first = model.reward(&new, &prev);
        prop_assert_eq!(first, model.reward(&new, &prev));
        prop_assert!([-11.0, -10.0, -1.0, 0.0, 9.0, 10.0].contains(&first));
    }
}
