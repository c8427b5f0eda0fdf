use criterion::{criterion_group, criterion_main, Criterion};
use grid::Cell;
use rl::{Env, EnvConfig, RobotMonsterEnv};

fn bench_step(c: &mut Criterion) {
    let mut config = EnvConfig::new(Cell::new(12).unwrap());
    config.seed = Some(0);
    let mut env = RobotMonsterEnv::new(config).unwrap();
    let rng = fastrand::Rng::with_seed(1);
    c.bench_function("random_policy_step", |b| {
        b.iter(|| {
            let action = env.actions().sample(&rng);
            env.step(action.index()).unwrap()
        });
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut config = EnvConfig::new(Cell::new(12).unwrap());
    config.seed = Some(0);
    let mut env = RobotMonsterEnv::new(config).unwrap();
    c.bench_function("reset", |b| b.iter(|| env.reset()));
}

criterion_group!(benches, bench_step, bench_reset);
criterion_main!(benches);
