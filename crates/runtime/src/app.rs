//! Command handlers.

use anyhow::Result;
use fastrand::Rng;
use grid::Cell;
use rl::{Env, RobotMonsterEnv};

use crate::cli::{Command, RenderArgs, RunArgs};

/// Outcome of one played episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub steps: usize,
    pub total_reward: f32,
    /// Reward of the step that ended the episode.
    pub final_reward: f32,
}

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run_episodes(&args),
        Command::Render(args) => render_board(&args),
    }
}

fn run_episodes(args: &RunArgs) -> Result<()> {
    let config = args.env.to_config()?;
    // the policy gets its own stream so it does not shift the reset draws
    let policy_rng = config.seed.map_or_else(Rng::new, |s| Rng::with_seed(s.wrapping_add(1)));
    let mut env = RobotMonsterEnv::new(config)?;

    tracing::info!(
        "Playing {} episodes, monster at {}, max {} steps",
        args.episodes,
        env.config().monster_position,
        env.config().max_trajectory_length
    );
    let summaries = play(&mut env, &policy_rng, args.episodes)?;
    for (i, s) in summaries.iter().enumerate() {
        tracing::info!(
            "Episode {}: {} steps, return {}, final reward {}",
            i + 1,
            s.steps,
            s.total_reward,
            s.final_reward
        );
    }

    if !summaries.is_empty() {
        // episode counts are small
        #[allow(clippy::cast_precision_loss)]
        let n = summaries.len() as f32;
        let mean_return = summaries.iter().map(|s| s.total_reward).sum::<f32>() / n;
        let prizes = summaries.iter().filter(|s| s.final_reward > 0.0).count();
        tracing::info!(
            "Finished {} episodes: mean return {:.2}, {} ended on a prize",
            summaries.len(),
            mean_return,
            prizes
        );
    }
    Ok(())
}

/// Plays `episodes` episodes with a uniform random policy.
pub fn play<E: Env>(env: &mut E, policy: &Rng, episodes: usize) -> Result<Vec<EpisodeSummary>> {
    let mut summaries = Vec::with_capacity(episodes);
    env.reset();
    for _ in 0..episodes {
        let mut steps = 0;
        let mut total_reward = 0.0;
        loop {
            let action = env.actions().sample(policy);
            let step = env.step(action.index())?;
            steps += 1;
            total_reward += step.reward;
            if step.terminated {
                summaries.push(EpisodeSummary { steps, total_reward, final_reward: step.reward });
                break;
            }
        }
    }
    Ok(summaries)
}

fn render_board(args: &RenderArgs) -> Result<()> {
    let config = args.env.to_config()?;
    let mut env = RobotMonsterEnv::new(config)?;
    if let Some(position) = args.position {
        env.reset_to(Cell::new(position)?);
    }
    let frame = env.render("rgb_array")?;
    print!("{}", frame.to_ascii());
    if let Some(path) = &args.png {
        frame.save_png(path, args.scale)?;
        tracing::info!("Saved frame to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rl::EnvConfig;

    fn env(max_steps: usize) -> RobotMonsterEnv {
        let mut config = EnvConfig::new(Cell::new(12).unwrap());
        config.seed = Some(3);
        config.max_trajectory_length = max_steps;
        RobotMonsterEnv::new(config).unwrap()
    }

    #[test]
    fn play_returns_one_summary_per_episode() {
        let mut env = env(50);
        let summaries = play(&mut env, &Rng::with_seed(4), 25).unwrap();
        assert_eq!(summaries.len(), 25);
        for s in &summaries {
            assert!(s.steps >= 1 && s.steps <= 50);
        }
    }

    #[test]
    fn episodes_end_by_trajectory_limit_or_large_reward() {
        let mut env = env(3);
        let summaries = play(&mut env, &Rng::with_seed(9), 40).unwrap();
        for s in summaries {
            assert!(s.steps == 3 || s.final_reward.abs() > 0.1, "{s:?}");
        }
    }
}
