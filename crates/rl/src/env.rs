use fastrand::Rng;
use grid::{Adjacency, Cell};
use render::{Frame, MazeRenderer};
use tracing::{debug, trace};

use crate::{
    ActionSpace, CompositeState, EnvConfig, EnvError, Episode, Phase, RewardModel,
    StateEncoder, StateLift, StateSpace,
};

/// Result of a single [`Env::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Encoded state after the step. When the step ended the episode this is
    /// the state the environment was reset to.
    pub observation: Vec<f32>,
    pub reward: f32,
    pub terminated: bool,
    /// Always empty.
    pub info: String,
}

/// Reinforcement learning environment trait.
///
/// Each call to [`step`] advances the environment by one action and returns
/// the new observation, a reward signal, and whether the episode ended.
///
/// [`step`]: Env::step
pub trait Env {
    /// Start a new episode and return its initial observation.
    fn reset(&mut self) -> Vec<f32>;

    /// The actions [`step`](Env::step) accepts.
    fn actions(&self) -> &ActionSpace;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] if `action` is outside the action
    /// space. The environment is left untouched in that case.
    fn step(&mut self, action: i64) -> Result<Step, EnvError>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize {
        self.actions().n()
    }
}

/// The robot-vs-monster board.
///
/// Owns the topology, the state space, the random generator used for resets
/// and the current episode. A new instance starts with a freshly reset
/// episode.
pub struct RobotMonsterEnv {
    config: EnvConfig,
    table: Adjacency,
    cells: Vec<Cell>,
    space: StateSpace,
    lift: StateLift,
    reward_model: RewardModel,
    encoder: Box<dyn StateEncoder>,
    renderer: MazeRenderer,
    action_space: ActionSpace,
    rng: Rng,
    episode: Episode,
}

impl RobotMonsterEnv {
    /// Builds an environment seeded from `config.seed`, or from the OS when
    /// no seed is set.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Config`] if `config` is inconsistent.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        let rng = config.seed.map_or_else(Rng::new, Rng::with_seed);
        Self::with_rng(config, rng)
    }

    /// Builds an environment that draws resets from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Config`] if `config` is inconsistent.
    pub fn with_rng(config: EnvConfig, rng: Rng) -> Result<Self, EnvError> {
        config.validate()?;
        let table = Adjacency::standard();
        let cells: Vec<Cell> = table.cells().collect();
        let lift = StateLift::new(config.hazard_active, config.prize_cells.clone());
        let renderer = MazeRenderer::new(&table, lift.prize_cells(), config.monster_position);
        let start = cells[rng.usize(..cells.len())];
        let env = Self {
            table,
            cells,
            space: StateSpace::new(),
            lift,
            reward_model: RewardModel::new(config.monster_position),
            encoder: config.encoding.build(),
            renderer,
            action_space: ActionSpace::default(),
            rng,
            episode: Episode::start(start),
            config,
        };
        debug!(
            "Created environment: monster at {}, {} states, starting at {}",
            env.config.monster_position,
            env.space.len(),
            start
        );
        Ok(env)
    }

    /// Starts a new episode at a chosen cell instead of a random one.
    pub fn reset_to(&mut self, position: Cell) -> Vec<f32> {
        self.episode = Episode::start(position);
        debug!("Episode reset to {}", position);
        self.observation()
    }

    /// Returns a 17×17 snapshot of the board with the robot on it.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UnsupportedMode`] for any mode other than
    /// `"rgb_array"`.
    pub fn render(&self, mode: &str) -> Result<Frame, EnvError> {
        Ok(self.renderer.render(mode, self.episode.position())?)
    }

    #[must_use]
    pub fn position(&self) -> Cell {
        self.episode.position()
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.episode.step_count()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.episode.phase()
    }

    /// Composite state of the current position.
    #[must_use]
    pub fn composite(&self) -> CompositeState {
        self.lift.lift(self.episode.position())
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn adjacency(&self) -> &Adjacency {
        &self.table
    }

    #[must_use]
    pub fn state_space(&self) -> &StateSpace {
        &self.space
    }

    #[must_use]
    pub fn reward_model(&self) -> &RewardModel {
        &self.reward_model
    }

    fn observation(&self) -> Vec<f32> {
        self.encoder.encode(&self.composite())
    }
}

impl Env for RobotMonsterEnv {
    fn reset(&mut self) -> Vec<f32> {
        let start = self.cells[self.rng.usize(..self.cells.len())];
        self.reset_to(start)
    }

    fn actions(&self) -> &ActionSpace {
        &self.action_space
    }

    fn step(&mut self, action: i64) -> Result<Step, EnvError> {
        let current = self.episode.position();
        let next = grid::transition_raw(&self.table, current, action)
            .map_err(|_| EnvError::InvalidAction(action))?;
        let reward = self
            .reward_model
            .reward(&self.lift.lift(next), &self.lift.lift(current));
        self.episode.advance(next);
        trace!("Step {}: {} -> {} reward {}", self.episode.step_count(), current, next, reward);

        let large_reward = reward.abs() > self.config.tolerance;
        let out_of_steps = self.episode.step_count() == self.config.max_trajectory_length;
        if large_reward || out_of_steps {
            debug!(
                "Episode ended after {} steps at {} (reward {})",
                self.episode.step_count(),
                next,
                reward
            );
            self.reset();
        }

        Ok(Step {
            observation: self.observation(),
            reward,
            terminated: self.episode.phase() == Phase::JustReset,
            info: String::new(),
        })
    }

    fn obs_size(&self) -> usize {
        self.encoder.dim()
    }
}
