#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Robot vs. Monster environment
//!
//! A reset/step environment on the 5×5 board from the [`grid`] crate.
//!
//! ## Key Components
//!
//! -   **State space:** [`StateSpace`] enumerates the 250 composite states
//!     (position × danger flag × prize marker) once at construction.
//! -   **Reward:** [`RewardModel`] adds three independent terms: a prize
//!     bonus, a monster penalty and a penalty for bumping into a wall.
//! -   **Episodes:** [`RobotMonsterEnv`] owns the board, the random generator
//!     and the current [`Episode`]. It applies the termination policy after
//!     every step and resets itself when an episode ends.
//! -   **Encoding:** [`StateEncoder`] turns a state into the vector handed to
//!     a learner. Three encoders are provided, selected by [`Encoding`].
//!
//! The environment is driven through the [`Env`] trait:
//!
//! ```rust
//! use rl::{Env, EnvConfig, RobotMonsterEnv};
//! use grid::Cell;
//!
//! let mut config = EnvConfig::new(Cell::new(12).unwrap());
//! config.seed = Some(7);
//! let mut env = RobotMonsterEnv::new(config).unwrap();
//! let obs = env.reset();
//! assert_eq!(obs.len(), env.obs_size());
//! let step = env.step(1).unwrap();
//! assert!(step.reward.is_finite());
//! ```

pub mod action_space;
pub mod config;
pub mod encoder;
pub mod env;
pub mod episode;
pub mod error;
pub mod reward;
pub mod state;

pub use action_space::ActionSpace;
pub use config::{EnvConfig, Encoding};
pub use encoder::{CompositeOneHot, PositionOneHot, StateEncoder};
pub use env::{Env, RobotMonsterEnv, Step};
pub use episode::{Episode, Phase};
pub use error::{ConfigError, EnvError};
pub use reward::RewardModel;
pub use state::{CompositeState, PrizeMarker, StateLift, StateSpace};
