//! Environment configuration.
//!
//! Loaded from JSON or built in code. `monster_position` has no default and
//! must always be given; every other field falls back to the values below.
//!
//! ```json
//! { "monster_position": 12, "max_trajectory_length": 50, "tolerance": 0.1 }
//! ```

use grid::Cell;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::encoder::{CompositeOneHot, PositionOneHot, StateEncoder};
use crate::{ConfigError, PrizeMarker};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Position one-hot, padded to the 250-state width.
    #[default]
    PositionPadded,
    /// Position one-hot, 25 wide.
    PositionCompact,
    /// Composite-state one-hot, 250 wide.
    Composite,
}

impl Encoding {
    #[must_use]
    pub fn build(self) -> Box<dyn StateEncoder> {
        match self {
            Encoding::PositionPadded => Box::new(PositionOneHot::padded()),
            Encoding::PositionCompact => Box::new(PositionOneHot::compact()),
            Encoding::Composite => Box::new(CompositeOneHot),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvConfig {
    /// Cell the monster occupies.
    pub monster_position: Cell,
    #[serde(default = "default_max_trajectory_length")]
    pub max_trajectory_length: usize,
    /// Episodes end on any reward with magnitude above this.
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
    /// Danger flag of every lifted state.
    #[serde(default = "default_hazard_active")]
    pub hazard_active: bool,
    #[serde(default = "default_prize_cells")]
    pub prize_cells: Vec<Cell>,
    #[serde(default)]
    pub encoding: Encoding,
    /// Seed for the reset draw; `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_trajectory_length() -> usize {
    50
}

fn default_tolerance() -> f32 {
    0.1
}

fn default_hazard_active() -> bool {
    true
}

fn default_prize_cells() -> Vec<Cell> {
    PrizeMarker::cells().collect()
}

impl EnvConfig {
    #[must_use]
    pub fn new(monster_position: Cell) -> Self {
        Self {
            monster_position,
            max_trajectory_length: default_max_trajectory_length(),
            tolerance: default_tolerance(),
            hazard_active: default_hazard_active(),
            prize_cells: default_prize_cells(),
            encoding: Encoding::default(),
            seed: None,
        }
    }

    /// Parses and validates a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input (including an
    /// out-of-range `monster_position`) or any error from [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file without validating it, so callers can patch
    /// fields before calling [`Self::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Json`] if it does not parse.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded environment config from {:?}", path);
        Ok(serde_json::from_str(&json)?)
    }

    /// # Errors
    ///
    /// Returns the first constraint the config violates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.max_trajectory_length == 0 {
            return Err(ConfigError::ZeroTrajectoryLength);
        }
        if let Some(&bad) = self
            .prize_cells
            .iter()
            .find(|&&c| PrizeMarker::at(c).is_none())
        {
            return Err(ConfigError::PrizeCell(bad));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let config = EnvConfig::from_json(r#"{ "monster_position": 12 }"#).unwrap();
        assert_eq!(config, EnvConfig::new(Cell::new(12).unwrap()));
        assert_eq!(config.max_trajectory_length, 50);
        assert!((config.tolerance - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.encoding, Encoding::PositionPadded);
    }

    #[test]
    fn monster_position_is_required() {
        let err = EnvConfig::from_json("{}").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn out_of_range_monster_is_rejected() {
        assert!(EnvConfig::from_json(r#"{ "monster_position": 30 }"#).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(EnvConfig::from_json(r#"{ "monster_position": 1, "monster": 2 }"#).is_err());
    }

    #[test]
    fn encoding_names_are_snake_case() {
        let config =
            EnvConfig::from_json(r#"{ "monster_position": 1, "encoding": "position_compact" }"#)
                .unwrap();
        assert_eq!(config.encoding, Encoding::PositionCompact);
        assert_eq!(config.encoding.build().dim(), 25);
    }

    #[test]
    fn validation_failures() {
        let mut config = EnvConfig::new(Cell::new(12).unwrap());
        config.tolerance = -0.5;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTolerance(_))));

        let mut config = EnvConfig::new(Cell::new(12).unwrap());
        config.max_trajectory_length = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTrajectoryLength)));

        let mut config = EnvConfig::new(Cell::new(12).unwrap());
        config.prize_cells = vec![Cell::new(7).unwrap()];
        assert!(matches!(config.validate(), Err(ConfigError::PrizeCell(c)) if c.index() == 7));
    }

    #[test]
    fn read_file_defers_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.json");
        std::fs::write(&path, r#"{ "monster_position": 3, "tolerance": -1.0 }"#).unwrap();

        let mut config = EnvConfig::read_file(&path).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTolerance(_))));
        assert!(matches!(
            EnvConfig::from_file(&path),
            Err(ConfigError::InvalidTolerance(_))
        ));

        config.tolerance = 0.1;
        assert!(config.validate().is_ok());
    }
}
