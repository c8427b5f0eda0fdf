use grid::Cell;
use render::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("unknown action {0}, expected one of 0 (north), 1 (east), 2 (west), 3 (south)")]
    InvalidAction(i64),
    #[error("unknown render mode: {0}")]
    UnsupportedMode(String),
    #[error("render failed: {0}")]
    Render(#[source] RenderError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl From<RenderError> for EnvError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::UnsupportedMode(mode) => EnvError::UnsupportedMode(mode),
            other => EnvError::Render(other),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tolerance must be a finite, non-negative number, got {0}")]
    InvalidTolerance(f32),
    #[error("max_trajectory_length must be at least 1")]
    ZeroTrajectoryLength,
    #[error("cell {0} cannot hold a prize, prize cells are 0, 4, 20 and 24")]
    PrizeCell(Cell),
}
