use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use grid::Cell;
use rl::{EnvConfig, Encoding};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "robomon", version, about = "Robot vs. monster grid world")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play episodes with a uniform random policy.
    Run(RunArgs),
    /// Print the board and optionally write it as a PNG.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub env: EnvArgs,
    /// Number of episodes to play.
    #[arg(long, default_value_t = 10)]
    pub episodes: usize,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub env: EnvArgs,
    /// Cell to place the robot on; random when omitted.
    #[arg(long)]
    pub position: Option<usize>,
    /// Write the frame to this PNG file.
    #[arg(long)]
    pub png: Option<PathBuf>,
    /// Pixels per frame cell in the PNG.
    #[arg(long, default_value_t = 16)]
    pub scale: u32,
}

#[derive(Args, Debug)]
pub struct EnvArgs {
    /// JSON environment config. Flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Cell the monster occupies. Required without --config.
    #[arg(long)]
    pub monster: Option<usize>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub max_steps: Option<usize>,
    #[arg(long)]
    pub tolerance: Option<f32>,
    #[arg(long, value_enum)]
    pub encoding: Option<EncodingArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum EncodingArg {
    PositionPadded,
    PositionCompact,
    Composite,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::PositionPadded => Encoding::PositionPadded,
            EncodingArg::PositionCompact => Encoding::PositionCompact,
            EncodingArg::Composite => Encoding::Composite,
        }
    }
}

impl EnvArgs {
    /// Merges the config file (if any) with the command-line overrides and
    /// validates the result.
    pub fn to_config(&self) -> Result<EnvConfig> {
        let mut config = match (&self.config, self.monster) {
            (Some(path), _) => EnvConfig::read_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            (None, Some(monster)) => EnvConfig::new(Cell::new(monster)?),
            (None, None) => bail!("either --config or --monster must be given"),
        };
        if let Some(monster) = self.monster {
            config.monster_position = Cell::new(monster)?;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_steps) = self.max_steps {
            config.max_trajectory_length = max_steps;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(encoding) = self.encoding {
            config.encoding = encoding.into();
        }
        config.validate()?;
        Ok(config)
    }
}
