#![deny(clippy::all, clippy::pedantic)]
//! # Robot-Monster Runtime
//!
//! Entry point for the `robomon` binary.
//!
//! `robomon run` plays episodes with a uniform random policy and logs their
//! returns. `robomon render` prints the board and can write it to a PNG.
//! Logging goes through `tracing`; set `RUST_LOG=debug` to see every reset
//! and termination.

mod app;
mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    app::run(cli.command)
}
