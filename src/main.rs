use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_demos::config_file::load_or_default;
use grid_demos::life::LifeConfig;
use grid_demos::logging;
use grid_demos::modes::{LifeMode, SnakebirdMode};
use grid_demos::snakebird::SnakebirdConfig;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "grid_demos")]
#[command(version, about = "Game of Life and a Snakebird puzzle in the terminal")]
struct Cli {
    /// Which program to run
    #[arg(long, default_value = "life")]
    mode: Mode,

    /// JSON file with settings for the chosen program
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity when --log-file is set
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Conway's Game of Life
    Life,
    /// Snake puzzle with gravity
    Snakebird,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Life => {
            let mut config: LifeConfig = load_or_default(cli.config.as_deref())?;
            config.width = cli.width.unwrap_or(config.width);
            config.height = cli.height.unwrap_or(config.height);
            config.seed = cli.seed.or(config.seed);
            config.validate().context("Invalid life configuration")?;

            let mut life_mode = LifeMode::new(config);
            life_mode.run().await?;
        }
        Mode::Snakebird => {
            let mut config: SnakebirdConfig = load_or_default(cli.config.as_deref())?;
            config.grid_width = cli.width.unwrap_or(config.grid_width);
            config.grid_height = cli.height.unwrap_or(config.grid_height);
            config.seed = cli.seed.or(config.seed);
            config.validate().context("Invalid snakebird configuration")?;

            let mut snakebird_mode = SnakebirdMode::new(config);
            snakebird_mode.run().await?;
        }
    }

    Ok(())
}
