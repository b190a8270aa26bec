use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use snake_arcade::audio;
use snake_arcade::game::{GameConfig, Session};
use snake_arcade::logging::{self, LogLevel};
use snake_arcade::modes::HumanMode;
use snake_arcade::settings::{self, Overrides};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Classic snake arcade game in the terminal")]
struct Cli {
    /// Rule set to start from
    #[arg(long, value_enum, default_value = "classic")]
    variant: Variant,

    /// YAML file with settings layered over the variant
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Simulation ticks per second
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for fruit placement and spawn directions
    #[arg(long)]
    seed: Option<u64>,

    /// Disable sound effects
    #[arg(long)]
    mute: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, ValueEnum)]
enum Variant {
    /// Walls on the board, edges wrap around, 10 points per fruit
    Classic,
    /// Empty board, edges are deadly, 2 points per fruit
    Simple,
}

impl Variant {
    fn preset(&self) -> GameConfig {
        match self {
            Variant::Classic => GameConfig::classic(),
            Variant::Simple => GameConfig::simple(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logger(path, cli.log_level)?;
    }

    let overrides = Overrides {
        width: cli.width,
        height: cli.height,
        ticks_per_second: cli.fps,
    };
    let config = settings::resolve(cli.variant.preset(), cli.config.as_deref(), &overrides)?;

    let session = match cli.seed {
        Some(seed) => Session::seeded(config, seed),
        None => Session::from_entropy(config),
    }
    .context("Failed to start game session")?;
    info!("Starting snake_arcade (seed: {:?})", cli.seed);

    let mut human_mode = HumanMode::new(session, audio::open_player(cli.mute));
    human_mode.run().await?;

    Ok(())
}
