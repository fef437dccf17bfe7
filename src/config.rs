use crate::error::GameError;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_START_DURATION: u32 = 10;
const MAX_START_DURATION: u32 = 600;
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Click every cell of the target color before the countdown runs out.
#[derive(Parser, Debug)]
#[command(name = "color-rush", version, about)]
pub struct Cli
{
    /// Countdown of the first round, in seconds.
    #[arg(long, default_value_t = DEFAULT_START_DURATION)]
    pub duration: u32,

    /// Seed for grid and target generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default info).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct GameConfig
{
    pub start_duration: u32,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl GameConfig
{
    pub fn from_cli(cli: Cli) -> Result<Self, GameError>
    {
        if cli.duration == 0 || cli.duration > MAX_START_DURATION {
            return Err(GameError::InvalidConfig(format!(
                "--duration must be between 1 and {MAX_START_DURATION} seconds, got {}",
                cli.duration
            )));
        }

        Ok(Self {
            start_duration: cli.duration,
            tick_interval: TICK_INTERVAL,
            seed: cli.seed,
            log_file: cli.log_file,
        })
    }

    pub fn rng(&self) -> StdRng
    {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for GameConfig
{
    fn default() -> Self
    {
        Self {
            start_duration: DEFAULT_START_DURATION,
            tick_interval: TICK_INTERVAL,
            seed: None,
            log_file: None,
        }
    }
}
