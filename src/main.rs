mod app;
mod config;
mod error;
mod game;
mod logging;
mod terminal;

use clap::Parser;
use config::{Cli, GameConfig};
use error::GameError;

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError>
{
    let config = GameConfig::from_cli(Cli::parse())?;
    logging::init(config.log_file.as_deref())?;

    let summary = app::run(&config)?;
    println!("Color Rush");
    println!("  Games played: {}", summary.games_played);
    println!("  Last score:   {}", summary.last_score);
    println!("  Best score:   {}", summary.best_score);
    Ok(())
}
