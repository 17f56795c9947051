mod config;
mod driver;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use slam_engine::engine::Game;

use config::{Config, GameConfig};
use driver::Outcome;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play a 2048-style slam game in the terminal (h/j/k/l, q)")]
struct Cli {
    /// Optional TOML file with a [game] table; flags below override it
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long, allow_negative_numbers = true)]
    width: Option<isize>,

    /// Board height in cells
    #[arg(long, allow_negative_numbers = true)]
    height: Option<isize>,

    /// Tile value that wins the game
    #[arg(long)]
    goal: Option<i64>,

    /// Tile value spawned each turn
    #[arg(long)]
    spawn: Option<i64>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. "info", "debug" (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    log: String,
}

impl Cli {
    fn resolve(&self) -> Result<GameConfig> {
        let mut game = match &self.config {
            Some(path) => Config::from_toml(path)?.game,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            game.width = width;
        }
        if let Some(height) = self.height {
            game.height = height;
        }
        if let Some(goal) = self.goal {
            game.goal = goal;
        }
        if let Some(spawn) = self.spawn {
            game.spawn_value = spawn;
        }
        if self.seed.is_some() {
            game.seed = self.seed;
        }
        Ok(game)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log.as_str())).init();

    let cfg = cli.resolve()?;
    info!("Using game settings: {cfg:?}");
    let mut game = match cfg.seed {
        Some(seed) => Game::seeded(cfg.width, cfg.height, cfg.goal, cfg.spawn_value, seed)?,
        None => Game::new(cfg.width, cfg.height, cfg.goal, cfg.spawn_value)?,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match driver::play(&mut game, stdin.lock(), &mut stdout)? {
        Outcome::Won => println!("You won! Yay!"),
        Outcome::Lost => println!("Game over! Best tile: {}", game.best_value()),
        Outcome::Quit => {}
    }
    Ok(())
}
