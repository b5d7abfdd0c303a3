//! Tic-tac-toe console game.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_board::RandomSelector;
use tictactoe_console::{Cli, Console, GameConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(?config, "Starting console game");

    let selector = match config.seed() {
        Some(seed) => RandomSelector::seeded(seed.wrapping_add(1)),
        None => RandomSelector::from_entropy(),
    };

    let mut session = Session::new(Console::stdio(), selector, config);
    session.run()?;
    Ok(())
}

/// Builds the config from the optional file and command-line flags.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    Ok(base.with_overrides(cli.first, cli.seed))
}
