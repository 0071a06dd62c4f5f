//! Practice Games - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use practice_games::{GameSession, tui};
use practice_tictactoe::GameConfig;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let config = load_config(&cli.config, cli.delay_ms, cli.seed)?;
    let session = GameSession::from_config(&config);
    tui::run_tui(session).await
}

/// Logs go to a file so they do not interfere with the TUI.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,practice_games=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Tracing initialized");
    Ok(())
}

#[instrument]
fn load_config(path: &Path, delay_ms: Option<u64>, seed: Option<u64>) -> Result<GameConfig> {
    let mut config = if path.exists() {
        GameConfig::from_file(path)?
    } else {
        info!("Config file not found at {}, using defaults", path.display());
        GameConfig::default()
    };

    if let Some(delay_ms) = delay_ms {
        info!(delay_ms, "Overriding computer delay");
        config = config.with_computer_delay_ms(delay_ms);
    }
    if let Some(seed) = seed {
        info!(seed, "Overriding seed");
        config = config.with_seed(seed);
    }

    Ok(config)
}
