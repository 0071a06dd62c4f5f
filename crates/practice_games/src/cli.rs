//! Command-line interface for practice_games.

use clap::Parser;

/// Play tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "practice_games")]
#[command(about = "Terminal tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "practice_games.toml")]
    pub config: std::path::PathBuf,

    /// Computer thinking delay in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random choices (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives log output while the TUI owns the terminal
    #[arg(long, default_value = "practice_games.log")]
    pub log_file: std::path::PathBuf,
}
