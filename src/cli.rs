//! Command-line interface for tictactoe_wager.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with time travel, a side bet and an auto-fill button
#[derive(Parser, Debug)]
#[command(name = "tictactoe_wager")]
#[command(about = "Play tic-tac-toe, jump through history and bet on the outcome", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML table configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the auto-fill shuffle (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between auto-fill moves (overrides the config file)
    #[arg(long)]
    pub fill_step_ms: Option<u64>,

    /// Starting points (overrides the config file)
    #[arg(long)]
    pub balance: Option<i64>,
}
