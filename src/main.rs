//! Tictactoe Wager - interactive command-line table
//!
//! Reads one command per line from stdin and prints the table after each.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_wager::{
    Command, HELP, MoveListView, MoveResult, Session, TableConfig, render_table,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the table on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(?config, "Starting table");

    run_repl(Session::from_config(&config)).await
}

/// Loads the config file, if any, and applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<TableConfig> {
    let mut config = match &cli.config {
        Some(path) => TableConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => TableConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = cli.fill_step_ms {
        config = config.with_fill_step_ms(ms);
    }
    if let Some(balance) = cli.balance {
        config = config.with_starting_balance(balance);
    }
    Ok(config)
}

/// Runs the command loop until `quit` or end of input.
async fn run_repl(session: Session) -> Result<()> {
    let mut moves = MoveListView::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", HELP);
    println!("{}", render_table(&session.lock().await.view(), &moves));

    while let Some(line) = lines.next_line().await.context("Reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        debug!(?command, "Command received");

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Flip => moves.toggle_list_order(),
            Command::Fill => {
                let count = session.auto_fill().await;
                println!("Auto-filling {} square(s); type \"board\" to watch.", count);
            }
            Command::Play(position) => {
                if let MoveResult::Ignored(reason) = session.lock().await.attempt_move(position) {
                    println!("Move ignored: {}", reason);
                }
            }
            Command::Jump(index) => {
                if let Err(e) = session.lock().await.jump(index) {
                    println!("{}", e);
                }
            }
            Command::Reset => session.lock().await.reset_game(),
            Command::Bet(choice, amount) => {
                if let Err(e) = session.lock().await.place_bet_str(choice, &amount) {
                    warn!(%e, "Bet rejected");
                    println!("{}", e);
                }
            }
            Command::Moves => {
                let table = session.lock().await;
                println!("{}", moves.render(table.move_list(), table.current_index()));
                continue;
            }
            Command::State => {
                let view = session.lock().await.view();
                println!("{}", serde_json::to_string_pretty(&view)?);
                continue;
            }
            Command::Board => {}
        }

        println!("{}", render_table(&session.lock().await.view(), &moves));
    }

    info!("Leaving table");
    Ok(())
}
