//! Tictactoe Wager library - tic-tac-toe with time travel and a side bet
//!
//! A two-player game on one board with a full snapshot history, a points
//! wager settled when the game is decided, and a timer-driven auto-fill.
//!
//! # Architecture
//!
//! - **Games**: Board, win/draw rules, move validation and history
//! - **Wager**: Points balance, one pending bet, settlement
//! - **Autofill**: Shuffled fill plans and cancellable timer tasks
//! - **Session**: The [`Table`] owning all of the above, shared as a [`Session`]
//! - **View**: Text rendering of the table and move list
//!
//! # Example
//!
//! ```
//! use tictactoe_wager::{BetChoice, Position, Table, TableConfig};
//!
//! let mut table = Table::new(&TableConfig::default().with_seed(1));
//! table.place_bet(BetChoice::X, 20).unwrap();
//! for i in [0, 4, 1, 5, 2] {
//!     table.attempt_move(Position::from_index(i).unwrap());
//! }
//! assert_eq!(table.balance(), 120);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod autofill;
mod command;
mod config;
mod games;
mod session;
mod view;
mod wager;

// Crate-level exports - Configuration
pub use config::{ConfigError, TableConfig};

// Crate-level exports - Prompt commands
pub use command::{Command, CommandError, HELP};

// Crate-level exports - Table and shared session
pub use session::{Session, Table, TableView};

// Crate-level exports - Wager
pub use wager::{
    Bet, BetChoice, DEFAULT_BALANCE, DEFAULT_PAYOUT_MULTIPLIER, Settlement, Wager, WagerError,
};

// Crate-level exports - Auto-fill
pub use autofill::{AutoFiller, DEFAULT_FILL_STEP, FillPlan, FillSchedule, ScheduledFill};

// Crate-level exports - Rendering
pub use view::{ListOrder, MoveListView, render_board, render_table};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Contract, GameController, GameUndecided, History, JumpError, LegalMove, Move,
    MoveContract, MoveEntry, MoveError, MoveRejection, MoveResult, Outcome, Player, Position,
    Snapshot, SquareIsEmpty, Square, Status, describe, invariants, rules,
};
