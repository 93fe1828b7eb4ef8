//! Tic-tac-toe rules, snapshot history and the game controller.

mod action;
mod contracts;
mod game;
mod history;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, MoveRejection, MoveResult};
pub use contracts::{Contract, GameUndecided, LegalMove, MoveContract, SquareIsEmpty};
pub use game::{GameController, Status};
pub use history::{History, JumpError, MoveEntry, Snapshot, describe};
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, Player, Square};
