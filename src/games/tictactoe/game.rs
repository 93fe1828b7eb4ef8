//! Game controller: turn alternation, move validation and time travel.

use super::action::{Move, MoveResult};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::history::{History, JumpError, MoveEntry, Snapshot};
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status line derived from the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The active snapshot has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nine moves have been played without a winner.
    #[display("Draw")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Tic-tac-toe engine over a snapshot history.
///
/// The turn is never stored: X plays when the active index is even,
/// O when it is odd.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameController {
    history: History,
}

impl GameController {
    /// Creates a controller at game start.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Plays the current turn's mark at `position`.
    ///
    /// Ignored without any state change when the active snapshot is decided
    /// or the square is taken. Playing from an earlier snapshot discards the
    /// later ones.
    #[instrument(skip(self), fields(current = self.history.current_index()))]
    pub fn attempt_move(&mut self, position: Position) -> MoveResult {
        let action = Move::new(self.to_move(), position);
        if let Err(rejection) = MoveContract::pre(&self.history, &action) {
            debug!(%rejection, "Move ignored");
            return MoveResult::Ignored(rejection);
        }
        self.commit(action)
    }

    /// Writes `player` at `position` regardless of turn.
    ///
    /// Used by the auto-filler, whose marks follow shuffle order rather than
    /// turn order. A decided board takes no further marks.
    #[instrument(skip(self), fields(current = self.history.current_index()))]
    pub fn place_mark(&mut self, position: Position, player: Player) -> MoveResult {
        let action = Move::new(player, position);
        if let Err(rejection) = LegalMove::check(&action, &self.history) {
            debug!(%rejection, "Mark skipped");
            return MoveResult::Ignored(rejection);
        }
        self.commit(action)
    }

    fn commit(&mut self, action: Move) -> MoveResult {
        #[cfg(debug_assertions)]
        let before = self.history.clone();

        let board = self
            .history
            .current()
            .board()
            .with_mark(action.position, action.player);
        self.history
            .append(self.history.current_index(), Snapshot::new(board, Some(action.position)));

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, &self.history) {
            panic!("{}", e);
        }

        info!(
            player = %action.player,
            position = %action.position,
            move_index = self.history.current_index(),
            "Move placed"
        );
        MoveResult::Placed(action)
    }

    /// Makes snapshot `index` active.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) -> Result<(), JumpError> {
        self.history.jump(index)
    }

    /// Returns to the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Game reset");
        self.history.reset();
    }

    /// Player whose turn it is at the active snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_move_index(self.history.current_index())
    }

    /// Board of snapshot `index`.
    pub fn board(&self, index: usize) -> Option<&Board> {
        self.history.snapshot(index).map(Snapshot::board)
    }

    /// Board of the active snapshot.
    pub fn current_board(&self) -> &Board {
        self.history.current().board()
    }

    /// Outcome of the active snapshot.
    pub fn outcome(&self) -> Outcome {
        self.history.current().outcome()
    }

    /// Status line for the active snapshot.
    ///
    /// The draw check is move-count based; on a 3x3 board it agrees with
    /// [`Outcome::Draw`] for every reachable history.
    pub fn status(&self) -> Status {
        if let Some(winner) = self.outcome().winner() {
            Status::Winner(winner)
        } else if self.history.current_index() == 9 {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move())
        }
    }

    /// 1-based move number shown to the player.
    pub fn move_number(&self) -> usize {
        self.history.current_index() + 1
    }

    /// Index of the active snapshot.
    pub fn current_index(&self) -> usize {
        self.history.current_index()
    }

    /// Move list in history order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.history.move_list()
    }

    /// The underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }
}
