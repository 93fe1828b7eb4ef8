//! The table: single owner of game, wager and pending auto-fill state.

use crate::autofill::{AutoFiller, FillPlan, FillSchedule, ScheduledFill};
use crate::config::TableConfig;
use crate::games::tictactoe::{
    Board, GameController, JumpError, MoveEntry, MoveResult, Outcome, Position, Status,
};
use crate::wager::{Bet, BetChoice, Settlement, Wager, WagerError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// Game, wager and auto-fill state behind one owner.
///
/// Every command that can change the active snapshot re-checks the wager,
/// so a pending bet is settled the first time a decided board is active.
#[derive(Debug)]
pub struct Table {
    game: GameController,
    wager: Wager,
    filler: AutoFiller,
    fills: FillSchedule,
}

impl Table {
    /// Creates a table from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &TableConfig) -> Self {
        let filler = match config.seed() {
            Some(seed) => AutoFiller::new(*seed, config.fill_step()),
            None => AutoFiller::from_random(config.fill_step()),
        };
        info!(seed = filler.seed(), "Creating table");
        Self {
            game: GameController::new(),
            wager: Wager::new(*config.starting_balance(), *config.payout_multiplier()),
            filler,
            fills: FillSchedule::new(),
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────

    /// Plays the current turn at `position`.
    ///
    /// An accepted move cancels any auto-fill still in flight.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, position: Position) -> MoveResult {
        let result = self.game.attempt_move(position);
        if result.is_placed() {
            self.fills.cancel();
            self.observe();
        }
        result
    }

    /// Makes history entry `index` active, cancelling pending auto-fill.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) -> Result<(), JumpError> {
        self.game.jump(index)?;
        self.fills.cancel();
        self.observe();
        Ok(())
    }

    /// Starts over: empty board, no pending bet, auto-fill cancelled.
    ///
    /// The balance is kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.fills.cancel();
        self.game.reset();
        self.wager.clear();
    }

    /// Places a bet on the current game.
    ///
    /// A bet placed while a decided board is active settles immediately.
    #[instrument(skip(self))]
    pub fn place_bet(&mut self, choice: BetChoice, amount: i64) -> Result<(), WagerError> {
        self.wager.place_bet(choice, amount)?;
        self.observe();
        Ok(())
    }

    /// As [`Table::place_bet`] with an unparsed amount.
    #[instrument(skip(self))]
    pub fn place_bet_str(&mut self, choice: BetChoice, raw: &str) -> Result<(), WagerError> {
        self.wager.place_bet_str(choice, raw)?;
        self.observe();
        Ok(())
    }

    /// Shuffles the empty squares of the active board into a fill plan.
    pub fn plan_fill(&mut self) -> FillPlan {
        self.filler.plan(self.game.current_board())
    }

    /// Applies one scheduled fill to the board active *now*.
    ///
    /// Skipped if the square was filled since the plan was made or the
    /// active board is already decided.
    #[instrument(skip(self))]
    pub fn apply_fill(&mut self, fill: ScheduledFill) -> MoveResult {
        let result = self.game.place_mark(*fill.position(), *fill.mark());
        if result.is_placed() {
            self.observe();
        }
        result
    }

    /// Applies a fill spawned under `epoch`, unless that epoch was cancelled.
    fn apply_scheduled(&mut self, epoch: u64, fill: ScheduledFill) -> Option<MoveResult> {
        if !self.fills.is_current(epoch) {
            debug!(epoch, "Dropping fill from a cancelled epoch");
            return None;
        }
        Some(self.apply_fill(fill))
    }

    fn observe(&mut self) -> Option<Settlement> {
        self.wager.settle(self.game.outcome())
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Board of history entry `index`.
    pub fn board(&self, index: usize) -> Option<&Board> {
        self.game.board(index)
    }

    /// Board of the active history entry.
    pub fn current_board(&self) -> &Board {
        self.game.current_board()
    }

    /// Status line of the active snapshot.
    pub fn status(&self) -> Status {
        self.game.status()
    }

    /// Outcome of the active snapshot.
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    /// Move list in history order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.game.move_list()
    }

    /// Index of the active history entry.
    pub fn current_index(&self) -> usize {
        self.game.current_index()
    }

    /// 1-based move number.
    pub fn move_number(&self) -> usize {
        self.game.move_number()
    }

    /// Current points.
    pub fn balance(&self) -> i64 {
        *self.wager.balance()
    }

    /// Bet waiting for the game to be decided.
    pub fn pending_bet(&self) -> Option<Bet> {
        *self.wager.pending()
    }

    /// Most recent settlement.
    pub fn last_settlement(&self) -> Option<Settlement> {
        *self.wager.last_settlement()
    }

    /// Number of auto-fill moves still waiting to fire.
    pub fn pending_fills(&self) -> usize {
        self.fills.pending()
    }

    /// The game controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Serializable snapshot of everything a view needs.
    pub fn view(&self) -> TableView {
        TableView {
            move_number: self.move_number(),
            current_index: self.current_index(),
            status: self.status().to_string(),
            board: *self.current_board(),
            outcome: self.outcome(),
            moves: self.move_list(),
            balance: self.balance(),
            pending_bet: self.pending_bet(),
            last_settlement: self.last_settlement(),
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

/// Read-only rendering of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// 1-based move number.
    pub move_number: usize,
    /// Active history index.
    pub current_index: usize,
    /// Status line.
    pub status: String,
    /// Active board.
    pub board: Board,
    /// Outcome of the active board.
    pub outcome: Outcome,
    /// Move list in history order.
    pub moves: Vec<MoveEntry>,
    /// Current points.
    pub balance: i64,
    /// Open bet, if any.
    pub pending_bet: Option<Bet>,
    /// Most recent settlement, if any.
    pub last_settlement: Option<Settlement>,
}

/// Shared handle to a [`Table`], used by the command loop and timer tasks.
#[derive(Debug, Clone)]
pub struct Session {
    table: Arc<Mutex<Table>>,
}

impl Session {
    /// Wraps a table.
    pub fn new(table: Table) -> Self {
        Self {
            table: Arc::new(Mutex::new(table)),
        }
    }

    /// Creates a session over a fresh table.
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(Table::new(config))
    }

    /// Locks the table for queries and synchronous commands.
    pub async fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().await
    }

    /// Schedules one timer task per empty square of the active board.
    ///
    /// Returns the number of moves scheduled. Must be called from within a
    /// tokio runtime.
    #[instrument(skip(self))]
    pub async fn auto_fill(&self) -> usize {
        let mut table = self.table.lock().await;
        let plan = table.plan_fill();
        let count = plan.len();
        let epoch = table.fills.epoch();

        for fill in plan {
            let session = self.clone();
            table.fills.spawn(*fill.delay(), async move {
                let mut table = session.table.lock().await;
                if let Some(result) = table.apply_scheduled(epoch, fill) {
                    debug!(?result, "Auto-fill move fired");
                }
            });
        }

        info!(count, "Auto-fill scheduled");
        count
    }
}
