//! Text rendering for the command-line front end.
//!
//! Nothing here feeds back into game state; the move-list order in
//! particular is a display preference only.

use crate::games::tictactoe::{Board, MoveEntry, Outcome, Position, Square};
use crate::session::TableView;
use tracing::instrument;

/// Order in which the move list is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// Game start first.
    Ascending,
    /// Latest move first.
    #[default]
    Descending,
}

impl ListOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Display state for the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveListView {
    order: ListOrder,
}

impl MoveListView {
    /// Creates a view with the default (latest first) order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current order.
    pub fn order(&self) -> ListOrder {
        self.order
    }

    /// Flips between ascending and descending.
    #[instrument(skip(self))]
    pub fn toggle_list_order(&mut self) {
        self.order = self.order.toggle();
    }

    /// Returns `entries` in display order.
    pub fn arrange(&self, mut entries: Vec<MoveEntry>) -> Vec<MoveEntry> {
        if self.order == ListOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Renders the move list, marking the active entry with `>`.
    pub fn render(&self, entries: Vec<MoveEntry>, current: usize) -> String {
        self.arrange(entries)
            .iter()
            .map(|entry| {
                let marker = if *entry.index() == current { '>' } else { ' ' };
                format!("{} {:>2}. {}", marker, entry.index(), entry.description())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders a board, bracketing the squares of a winning line.
pub fn render_board(board: &Board, outcome: &Outcome) -> String {
    let line: Vec<Position> = outcome.line().map(|l| l.to_vec()).unwrap_or_default();
    let cell = |pos: Position| {
        let symbol = match board.get(pos) {
            Square::Empty => pos.to_index().to_string(),
            Square::Occupied(player) => player.to_string(),
        };
        if line.contains(&pos) {
            format!("[{}]", symbol)
        } else {
            format!(" {} ", symbol)
        }
    };

    Position::ALL
        .chunks(3)
        .map(|row| row.iter().map(|&pos| cell(pos)).collect::<Vec<_>>().join("|"))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Renders the full table: move number, status, board, points and moves.
pub fn render_table(view: &TableView, moves: &MoveListView) -> String {
    let mut out = format!(
        "Move Number: {}\n{}\n{}\nPoints Available: {}",
        view.move_number,
        view.status,
        render_board(&view.board, &view.outcome),
        view.balance
    );
    if let Some(bet) = &view.pending_bet {
        out.push_str(&format!("\nPending bet: {}", bet));
    }
    if let Some(settlement) = &view.last_settlement {
        let verdict = if *settlement.won() { "won" } else { "lost" };
        out.push_str(&format!(
            "\nLast bet ({}) {}: +{}",
            settlement.bet(),
            verdict,
            settlement.payout()
        ));
    }
    out.push('\n');
    out.push_str(&moves.render(view.moves.clone(), view.current_index));
    out
}
