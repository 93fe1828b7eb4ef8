//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::{History, Square};
use super::Invariant;

/// Invariant: `history[i]` differs from `history[i-1]` in exactly one cell.
///
/// That cell is the snapshot's origin, it was empty before and is
/// occupied after. Squares are therefore never overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<History> for SingleCellDeltaInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(origin) = *pair[1].origin() else {
                return false;
            };

            let changed: Vec<_> = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(index, _)| index)
                .collect();

            changed == [origin.to_index()]
                && before.get(origin) == Square::Empty
                && after.get(origin) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square at its origin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameController, Player, Position, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameController::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ] {
            game.attempt_move(pos);
        }
        assert!(SingleCellDeltaInvariant::holds(game.history()));
    }

    #[test]
    fn test_wrong_origin_violates() {
        let mut history = History::new();
        let board = history.current().board().with_mark(Position::Center, Player::X);
        history.append(0, Snapshot::new(board, Some(Position::TopLeft)));
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_missing_origin_violates() {
        let mut history = History::new();
        let board = history.current().board().with_mark(Position::Center, Player::X);
        history.append(0, Snapshot::new(board, None));
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut history = History::new();
        let board = history.current().board().with_mark(Position::Center, Player::X);
        history.append(0, Snapshot::new(board, Some(Position::Center)));
        let overwritten = board.with_mark(Position::Center, Player::O);
        history.append(1, Snapshot::new(overwritten, Some(Position::Center)));
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }
}
