//! Tests for move contracts and history invariants.

use tictactoe_wager::invariants::{
    CursorInBoundsInvariant, Invariant, SingleCellDeltaInvariant, StartsEmptyInvariant,
};
use tictactoe_wager::{
    Board, Contract, GameController, History, Move, MoveContract, MoveRejection, MoveResult,
    Player, Position, Snapshot, rules,
};

fn history_of(moves: &[Position]) -> History {
    let mut history = History::new();
    for (i, &pos) in moves.iter().enumerate() {
        let board = history
            .current()
            .board()
            .with_mark(pos, Player::for_move_index(i));
        history.append(history.current_index(), Snapshot::new(board, Some(pos)));
    }
    history
}

#[test]
fn test_legal_move_passes_precondition() {
    let history = History::new();
    let action = Move::new(Player::X, Position::Center);
    assert!(MoveContract::pre(&history, &action).is_ok());
}

#[test]
fn test_occupied_square_fails_precondition() {
    let history = history_of(&[Position::Center]);
    let action = Move::new(Player::O, Position::Center);
    let err = MoveContract::pre(&history, &action).unwrap_err();
    assert_eq!(err, MoveRejection::SquareOccupied(Position::Center));
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_decided_game_fails_precondition() {
    let history = history_of(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ]);
    assert_eq!(
        rules::check_winner(history.current().board()),
        Some(Player::X)
    );
    let action = Move::new(Player::O, Position::BottomRight);
    assert_eq!(
        MoveContract::pre(&history, &action),
        Err(MoveRejection::GameDecided)
    );
}

#[test]
fn test_postcondition_after_real_moves() {
    let before = History::new();
    let after = history_of(&[Position::Center, Position::TopLeft, Position::BottomRight]);
    assert!(MoveContract::post(&before, &after).is_ok());
}

#[test]
fn test_invariants_hold_across_jumps_and_truncation() {
    let mut game = GameController::new();
    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        assert!(game.attempt_move(pos).is_placed());
    }
    game.jump(1).unwrap();
    assert!(matches!(
        game.attempt_move(Position::TopRight),
        MoveResult::Placed(_)
    ));

    let history = game.history();
    assert!(StartsEmptyInvariant::holds(history));
    assert!(SingleCellDeltaInvariant::holds(history));
    assert!(CursorInBoundsInvariant::holds(history));
}

#[test]
fn test_single_cell_delta_detects_mismatched_origin() {
    let board = Board::new().with_mark(Position::Center, Player::X);
    let mut history = History::new();
    history.append(0, Snapshot::new(board, Some(Position::Center)));
    assert!(StartsEmptyInvariant::holds(&history));

    // A snapshot whose recorded origin does not match the changed square.
    let bad = history
        .current()
        .board()
        .with_mark(Position::TopLeft, Player::O);
    history.append(1, Snapshot::new(bad, Some(Position::BottomRight)));
    assert!(!SingleCellDeltaInvariant::holds(&history));
}
