//! End-to-end table scenarios: play, time travel, reset and wagering.

use tictactoe_wager::{
    BetChoice, MoveRejection, MoveResult, Outcome, Player, Position, Status, Table, TableConfig,
    WagerError, render_board,
};

fn table() -> Table {
    Table::new(&TableConfig::default().with_seed(7))
}

fn play(table: &mut Table, indices: &[usize]) {
    for &i in indices {
        let pos = Position::from_index(i).unwrap();
        assert!(table.attempt_move(pos).is_placed(), "move at {} rejected", i);
    }
}

#[test]
fn test_top_row_win() {
    let mut table = table();
    play(&mut table, &[0, 4, 1, 5, 2]);
    assert_eq!(table.status().to_string(), "Winner: X");
    assert_eq!(
        table.outcome().line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    let text = render_board(table.current_board(), &table.outcome());
    assert!(text.starts_with("[X]|[X]|[X]"));
}

#[test]
fn test_full_board_draw() {
    let mut table = table();
    play(&mut table, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(table.status(), Status::Draw);
    assert_eq!(table.outcome(), Outcome::Draw);
    assert_eq!(table.move_number(), 10);
}

#[test]
fn test_occupied_square_changes_nothing() {
    let mut table = table();
    play(&mut table, &[4]);
    let before = table.view();
    assert_eq!(
        table.attempt_move(Position::Center),
        MoveResult::Ignored(MoveRejection::SquareOccupied(Position::Center))
    );
    assert_eq!(table.view(), before);
}

#[test]
fn test_move_after_win_changes_nothing() {
    let mut table = table();
    play(&mut table, &[0, 4, 1, 5, 2]);
    let before = table.view();
    assert_eq!(
        table.attempt_move(Position::BottomRight),
        MoveResult::Ignored(MoveRejection::GameDecided)
    );
    assert_eq!(table.view(), before);
}

#[test]
fn test_move_from_past_truncates_future() {
    let mut table = table();
    play(&mut table, &[0, 4, 8]);
    table.jump(1).unwrap();
    assert_eq!(table.status(), Status::NextPlayer(Player::O));

    play(&mut table, &[2]);
    let moves = table.move_list();
    assert_eq!(moves.len(), 3);
    assert_eq!(moves[2].description(), "Go to move #2 at (1, 3)");
    assert!(table.board(3).is_none());
}

#[test]
fn test_jump_shows_historical_board() {
    let mut table = table();
    play(&mut table, &[0, 4, 8]);
    table.jump(2).unwrap();
    assert_eq!(table.current_index(), 2);
    assert!(table.current_board().is_empty(Position::BottomRight));
    assert_eq!(table.move_list().len(), 4);
    assert!(table.jump(4).is_err());
    assert_eq!(table.current_index(), 2);
}

#[test]
fn test_reset_then_jump_zero_is_stable() {
    let mut table = table();
    play(&mut table, &[0, 4, 8]);
    table.reset_game();
    for _ in 0..3 {
        table.jump(0).unwrap();
        assert_eq!(table.move_list().len(), 1);
        assert_eq!(table.move_list()[0].description(), "Go to game start");
        assert_eq!(table.status(), Status::NextPlayer(Player::X));
    }
}

#[test]
fn test_winning_bet_pays_double() {
    let mut table = table();
    table.place_bet(BetChoice::X, 20).unwrap();
    assert_eq!(table.balance(), 80);
    play(&mut table, &[0, 4, 1, 5, 2]);
    assert_eq!(table.balance(), 120);
}

#[test]
fn test_losing_bet_keeps_deduction() {
    let mut table = table();
    table.place_bet(BetChoice::O, 20).unwrap();
    play(&mut table, &[0, 4, 1, 5, 2]);
    assert_eq!(table.balance(), 80);
    assert!(!*table.last_settlement().unwrap().won());
}

#[test]
fn test_non_positive_and_garbage_bets_rejected() {
    let mut table = table();
    assert_eq!(
        table.place_bet_str(BetChoice::X, "-5"),
        Err(WagerError::NonPositiveAmount(-5))
    );
    assert!(matches!(
        table.place_bet_str(BetChoice::X, "ten"),
        Err(WagerError::NotANumber(_))
    ));
    assert_eq!(table.balance(), 100);
    assert!(table.pending_bet().is_none());
}

#[test]
fn test_second_bet_while_pending_rejected() {
    let mut table = table();
    table.place_bet(BetChoice::X, 10).unwrap();
    assert!(matches!(
        table.place_bet(BetChoice::O, 10),
        Err(WagerError::BetAlreadyPending(_))
    ));
    assert_eq!(table.balance(), 90);
}

#[test]
fn test_state_serializes_to_json() {
    let mut table = table();
    play(&mut table, &[4]);
    let json = serde_json::to_value(table.view()).unwrap();
    assert_eq!(json["move_number"], 2);
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["balance"], 100);
}
