//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError, MoveRejection};
use super::history::History;
use super::invariants::{HistoryInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the target square of the active snapshot.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveRejection> {
        if history.current().board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: The active snapshot must not be won or drawn.
pub struct GameUndecided;

impl GameUndecided {
    /// Evaluates the active snapshot.
    #[instrument(skip(history))]
    pub fn check(history: &History) -> Result<(), MoveRejection> {
        if history.current().outcome().is_decided() {
            Err(MoveRejection::GameDecided)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is undecided and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a player move.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveRejection> {
        GameUndecided::check(history)?;
        SquareIsEmpty::check(mov, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Active snapshot undecided
/// - Square must be empty
///
/// Postconditions:
/// - History starts empty
/// - Each snapshot adds exactly one mark
/// - Cursor inside the history, on the newest snapshot
pub struct MoveContract;

impl Contract<History, Move> for MoveContract {
    fn pre(history: &History, action: &Move) -> Result<(), MoveRejection> {
        LegalMove::check(action, history)
    }

    fn post(_before: &History, after: &History) -> Result<(), MoveError> {
        if after.current_index() + 1 != after.len() {
            warn!(
                current = after.current_index(),
                len = after.len(),
                "Cursor not on newest snapshot after move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor not on newest snapshot".to_string(),
            ));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
