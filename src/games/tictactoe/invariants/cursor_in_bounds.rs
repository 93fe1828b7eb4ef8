//! Cursor invariant: the active index points into the history.

use super::super::History;
use super::Invariant;

/// Invariant: `0 <= current < len(history)`.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.current_index() < history.len()
    }

    fn description() -> &'static str {
        "Current move index lies inside the history"
    }
}
