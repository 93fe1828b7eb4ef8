//! Starts-empty invariant: the first snapshot is the blank board.

use super::super::{History, Snapshot};
use super::Invariant;

/// Invariant: `history[0]` is the all-empty board with no origin.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.snapshot(0) == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
