//! Linear history of board snapshots with a movable cursor.
//!
//! Playing from an earlier snapshot truncates everything after it before
//! appending, so the abandoned branch is gone for good.

use super::{Board, Outcome, Position, rules};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A board plus the position that was filled to produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Position filled by the move; `None` for the initial snapshot.
    origin: Option<Position>,
}

impl Snapshot {
    /// The all-empty snapshot every history starts with.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }

    /// Evaluates this snapshot's board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }
}

/// One row of the move list shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// Index of the snapshot in the history.
    index: usize,
    /// Human-readable label.
    description: String,
    /// History index to jump to when the entry is chosen.
    target: usize,
}

/// Describes a history entry: "Go to game start" or "Go to move #N at (row, col)".
pub fn describe(index: usize, origin: Option<Position>) -> String {
    match origin {
        Some(pos) if index > 0 => {
            format!("Go to move #{} at ({}, {})", index, pos.row(), pos.column())
        }
        _ => "Go to game start".to_string(),
    }
}

/// Error returned when jumping outside the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// Target index is not in `0..len`.
    #[display("Move {} is out of range (history has {} entries)", target, len)]
    OutOfRange {
        /// Requested index.
        target: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Ordered snapshots plus the index of the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    current: usize,
}

impl History {
    /// Creates a history holding only the initial empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            current: 0,
        }
    }

    /// Truncates to `[0..=from_index]`, appends `snapshot` and makes it active.
    ///
    /// `from_index` past the end is clamped to the last snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn append(&mut self, from_index: usize, snapshot: Snapshot) {
        let keep = from_index.min(self.snapshots.len() - 1) + 1;
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Discarding future branch"
            );
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        self.current = self.snapshots.len() - 1;
    }

    /// Makes `target` the active snapshot without touching the snapshots.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump(&mut self, target: usize) -> Result<(), JumpError> {
        if target >= self.snapshots.len() {
            warn!("Jump target out of range");
            return Err(JumpError::OutOfRange {
                target,
                len: self.snapshots.len(),
            });
        }
        self.current = target;
        Ok(())
    }

    /// Drops every snapshot but the initial one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Snapshot::initial());
        self.current = 0;
    }

    /// Returns the active snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.current]
    }

    /// Returns the active index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the snapshot at `index`, if any.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Move list entries in history order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| MoveEntry {
                index,
                description: describe(index, snapshot.origin),
                target: index,
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn step(history: &History, pos: Position, player: Player) -> Snapshot {
        Snapshot::new(history.current().board.with_mark(pos, player), Some(pos))
    }

    #[test]
    fn test_new_history_has_initial_snapshot() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert_eq!(*history.current(), Snapshot::initial());
        assert!(history.current().origin().is_none());
    }

    #[test]
    fn test_append_from_latest_grows() {
        let mut history = History::new();
        let snap = step(&history, Position::Center, Player::X);
        history.append(0, snap);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_index(), 1);
        assert_eq!(*history.current().origin(), Some(Position::Center));
    }

    #[test]
    fn test_append_from_past_discards_future() {
        let mut history = History::new();
        for (i, pos) in [Position::TopLeft, Position::Center, Position::BottomRight]
            .into_iter()
            .enumerate()
        {
            let snap = step(&history, pos, Player::for_move_index(i));
            history.append(history.current_index(), snap);
        }
        assert_eq!(history.len(), 4);

        history.jump(1).unwrap();
        let snap = step(&history, Position::TopRight, Player::O);
        history.append(history.current_index(), snap);

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(*history.current().origin(), Some(Position::TopRight));
        assert!(history.current().board().is_empty(Position::Center));
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut history = History::new();
        let before = history.clone();
        assert_eq!(
            history.jump(1),
            Err(JumpError::OutOfRange { target: 1, len: 1 })
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_does_not_touch_snapshots() {
        let mut history = History::new();
        let snap = step(&history, Position::Center, Player::X);
        history.append(0, snap);
        let snapshots = history.snapshots().to_vec();

        history.jump(0).unwrap();
        assert_eq!(history.snapshots(), snapshots.as_slice());
        assert_eq!(history.current_index(), 0);
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut history = History::new();
        let snap = step(&history, Position::Center, Player::X);
        history.append(0, snap);
        history.reset();
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_move_list_descriptions() {
        let mut history = History::new();
        let snap = step(&history, Position::MiddleRight, Player::X);
        history.append(0, snap);

        let list = history.move_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].description(), "Go to game start");
        assert_eq!(list[1].description(), "Go to move #1 at (2, 3)");
        assert_eq!(*list[1].target(), 1);
    }
}
