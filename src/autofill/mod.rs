//! Randomized, time-staggered filling of the empty squares.
//!
//! Marks alternate by shuffle position (X on even slots, O on odd ones),
//! not by turn order, so two identical marks may land back to back.

mod schedule;

pub use schedule::FillSchedule;

use crate::games::tictactoe::{Board, Player, Position};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Delay between consecutive auto-fill moves.
pub const DEFAULT_FILL_STEP: Duration = Duration::from_millis(100);

/// One move of a fill plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct ScheduledFill {
    /// Square to fill.
    position: Position,
    /// Mark to write.
    mark: Player,
    /// Delay from the start of the fill.
    delay: Duration,
}

/// Ordered moves produced by one auto-fill request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillPlan {
    fills: Vec<ScheduledFill>,
}

impl FillPlan {
    /// Moves in firing order.
    pub fn fills(&self) -> &[ScheduledFill] {
        &self.fills
    }

    /// Number of scheduled moves.
    pub fn len(&self) -> usize {
        self.fills.len()
    }

    /// True when the board had no empty square.
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }
}

impl IntoIterator for FillPlan {
    type Item = ScheduledFill;
    type IntoIter = std::vec::IntoIter<ScheduledFill>;

    fn into_iter(self) -> Self::IntoIter {
        self.fills.into_iter()
    }
}

/// Seedable planner for auto-fill requests.
#[derive(Debug, Clone)]
pub struct AutoFiller {
    rng: StdRng,
    seed: u64,
    step: Duration,
}

impl AutoFiller {
    /// Creates a planner with a fixed seed.
    pub fn new(seed: u64, step: Duration) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            step,
        }
    }

    /// Creates a planner seeded from the thread RNG.
    pub fn from_random(step: Duration) -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed, step)
    }

    /// Seed this planner was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Delay between consecutive moves.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Shuffles the empty squares of `board` and assigns marks and delays.
    ///
    /// The k-th square of the permutation fires after `k × step`.
    #[instrument(skip(self, board), fields(seed = self.seed))]
    pub fn plan(&mut self, board: &Board) -> FillPlan {
        let mut empty = board.empty_positions();

        // Fisher-Yates
        for i in (1..empty.len()).rev() {
            let j = self.rng.random_range(0..=i);
            empty.swap(i, j);
        }

        let fills: Vec<_> = empty
            .into_iter()
            .enumerate()
            .map(|(k, position)| {
                let mark = if k % 2 == 0 { Player::X } else { Player::O };
                ScheduledFill::new(position, mark, self.step.saturating_mul(k as u32))
            })
            .collect();

        debug!(count = fills.len(), "Planned auto-fill");
        FillPlan { fills }
    }
}
