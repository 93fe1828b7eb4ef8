//! Bet and settlement records.

use crate::games::tictactoe::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What a bet is placed on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum BetChoice {
    /// X completes a line.
    X,
    /// O completes a line.
    O,
    /// The board fills with no line.
    Draw,
}

impl BetChoice {
    /// Returns true if this choice wins against a decided outcome.
    pub fn matches(self, outcome: &Outcome) -> bool {
        match outcome {
            Outcome::Win { player, .. } => self == BetChoice::from(*player),
            Outcome::Draw => self == BetChoice::Draw,
            Outcome::InProgress => false,
        }
    }
}

impl From<Player> for BetChoice {
    fn from(player: Player) -> Self {
        match player {
            Player::X => BetChoice::X,
            Player::O => BetChoice::O,
        }
    }
}

/// A stake on one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Bet {
    /// What the stake is on.
    choice: BetChoice,
    /// Points staked.
    amount: i64,
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.amount, self.choice)
    }
}

/// Record of a bet being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Settlement {
    /// The bet that was resolved.
    bet: Bet,
    /// The outcome it was resolved against.
    outcome: Outcome,
    /// Whether the bet won.
    won: bool,
    /// Points credited back (zero when lost).
    payout: i64,
}
