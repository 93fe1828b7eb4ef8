//! Side wager on the outcome of the current game.
//!
//! The stake leaves the balance when the bet is placed. A winning bet is
//! credited `payout_multiplier × amount` once the game is decided; a losing
//! bet costs nothing further.

mod bet;
mod error;

pub use bet::{Bet, BetChoice, Settlement};
pub use error::WagerError;

use crate::games::tictactoe::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Points every new wager starts with.
pub const DEFAULT_BALANCE: i64 = 100;

/// Payout multiplier applied to a winning stake.
pub const DEFAULT_PAYOUT_MULTIPLIER: i64 = 2;

/// Point balance plus at most one pending bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Wager {
    /// Current points; may go negative, nothing guards it.
    balance: i64,
    /// Bet waiting for the game to be decided.
    pending: Option<Bet>,
    /// True once the last placed bet has been settled.
    settled: bool,
    /// Multiplier applied to winning stakes.
    payout_multiplier: i64,
    /// Most recent settlement, for display.
    last_settlement: Option<Settlement>,
}

impl Wager {
    /// Creates a wager with the given starting balance and payout multiplier.
    #[instrument]
    pub fn new(balance: i64, payout_multiplier: i64) -> Self {
        Self {
            balance,
            pending: None,
            settled: false,
            payout_multiplier,
            last_settlement: None,
        }
    }

    /// Places a bet, deducting the stake immediately.
    ///
    /// # Errors
    ///
    /// [`WagerError::NonPositiveAmount`] for `amount <= 0`,
    /// [`WagerError::BetAlreadyPending`] while another bet is open.
    /// State is unchanged on error.
    #[instrument(skip(self), fields(balance = self.balance))]
    pub fn place_bet(&mut self, choice: BetChoice, amount: i64) -> Result<(), WagerError> {
        if amount <= 0 {
            warn!("Rejected non-positive bet");
            return Err(WagerError::NonPositiveAmount(amount));
        }
        if let Some(pending) = self.pending {
            warn!(?pending, "Rejected bet while another is pending");
            return Err(WagerError::BetAlreadyPending(pending));
        }

        self.balance = self.balance.saturating_sub(amount);
        self.pending = Some(Bet::new(choice, amount));
        self.settled = false;
        info!(%choice, amount, balance = self.balance, "Bet placed");
        Ok(())
    }

    /// Parses `raw` as the amount and places the bet.
    ///
    /// # Errors
    ///
    /// [`WagerError::NotANumber`] when `raw` is not an integer, otherwise as
    /// [`Wager::place_bet`].
    #[instrument(skip(self))]
    pub fn place_bet_str(&mut self, choice: BetChoice, raw: &str) -> Result<(), WagerError> {
        let amount = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| WagerError::NotANumber(raw.to_string()))?;
        self.place_bet(choice, amount)
    }

    /// Settles the pending bet against a decided outcome.
    ///
    /// No-op (returns `None`) while the outcome is undecided or no bet is
    /// pending, so observing the same outcome repeatedly settles at most once.
    #[instrument(skip(self))]
    pub fn settle(&mut self, outcome: Outcome) -> Option<Settlement> {
        if !outcome.is_decided() {
            return None;
        }
        let bet = self.pending.take()?;

        let won = bet.choice().matches(&outcome);
        let payout = if won {
            bet.amount().saturating_mul(self.payout_multiplier)
        } else {
            0
        };
        self.balance = self.balance.saturating_add(payout);
        self.settled = true;

        let settlement = Settlement::new(bet, outcome, won, payout);
        info!(
            %outcome,
            won,
            payout,
            balance = self.balance,
            "Bet settled"
        );
        self.last_settlement = Some(settlement);
        Some(settlement)
    }

    /// Forgets the pending bet and settlement state; the balance is kept.
    ///
    /// A stake already deducted for a pending bet is not refunded.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(?pending, "Dropping pending bet");
        }
        self.settled = false;
        self.last_settlement = None;
    }

    /// Returns true if the last placed bet has been settled.
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

impl Default for Wager {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE, DEFAULT_PAYOUT_MULTIPLIER)
    }
}
