//! Wager error types.

use super::Bet;

/// A rejected bet. The wager state is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WagerError {
    /// Amount was zero or negative.
    #[display("Please enter a valid bet amount ({} is not positive)", _0)]
    NonPositiveAmount(#[error(not(source))] i64),

    /// Amount did not parse as an integer.
    #[display("Please enter a valid bet amount ({:?} is not a number)", _0)]
    NotANumber(#[error(not(source))] String),

    /// Another bet is still waiting for the game to end.
    #[display("A bet of {} is already pending", _0)]
    BetAlreadyPending(#[error(not(source))] Bet),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wager::BetChoice;
    use std::error::Error;

    #[test]
    fn test_errors_have_no_source() {
        let errors = [
            WagerError::NonPositiveAmount(-5),
            WagerError::NotANumber("ten".to_string()),
            WagerError::BetAlreadyPending(Bet::new(BetChoice::O, 10)),
        ];
        for err in &errors {
            assert!(err.source().is_none());
        }
        assert_eq!(errors[2].to_string(), "A bet of 10 on O is already pending");
    }
}
