use thiserror::Error;

use crate::round::action::{Action, LegalActions};
use crate::round::history::StateId;
use crate::Chips;

/// Everything a driver can get wrong when walking a round
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("{action} is not legal here, expected one of {legal}")]
    IllegalAction { action: Action, legal: LegalActions },
    #[error("raise to {amount} is outside the legal range [{min}, {max}]")]
    IllegalRaise { amount: Chips, min: Chips, max: Chips },
    #[error("no state with id {0}")]
    UnknownState(StateId),
    #[error("state {0} is terminal, the round is over")]
    RoundOver(StateId),
    #[error("betting on state {0} was closed by a call")]
    BettingClosed(StateId),
}

impl RoundError {
    /// True when the submitted action itself was at fault rather than the id it targeted
    pub fn is_illegal_action(&self) -> bool {
        matches!(self, RoundError::IllegalAction { .. } | RoundError::IllegalRaise { .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("expected two characters like \"As\", got \"{0}\"")]
    Length(String),
    #[error("invalid rank '{0}'")]
    Rank(char),
    #[error("invalid suit '{0}'")]
    Suit(char),
}
