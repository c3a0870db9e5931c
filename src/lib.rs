pub mod config;
pub mod error;
pub mod evaluate;
pub mod models;
pub mod round;
pub mod simulate;
pub mod thread_utils;

#[cfg(test)]
mod misc_tests;

/// Chips committed to or held back from a pot
pub type Chips = u32;
/// Signed change in a player's chips over one round
pub type Delta = i32;

pub use error::{CardParseError, RoundError};
pub use evaluate::evaluate_hand::{EvaluateHand, HandEvaluator};
pub use models::{Card, Deck, Player};
pub use round::{Action, ActionKind, GameState, RoundState, RoundTree, StateId, TerminalState, Transition};
