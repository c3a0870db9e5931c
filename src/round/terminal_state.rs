use serde::Serialize;

use super::history::StateId;
use crate::models::Player;
use crate::Delta;

/// Describes how a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ending {
    /// The player who folded
    Fold(Player),
    /// The winner, or None for a split pot
    Showdown(Option<Player>),
}

/// Leaf of the betting tree. `deltas` always sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalState {
    pub deltas: [Delta; 2],
    pub previous_state: StateId,
    pub ending: Ending,
}

impl TerminalState {
    pub fn new(deltas: [Delta; 2], previous_state: StateId, ending: Ending) -> TerminalState {
        debug_assert_eq!(deltas[0] + deltas[1], 0, "deltas must sum to zero");
        TerminalState {
            deltas,
            previous_state,
            ending,
        }
    }

    pub fn delta(&self, player: Player) -> Delta {
        self.deltas[player.index()]
    }
}
