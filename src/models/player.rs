use serde::Serialize;
use std::fmt::Display;

/// Seat within a heads-up round. The small blind is index 0 and acts first preflop.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[derive(Default)]
pub enum Player {
    #[default]
    SmallBlind,
    BigBlind,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::SmallBlind => write!(f, "SB"),
            Player::BigBlind => write!(f, "BB"),
        }
    }
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::SmallBlind, Player::BigBlind];

    /// The player whose turn it is for a given button counter
    pub fn from_button(button: u32) -> Player {
        match button % 2 {
            0 => Player::SmallBlind,
            _ => Player::BigBlind,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Player::SmallBlind => 0,
            Player::BigBlind => 1,
        }
    }

    pub fn get_opposite(&self) -> Player {
        match self {
            Player::SmallBlind => Player::BigBlind,
            Player::BigBlind => Player::SmallBlind,
        }
    }
}
