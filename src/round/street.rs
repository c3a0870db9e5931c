use serde::Serialize;
use std::fmt::Display;

/// Betting phase. The discriminant is the number of community cards showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Street {
    Preflop = 0,
    Flop = 3,
    Turn = 4,
    River = 5,
}

impl Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Street::Preflop => write!(f, "preflop"),
            Street::Flop => write!(f, "flop"),
            Street::Turn => write!(f, "turn"),
            Street::River => write!(f, "river"),
        }
    }
}

impl Street {
    /// None once the river has been bet, which means showdown
    pub fn next(&self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    pub fn community_cards(&self) -> usize {
        *self as usize
    }

    /// Cards revealed when this street begins
    pub fn cards_to_reveal(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}
