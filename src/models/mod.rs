pub mod card;
pub mod deck;
pub mod player;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use player::Player;

/// A player's two private cards
pub type HoleCards = [Card; 2];
