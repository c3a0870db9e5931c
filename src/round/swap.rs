use rand::Rng;

use super::street::Street;
use crate::config::{FLOP_PERCENT, TURN_PERCENT};
use crate::models::card::cards_string;
use crate::models::{Card, Deck, HoleCards};

/// Chance that each player's hole card gets swapped when a street begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapOdds {
    pub flop: f64,
    pub turn: f64,
}

impl Default for SwapOdds {
    fn default() -> Self {
        SwapOdds::new(FLOP_PERCENT, TURN_PERCENT)
    }
}

impl SwapOdds {
    pub fn new(flop: f64, turn: f64) -> SwapOdds {
        assert!((0.0..=1.0).contains(&flop), "Invalid flop swap probability {}", flop);
        assert!((0.0..=1.0).contains(&turn), "Invalid turn swap probability {}", turn);
        SwapOdds { flop, turn }
    }

    /// Swaps never fire
    pub fn never() -> SwapOdds {
        SwapOdds::new(0.0, 0.0)
    }

    /// Swaps fire for both players on every street
    pub fn always() -> SwapOdds {
        SwapOdds::new(1.0, 1.0)
    }

    /// Probability used when entering `street`. The river reuses the turn odds.
    pub fn for_street(&self, street: Street) -> f64 {
        match street {
            Street::Preflop => 0.0,
            Street::Flop => self.flop,
            Street::Turn | Street::River => self.turn,
        }
    }
}

/// Exchanges one of the player's hole cards, picked uniformly, with a random
/// undealt card. The old hole card goes to the back of the undealt pool.
/// Returns `(discarded, drawn)`.
pub fn wildcard_swap<R: Rng + ?Sized>(hand: &mut HoleCards, deck: &mut Deck, rng: &mut R) -> (Card, Card) {
    let slot = rng.gen_range(0..2);
    let drawn = deck.draw_random(rng);
    let discarded = std::mem::replace(&mut hand[slot], drawn);
    deck.append(discarded);
    log::trace!("wildcard swap {} -> {}, hand now [{}]", discarded, drawn, cards_string(hand));
    (discarded, drawn)
}
