use rand::Rng;
use std::sync::Arc;

use super::history::StateId;
use super::round_state::RoundState;
use super::swap::{wildcard_swap, SwapOdds};
use crate::models::card::cards_string;
use crate::models::Player;

impl RoundState {
    /// Opens the next street after betting on this one has closed.
    ///
    /// Reveals the street's community cards, then rolls the wildcard swap for
    /// each player in seat order. Returns None when this is the river, in which
    /// case the round goes to showdown instead. This state's deck is left
    /// untouched; the successor gets its own copy.
    pub fn next_street<R: Rng + ?Sized>(&self, parent: StateId, odds: &SwapOdds, rng: &mut R) -> Option<RoundState> {
        let street = self.street.next()?;
        let mut deck = Arc::clone(&self.deck);
        let mut hands = self.hands;
        {
            let deck = Arc::make_mut(&mut deck);
            let revealed = deck.reveal(street.cards_to_reveal());
            log::debug!("{} [{}]", street, cards_string(revealed));
            let percent = odds.for_street(street);
            for player in Player::BOTH {
                if rng.gen_bool(percent) {
                    let (discarded, drawn) = wildcard_swap(&mut hands[player.index()], deck, rng);
                    log::debug!("{} swaps {} for {} on the {}", player, discarded, drawn, street);
                }
            }
        }
        Some(RoundState {
            button: 1,
            street,
            pips: [0, 0],
            stacks: self.stacks,
            hands,
            deck,
            previous_state: Some(parent),
        })
    }
}
