use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::Card;

lazy_static! {
    static ref FULL_DECK: Vec<Card> = (0..52).map(Card::from_int).collect();
}

/// The undealt pool plus the community cards revealed so far.
///
/// Cards are dealt from the front of the pool and returned to the back. A card
/// lives in exactly one place at a time; dealing past the end of the pool or
/// returning a card the deck already holds is a broken invariant and panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    undealt: Vec<Card>,
    community: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

impl Deck {
    /// All 52 cards in id order, nothing revealed
    pub fn new() -> Deck {
        Deck {
            undealt: FULL_DECK.clone(),
            community: Vec::new(),
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Deck {
        let mut deck = Deck::new();
        deck.undealt.shuffle(rng);
        deck
    }

    pub fn undealt(&self) -> &[Card] {
        &self.undealt
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.undealt.contains(card) || self.community.contains(card)
    }

    /// Removes `n` cards from the front of the undealt pool
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(
            n <= self.undealt.len(),
            "Deck underflow: asked for {} cards with {} undealt",
            n,
            self.undealt.len()
        );
        self.undealt.drain(..n).collect()
    }

    /// Deals `n` cards face up onto the board
    pub fn reveal(&mut self, n: usize) -> &[Card] {
        let cards = self.deal(n);
        let start = self.community.len();
        self.community.extend(cards);
        &self.community[start..]
    }

    pub fn remove(&mut self, card: &Card) {
        let position = self
            .undealt
            .iter()
            .position(|c| c == card)
            .unwrap_or_else(|| panic!("Card {} is not in the undealt pool", card));
        self.undealt.remove(position);
    }

    pub fn append(&mut self, card: Card) {
        assert!(!self.contains(&card), "Card {} is already in the deck", card);
        self.undealt.push(card);
    }

    /// Takes a uniformly random card out of the undealt pool
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        assert!(!self.undealt.is_empty(), "Deck underflow: no undealt cards to draw");
        let index = rng.gen_range(0..self.undealt.len());
        self.undealt.remove(index)
    }
}
