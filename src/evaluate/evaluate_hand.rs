use itertools::Itertools;

use super::hand_type::{classify_hand, HandRank};
use crate::models::{Card, HoleCards, Player};

/// Ranks hands at showdown. The round engine only ever asks for a winner, so
/// a test double or a faster lookup-table evaluator can stand in here.
pub trait HandEvaluator {
    /// Best five card rank available from 5 to 7 cards
    fn evaluate(&self, cards: &[Card]) -> HandRank;

    /// Winner of a showdown, or None on a tie
    fn winner(&self, hands: &[HoleCards; 2], community: &[Card]) -> Option<Player> {
        let score = |hole: &HoleCards| {
            let cards: Vec<Card> = hole.iter().chain(community).copied().collect();
            self.evaluate(&cards)
        };
        match score(&hands[0]).cmp(&score(&hands[1])) {
            std::cmp::Ordering::Greater => Some(Player::SmallBlind),
            std::cmp::Ordering::Less => Some(Player::BigBlind),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Exhaustive evaluator: classifies every five card subset and keeps the best
#[derive(Debug, Default, Clone, Copy)]
pub struct EvaluateHand;

impl HandEvaluator for EvaluateHand {
    fn evaluate(&self, cards: &[Card]) -> HandRank {
        assert!(
            (5..=7).contains(&cards.len()),
            "Can only evaluate 5 to 7 cards, got {}",
            cards.len()
        );
        cards
            .iter()
            .copied()
            .combinations(5)
            .map(|combo| classify_hand(&[combo[0], combo[1], combo[2], combo[3], combo[4]]))
            .max()
            .unwrap_or_else(|| unreachable!("at least one five card combination exists"))
    }
}
