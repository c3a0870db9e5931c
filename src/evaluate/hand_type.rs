use serde::Serialize;

use crate::models::card::Rank;
use crate::models::Card;

/// Five card hand categories, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandType {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

/// Strength of a five card hand. Compares by category, then kickers in order.
///
/// Kickers list every rank in the hand, larger groups first and higher ranks
/// first within a group size, so `KKK22` is `[K, K, K, 2, 2]`. A wheel straight
/// lists the ace last so it loses to every other straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HandRank {
    pub hand_type: HandType,
    pub kickers: [Rank; 5],
}

pub fn classify_hand(hand: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 13];
    for card in hand {
        rank_counts[card.rank.to_int() as usize] += 1;
    }

    let mut kickers = hand.map(|card| card.rank);
    kickers.sort_by(|a, b| {
        rank_counts[b.to_int() as usize]
            .cmp(&rank_counts[a.to_int() as usize])
            .then(b.cmp(a))
    });

    let mut group_sizes: Vec<u8> = rank_counts.iter().copied().filter(|&count| count > 0).collect();
    group_sizes.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = hand.iter().all(|card| card.suit == hand[0].suit);
    let is_wheel = kickers == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
    let is_straight = group_sizes.len() == 5
        && (is_wheel || kickers[0].to_int() - kickers[4].to_int() == 4);
    if is_wheel {
        kickers.rotate_left(1);
    }

    let hand_type = match group_sizes.as_slice() {
        _ if is_straight && is_flush => HandType::StraightFlush,
        [4, ..] => HandType::FourOfAKind,
        [3, 2] => HandType::FullHouse,
        _ if is_flush => HandType::Flush,
        _ if is_straight => HandType::Straight,
        [3, ..] => HandType::ThreeOfAKind,
        [2, 2, ..] => HandType::TwoPair,
        [2, ..] => HandType::Pair,
        _ => HandType::HighCard,
    };

    HandRank { hand_type, kickers }
}
