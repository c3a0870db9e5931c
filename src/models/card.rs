use itertools::Itertools;
use serde::Serialize;
use std::{fmt::{Display, Formatter}, hash::{Hash, Hasher}, str::FromStr};

use crate::error::CardParseError;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[derive(Default)]
pub enum Suit {
    #[default]
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        })
    }
}

impl Suit {
    pub fn from_int(suit: u8) -> Suit {
        match suit {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            3 => Suit::Clubs,
            _ => panic!("Invalid suit"),
        }
    }

    pub fn to_int(&self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    fn from_char(c: char) -> Result<Suit, CardParseError> {
        match c.to_ascii_lowercase() {
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(CardParseError::Suit(c)),
        }
    }
}

/// Declared low to high so the derived ordering is the poker ordering
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
#[derive(Default)]
pub enum Rank {
    #[default]
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        })
    }
}

impl Rank {
    pub fn from_int(rank: u8) -> Rank {
        match rank {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank"),
        }
    }

    pub fn to_int(&self) -> u8 {
        *self as u8
    }

    fn from_char(c: char) -> Result<Rank, CardParseError> {
        match c.to_ascii_uppercase() {
            '2'..='9' => Ok(Rank::from_int(c as u8 - b'2')),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(CardParseError::Rank(c)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses the two character form printed by `Display`, e.g. "Td" or "As"
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Card::new(Suit::from_char(suit)?, Rank::from_char(rank)?)),
            _ => Err(CardParseError::Length(s.to_string())),
        }
    }
}

pub fn cards_string(cards: &[Card]) -> String {
    cards.iter().map(|card| card.to_string()).join(" ")
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.to_int());
    }
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Card {
        Card {
            suit,
            rank,
        }
    }

    pub fn from_int(card_number: u8) -> Card {
        let suit = card_number / 13;
        let rank = card_number % 13;
        Card::new(Suit::from_int(suit), Rank::from_int(rank))
    }

    pub fn to_int(&self) -> u8 {
        self.suit.to_int() * 13 + self.rank.to_int()
    }
}

impl Default for Card {
    fn default() -> Self {
        Card::new(Suit::Spades, Rank::Two)
    }
}

/// Cards sort by their integer id, so suits group together
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_int().cmp(&other.to_int())
    }
}
