//! Playing cards: suits, ranks, and the rank legality classes.
//!
//! ## Textual Form
//!
//! A card is written as its suit character followed by its rank character:
//! `SA` (ace of spades), `HT` (ten of hearts), `CK` (king of clubs).
//! This is the same form the action wire contract builds on.
//!
//! ```
//! use ninety_nine::cards::{Card, Rank, Suit};
//!
//! let card: Card = "HT".parse().unwrap();
//! assert_eq!(card, Card::new(Suit::Hearts, Rank::Ten));
//! assert_eq!(card.to_string(), "HT");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::ParseError;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in standard deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Single-character code (`S`, `H`, `D`, `C`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    /// Parse a suit from its single-character code.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        match code {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            other => Err(ParseError::InvalidSuit(other)),
        }
    }
}

/// How a rank turns into legal actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RankClass {
    /// One action per held card.
    Single,
    /// Two actions per held card: `+` and `-`.
    Dual,
    /// One action per other alive player.
    ChooseTarget,
}

/// Card rank, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
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
}

impl Rank {
    /// All ranks in standard deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Single-character code (`A`, `2`..`9`, `T`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    /// Parse a rank from its single-character code.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.code() == code)
            .ok_or(ParseError::InvalidRank(code))
    }

    /// Legality class of this rank.
    #[must_use]
    pub const fn class(self) -> RankClass {
        match self {
            Rank::Ten | Rank::Queen => RankClass::Dual,
            Rank::Ace | Rank::Seven | Rank::Jack => RankClass::ChooseTarget,
            _ => RankClass::Single,
        }
    }

    /// Points added by plain number cards (2, 3, 5, 6, 8, 9).
    ///
    /// Returns `None` for ranks whose effect is not a plain face-value add.
    #[must_use]
    pub const fn face_value(self) -> Option<i32> {
        match self {
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            _ => None,
        }
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The 52 standard cards, suits S, H, D, C and ranks A..K within each suit.
    pub fn standard_deck() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.code(), self.rank.code())
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(suit), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::InvalidLength(s.to_string()));
        };
        Ok(Card::new(Suit::from_code(suit)?, Rank::from_code(rank)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_is_52_distinct_cards() {
        let cards: Vec<_> = Card::standard_deck().collect();
        assert_eq!(cards.len(), 52);

        let mut sorted = cards.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 52);

        assert_eq!(cards[0], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(cards[51], Card::new(Suit::Clubs, Rank::King));
    }

    #[test]
    fn test_rank_classes() {
        let single: Vec<_> = Rank::ALL
            .into_iter()
            .filter(|r| r.class() == RankClass::Single)
            .map(Rank::code)
            .collect();
        assert_eq!(single, vec!['2', '3', '4', '5', '6', '8', '9', 'K']);

        assert_eq!(Rank::Ten.class(), RankClass::Dual);
        assert_eq!(Rank::Queen.class(), RankClass::Dual);
        assert_eq!(Rank::Ace.class(), RankClass::ChooseTarget);
        assert_eq!(Rank::Seven.class(), RankClass::ChooseTarget);
        assert_eq!(Rank::Jack.class(), RankClass::ChooseTarget);
    }

    #[test]
    fn test_face_values() {
        assert_eq!(Rank::Two.face_value(), Some(2));
        assert_eq!(Rank::Nine.face_value(), Some(9));
        assert_eq!(Rank::Four.face_value(), None);
        assert_eq!(Rank::King.face_value(), None);
        assert_eq!(Rank::Ten.face_value(), None);
    }

    #[test]
    fn test_card_text() {
        let card = Card::new(Suit::Diamonds, Rank::Seven);
        assert_eq!(card.to_string(), "D7");
        assert_eq!("D7".parse::<Card>(), Ok(card));
    }

    #[test]
    fn test_card_parse_errors() {
        assert_eq!("X7".parse::<Card>(), Err(ParseError::InvalidSuit('X')));
        assert_eq!("S1".parse::<Card>(), Err(ParseError::InvalidRank('1')));
        assert!(matches!("S".parse::<Card>(), Err(ParseError::InvalidLength(_))));
        assert!(matches!("SAA".parse::<Card>(), Err(ParseError::InvalidLength(_))));
    }
}
