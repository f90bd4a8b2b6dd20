//! The shared draw pile.
//!
//! The deck is an ordered pile whose top is the end of the sequence.
//! It is backed by `im::Vector` so that match snapshots share structure
//! instead of copying 52 cards per turn.

use im::Vector;

use super::card::Card;
use crate::core::GameRng;

/// Ordered draw pile. Top = back of the vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// An empty deck.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The 52 standard cards in unshuffled order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: Card::standard_deck().collect(),
        }
    }

    /// A standard deck shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Randomize card order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut order: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut order);
        self.cards = order.into_iter().collect();
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Put cards on top of the deck, in iteration order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_standard_deck_size() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);
        assert!(!deck.is_empty());
    }

    #[test]
    fn test_draw_pops_from_top() {
        let mut deck = Deck::standard();
        assert_eq!(deck.draw(), Some(Card::new(Suit::Clubs, Rank::King)));
        assert_eq!(deck.draw(), Some(Card::new(Suit::Clubs, Rank::Queen)));
        assert_eq!(deck.len(), 50);
    }

    #[test]
    fn test_draw_from_empty() {
        let mut deck = Deck::empty();
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let deck1 = Deck::shuffled(&mut rng1);
        let deck2 = Deck::shuffled(&mut rng2);

        assert_eq!(deck1, deck2);
        assert_ne!(deck1, Deck::standard());
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);

        let mut cards: Vec<_> = deck.iter().copied().collect();
        cards.sort();
        let mut expected: Vec<_> = Card::standard_deck().collect();
        expected.sort();
        assert_eq!(cards, expected);
    }

    #[test]
    fn test_extend_and_clear() {
        let mut deck = Deck::empty();
        let card = Card::new(Suit::Hearts, Rank::Two);
        deck.extend([card]);
        assert!(deck.contains(&card));

        deck.clear();
        assert!(deck.is_empty());
    }
}
