//! Complete match state.
//!
//! `GameState` holds everything a match needs to continue: seats, the
//! draw pile, the round, the turn counter, the RNG, and the action log.
//!
//! ## Cloning
//!
//! Hands, the deck, the played pile and the action log are `im`
//! persistent vectors, so a clone shares structure with the original.
//! Step-back history and rollouts rely on clones being cheap.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use super::action::ActionRecord;
use super::config::{GameConfig, DECK_SIZE};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Deck};
use crate::rules::Round;

/// Full match state, including every hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Seats in id order.
    pub players: PlayerMap<Player>,

    /// Draw pile.
    pub deck: Deck,

    /// Point total, turn order and played pile.
    pub round: Round,

    /// Transitions applied so far.
    pub turn_count: u32,

    /// Deterministic RNG for shuffles and steals.
    pub rng: GameRng,

    /// Every applied action, oldest first.
    pub action_history: Vector<ActionRecord>,
}

impl GameState {
    /// Shuffle a fresh deck and deal the opening hands.
    ///
    /// Cards are dealt one at a time, round-robin from player 0.
    /// The caller is responsible for validating `config` first.
    #[must_use]
    pub fn deal(config: &GameConfig, seed: u64) -> Self {
        let player_count = config.player_count;
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::shuffled(&mut rng);
        let mut players = PlayerMap::new(player_count, |_| Player::new());

        for i in 0..config.hand_size * player_count {
            let Some(card) = deck.draw() else { break };
            players[PlayerId::new((i % player_count) as u8)].receive(card);
        }

        debug!(seed, player_count, hand_size = config.hand_size, "Dealt opening hands");

        Self {
            players,
            deck,
            round: Round::new(player_count),
            turn_count: 0,
            rng,
            action_history: Vector::new(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.round.turn_pointer
    }

    /// Alive players in id order.
    #[must_use]
    pub fn alive_players(&self) -> SmallVec<[PlayerId; 8]> {
        self.players
            .iter()
            .filter(|(_, player)| player.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of alive players.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players.values().filter(|p| p.is_alive()).count()
    }

    /// How many copies of each card exist across deck, hands and played pile.
    #[must_use]
    pub fn card_census(&self) -> FxHashMap<Card, usize> {
        let mut census = FxHashMap::default();
        let hands = self.players.values().flat_map(|p| p.hand.iter());
        for card in self.deck.iter().chain(hands).chain(self.round.played_cards.iter()) {
            *census.entry(*card).or_insert(0) += 1;
        }
        census
    }

    /// True when every standard card exists exactly once.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let census = self.card_census();
        census.len() == DECK_SIZE
            && Card::standard_deck().all(|card| census.get(&card) == Some(&1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_default_table() {
        let state = GameState::deal(&GameConfig::default(), 42);

        assert_eq!(state.player_count(), 4);
        for (_, player) in state.players.iter() {
            assert_eq!(player.hand_size(), 5);
            assert!(player.is_alive());
        }
        assert_eq!(state.deck.len(), 32);
        assert!(state.round.played_cards.is_empty());
        assert_eq!(state.active_player(), PlayerId::new(0));
        assert_eq!(state.turn_count, 0);
        assert!(state.is_conserved());
    }

    #[test]
    fn test_deal_is_deterministic() {
        let config = GameConfig::default();
        assert_eq!(GameState::deal(&config, 7), GameState::deal(&config, 7));
        assert_ne!(GameState::deal(&config, 7), GameState::deal(&config, 8));
    }

    #[test]
    fn test_alive_players() {
        let mut state = GameState::deal(&GameConfig::default(), 1);
        state.players[PlayerId::new(2)].eliminate();

        let alive: Vec<_> = state.alive_players().into_iter().collect();
        assert_eq!(alive, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(3)]);
        assert_eq!(state.alive_count(), 3);
    }

    #[test]
    fn test_conservation_detects_lost_card() {
        let mut state = GameState::deal(&GameConfig::default(), 3);
        state.deck.draw();
        assert!(!state.is_conserved());
        assert_eq!(state.card_census().values().sum::<usize>(), 51);
    }

    #[test]
    fn test_clone_is_independent() {
        let state = GameState::deal(&GameConfig::default(), 11);
        let mut copy = state.clone();
        copy.players[PlayerId::new(0)].hand.clear();
        copy.deck.clear();

        assert_eq!(state.players[PlayerId::new(0)].hand_size(), 5);
        assert_eq!(state.deck.len(), 32);
    }
}
