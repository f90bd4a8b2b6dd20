//! Observable views of a match.
//!
//! - `PlayerView`: what one seat may see, plus the active player's legal actions
//! - `PerfectInformation`: every hand and the whole round, for analysis tools

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Action, GameState, PlayerId, PlayerStatus};
use crate::rules::Direction;

/// State as seen from one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: PlayerId,
    pub status: PlayerStatus,
    pub hand: Vec<Card>,
    pub played_cards: Vec<Card>,
    /// Legal actions of the active player.
    pub legal_actions: Vec<Action>,
    pub points: i32,
    pub turn_count: u32,
    pub active_player: PlayerId,
    /// Hand size of every seat, in seat order.
    pub hand_sizes: Vec<usize>,
    pub player_count: usize,
    pub direction: Direction,
}

impl PlayerView {
    /// Capture `player`'s view of `state`.
    #[must_use]
    pub fn capture(state: &GameState, player: PlayerId, legal_actions: Vec<Action>) -> Self {
        let seat = &state.players[player];
        Self {
            player,
            status: seat.status(),
            hand: seat.hand.iter().copied().collect(),
            played_cards: state.round.played_cards.iter().copied().collect(),
            legal_actions,
            points: state.round.points,
            turn_count: state.turn_count,
            active_player: state.active_player(),
            hand_sizes: state.players.values().map(|p| p.hand_size()).collect(),
            player_count: state.player_count(),
            direction: state.round.direction,
        }
    }
}

/// Everything about a match except the deck order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfectInformation {
    pub hands: Vec<Vec<Card>>,
    pub statuses: Vec<PlayerStatus>,
    pub played_cards: Vec<Card>,
    pub points: i32,
    pub turn_pointer: PlayerId,
    pub direction: Direction,
    pub legal_actions: Vec<Action>,
    pub deck_size: usize,
    pub turn_count: u32,
}

impl PerfectInformation {
    #[must_use]
    pub fn capture(state: &GameState, legal_actions: Vec<Action>) -> Self {
        Self {
            hands: state
                .players
                .values()
                .map(|p| p.hand.iter().copied().collect())
                .collect(),
            statuses: state.players.values().map(|p| p.status()).collect(),
            played_cards: state.round.played_cards.iter().copied().collect(),
            points: state.round.points,
            turn_pointer: state.round.turn_pointer,
            direction: state.round.direction,
            legal_actions,
            deck_size: state.deck.len(),
            turn_count: state.turn_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_player_view_hides_other_hands() {
        let state = GameState::deal(&GameConfig::default(), 8);
        let legal = state.round.legal_actions(&state.players);
        let view = PlayerView::capture(&state, PlayerId::new(2), legal.clone());

        assert_eq!(view.player, PlayerId::new(2));
        assert_eq!(view.hand.len(), 5);
        let held: Vec<Card> = state.players[PlayerId::new(2)].hand.iter().copied().collect();
        assert_eq!(view.hand, held);
        assert_eq!(view.hand_sizes, vec![5, 5, 5, 5]);
        assert_eq!(view.active_player, PlayerId::new(0));
        assert_eq!(view.legal_actions, legal);
        assert_eq!(view.status, PlayerStatus::Alive);
    }

    #[test]
    fn test_perfect_information_shows_all_hands() {
        let state = GameState::deal(&GameConfig::default(), 8);
        let info = PerfectInformation::capture(&state, Vec::new());

        assert_eq!(info.hands.len(), 4);
        assert!(info.hands.iter().all(|h| h.len() == 5));
        assert_eq!(info.deck_size, 32);
        assert_eq!(info.direction, Direction::Clockwise);
    }

    #[test]
    fn test_view_serializes_actions_as_text() {
        let state = GameState::deal(&GameConfig::default(), 8);
        let action: Action = "SA->1".parse().unwrap();
        let view = PlayerView::capture(&state, PlayerId::new(0), vec![action]);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["legal_actions"][0], "SA->1");
        assert_eq!(json["direction"], "Clockwise");

        let back: PlayerView = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }
}
