//! Step-back history.
//!
//! Each entry is a full `GameState`. Hands, deck, played pile and action
//! log are persistent vectors, so pushing a snapshot shares structure
//! with the live state rather than copying it.

use crate::core::GameState;

/// Stack of match snapshots, most recent last.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vec<GameState>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `state` so it can be restored later.
    pub fn push(&mut self, state: GameState) {
        self.snapshots.push(state);
    }

    /// Take the most recent snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PlayerId};

    #[test]
    fn test_push_pop_order() {
        let config = GameConfig::default();
        let first = GameState::deal(&config, 1);
        let mut second = first.clone();
        second.turn_count = 1;

        let mut history = History::new();
        history.push(first.clone());
        history.push(second.clone());
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop(), Some(second));
        assert_eq!(history.pop(), Some(first));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_snapshot_unaffected_by_later_mutation() {
        let mut state = GameState::deal(&GameConfig::default(), 2);
        let mut history = History::new();
        history.push(state.clone());

        state.players[PlayerId::new(0)].hand.clear();
        state.round.points = 50;

        let restored = history.pop().unwrap();
        assert_eq!(restored.players[PlayerId::new(0)].hand_size(), 5);
        assert_eq!(restored.round.points, 0);
    }
}
