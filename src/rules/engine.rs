//! Rules engine trait and the Ninety-Nine rules.
//!
//! `RulesEngine` is the surface an environment adapter or a search
//! algorithm drives:
//! - What actions are legal
//! - How an action modifies state
//! - When the match is over and who gets paid

use tracing::info;

use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameError, GameState, PlayerId,
};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: actions for the active player only
/// - `apply_action`: must leave `state` untouched on error
/// - `winner`: `None` while the match continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Legal actions for the active player.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for the active player and return who acts next.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<PlayerId, GameError>;

    /// The sole survivor, once the match is over.
    fn winner(&self, state: &GameState) -> Option<PlayerId>;

    /// One payoff per seat.
    fn payoffs(&self, state: &GameState) -> Vec<i32>;

    // === Convenience Methods ===

    /// Check if the match is over.
    fn is_over(&self, state: &GameState) -> bool {
        self.winner(state).is_some()
    }

    /// Apply an action to a copy of `state`.
    ///
    /// The copy shares structure with the original, so this is cheap
    /// enough for tree search.
    fn step(&self, state: &GameState, action: &Action) -> Result<(GameState, PlayerId), GameError> {
        let mut next = state.clone();
        let player = self.apply_action(&mut next, action)?;
        Ok((next, player))
    }
}

/// The Ninety-Nine rules.
#[derive(Clone, Debug)]
pub struct NinetyNineRules {
    config: GameConfig,
}

impl NinetyNineRules {
    /// Validate `config` and build the rules for it.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Deal a fresh match.
    #[must_use]
    pub fn initial_state(&self, seed: u64) -> GameState {
        GameState::deal(&self.config, seed)
    }
}

impl RulesEngine for NinetyNineRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        state.round.legal_actions(&state.players)
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<PlayerId, GameError> {
        let player = state.active_player();
        let turn = state.turn_count;

        let next = state
            .round
            .proceed(&mut state.players, &mut state.deck, &mut state.rng, action)?;

        state.turn_count += 1;
        state
            .action_history
            .push_back(ActionRecord::new(player, *action, turn));

        if let Some(winner) = self.winner(state) {
            info!(winner = winner.0, turns = state.turn_count, "Game over");
        }

        Ok(next)
    }

    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        match state.alive_players().as_slice() {
            [winner] => Some(*winner),
            _ => None,
        }
    }

    // Binary survive/eliminated; turn count does not weight the payoff.
    fn payoffs(&self, state: &GameState) -> Vec<i32> {
        state
            .players
            .values()
            .map(|p| i32::from(p.is_alive()))
            .collect()
    }
}
