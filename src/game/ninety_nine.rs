//! Match orchestration.

use tracing::debug;

use super::history::History;
use super::view::{PerfectInformation, PlayerView};
use crate::core::{Action, ConfigError, GameConfig, GameError, GameState, PlayerId};
use crate::rules::{NinetyNineRules, RulesEngine};

/// A Ninety-Nine match: rules, live state and optional step-back history.
#[derive(Clone, Debug)]
pub struct NinetyNineGame {
    rules: NinetyNineRules,
    state: GameState,
    history: History,
}

/// Builder for creating a NinetyNineGame.
#[derive(Clone, Debug, Default)]
pub struct NinetyNineGameBuilder {
    config: GameConfig,
}

impl NinetyNineGameBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seats (2-10).
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    /// Set the number of cards dealt to each seat.
    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    /// Keep snapshots so `step_back` can undo turns.
    pub fn allow_step_back(mut self, allow: bool) -> Self {
        self.config.allow_step_back = allow;
        self
    }

    /// Validate the configuration and deal the first match.
    pub fn build(self, seed: u64) -> Result<NinetyNineGame, ConfigError> {
        NinetyNineGame::new(self.config, seed)
    }
}

impl NinetyNineGame {
    /// Validate `config` and deal a match.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let rules = NinetyNineRules::new(config)?;
        let state = rules.initial_state(seed);
        Ok(Self {
            rules,
            state,
            history: History::new(),
        })
    }

    /// Create a builder with the default configuration.
    pub fn builder() -> NinetyNineGameBuilder {
        NinetyNineGameBuilder::new()
    }

    /// Deal a fresh match with the same configuration.
    ///
    /// Returns the first player's view and id.
    pub fn reset(&mut self, seed: u64) -> (PlayerView, PlayerId) {
        self.state = self.rules.initial_state(seed);
        self.history.clear();
        let player = self.current_player();
        (self.player_view(player), player)
    }

    /// Apply `action` for the active player.
    ///
    /// Returns the next player's view and id. On error nothing changes,
    /// including the history.
    pub fn step(&mut self, action: &Action) -> Result<(PlayerView, PlayerId), GameError> {
        let snapshot = self.config().allow_step_back.then(|| self.state.clone());

        let next = self.rules.apply_action(&mut self.state, action)?;

        if let Some(snapshot) = snapshot {
            self.history.push(snapshot);
        }
        Ok((self.player_view(next), next))
    }

    /// Restore the state before the last step.
    ///
    /// Returns `false` if there is nothing to go back to.
    pub fn step_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                debug!(turn = previous.turn_count, "Stepped back");
                self.state = previous;
                true
            }
            None => false,
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    /// The rules engine driving this match.
    pub fn rules(&self) -> &NinetyNineRules {
        &self.rules
    }

    /// The live match state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for setting up positions (tests, analysis tools).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Number of seats, alive or dead.
    pub fn num_players(&self) -> usize {
        self.state.player_count()
    }

    /// The seat whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.state.active_player()
    }

    /// Snapshots available to `step_back`.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Legal actions for the active player.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    /// Whether only one player is left alive.
    pub fn is_over(&self) -> bool {
        self.rules.is_over(&self.state)
    }

    /// The sole survivor, once the match is over.
    pub fn winner(&self) -> Option<PlayerId> {
        self.rules.winner(&self.state)
    }

    /// 1 for every alive seat, 0 for every dead one.
    pub fn payoffs(&self) -> Vec<i32> {
        self.rules.payoffs(&self.state)
    }

    /// What `player` can observe.
    pub fn player_view(&self, player: PlayerId) -> PlayerView {
        PlayerView::capture(&self.state, player, self.legal_actions())
    }

    /// Every hand and the whole round, for debugging and analysis.
    pub fn perfect_information(&self) -> PerfectInformation {
        PerfectInformation::capture(&self.state, self.legal_actions())
    }
}
