//! Match configuration.
//!
//! `GameConfig` fixes the table shape before dealing. The rules
//! themselves (the 99 ceiling, the card effects) are not configurable.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of cards in the standard deck.
pub const DECK_SIZE: usize = 52;

/// Point ceiling. Going above it busts the active player.
pub const MAX_POINTS: i32 = 99;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 10;

/// Configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Cards dealt to each player at the start.
    pub hand_size: usize,

    /// Record a snapshot before every step so the game can step back.
    pub allow_step_back: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            hand_size: 5,
            allow_step_back: false,
        }
    }
}

impl GameConfig {
    /// Check that the configuration can be dealt from one deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                actual: self.player_count,
            });
        }

        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }

        let needed = self.player_count * self.hand_size;
        if needed > DECK_SIZE {
            return Err(ConfigError::NotEnoughCards {
                needed,
                available: DECK_SIZE,
            });
        }

        Ok(())
    }
}
