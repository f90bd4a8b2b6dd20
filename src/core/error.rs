//! Error types.
//!
//! - `GameError`: an action the caller supplied cannot be applied
//! - `ParseError`: malformed card or action text
//! - `ConfigError`: a match configuration that cannot be dealt

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;

/// Rejected action. The match state is left untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{action} is not a legal action for {player}")]
    IllegalAction { action: Action, player: PlayerId },

    #[error("{target} cannot be targeted: not an alive player")]
    InvalidTarget { target: PlayerId },
}

/// Malformed card or action text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a two-character card code, got {0:?}")]
    InvalidLength(String),

    #[error("unknown suit {0:?}")]
    InvalidSuit(char),

    #[error("unknown rank {0:?}")]
    InvalidRank(char),

    #[error("suffix {suffix:?} does not fit card {card}")]
    InvalidSuffix { card: String, suffix: String },

    #[error("invalid target index in {0:?}")]
    InvalidTarget(String),
}

/// Configuration that cannot produce a playable match.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max}, got {actual}")]
    PlayerCount { min: usize, max: usize, actual: usize },

    #[error("hand size must be at least 1")]
    EmptyHand,

    #[error("dealing {needed} cards needs more than the {available} in the deck")]
    NotEnoughCards { needed: usize, available: usize },
}
