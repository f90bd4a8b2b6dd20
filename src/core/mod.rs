//! Core engine types: players, RNG, actions, configuration, errors, state.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap, PlayerStatus};
pub use rng::GameRng;
pub use config::{GameConfig, DECK_SIZE, MAX_PLAYERS, MAX_POINTS, MIN_PLAYERS};
pub use action::{Action, ActionRecord, Sign};
pub use error::{ConfigError, GameError, ParseError};
pub use state::GameState;
