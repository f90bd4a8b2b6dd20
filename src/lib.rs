//! # ninety-nine
//!
//! A rules engine for the Ninety-Nine card game, built for RL/MCTS training.
//!
//! ## Design Principles
//!
//! 1. **One transition**: every turn is a single `apply_action` call that
//!    either fully applies or leaves the state untouched.
//!
//! 2. **N-Player First**: 2-10 seats; turn order handles direction
//!    reversal, forced turns and eliminated seats.
//!
//! 3. **Typed actions**: an action is a card plus a typed parameter
//!    (sign or target), with the text form kept only at the boundary.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: hands, deck and played pile use `im-rs`,
//!   so cloning a `GameState` for step-back or search is cheap.
//!
//! - **Deterministic RNG**: one seeded ChaCha8 stream per match drives
//!   shuffles and steals.
//!
//! ## Modules
//!
//! - `cards`: Cards, ranks, suits and the deck
//! - `core`: Players, RNG, actions, configuration, errors, match state
//! - `effects`: Card effects and their resolution
//! - `rules`: The turn engine and the `RulesEngine` trait
//! - `game`: Match orchestration, history and views
//!
//! ## Example
//!
//! ```
//! use ninety_nine::game::NinetyNineGame;
//!
//! let mut game = NinetyNineGame::builder().player_count(4).build(42).unwrap();
//! for _ in 0..10 {
//!     if game.is_over() {
//!         break;
//!     }
//!     let action = game.legal_actions()[0];
//!     let (view, next) = game.step(&action).unwrap();
//!     assert_eq!(view.active_player, next);
//! }
//! assert!(game.state().round.points <= 99);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Rank, RankClass, Suit};

pub use crate::core::{
    Action, ActionRecord, Sign,
    ConfigError, GameError, ParseError,
    GameConfig, GameRng, GameState,
    Player, PlayerId, PlayerMap, PlayerStatus,
    MAX_POINTS,
};

pub use crate::effects::{CardEffect, EffectResolver};

pub use crate::rules::{Direction, NinetyNineRules, Round, RulesEngine};

pub use crate::game::{NinetyNineGame, NinetyNineGameBuilder, PerfectInformation, PlayerView};
