//! Action representation: a card plus its effect parameter.
//!
//! Every action plays exactly one card. What else the action carries
//! depends on the card's `RankClass`:
//! - Single-effect ranks: nothing (`Play`)
//! - Dual-effect ranks: a `Sign` choosing `+` or `-` (`PlaySigned`)
//! - Choose-target ranks: another player (`PlayTargeted`)
//!
//! ## Wire Form
//!
//! Encoders outside the engine exchange actions as text:
//! `S3`, `HQ-`, `DA->2`. `Action` implements `Display` and `FromStr` for
//! that form and serializes through it.
//!
//! ```
//! use ninety_nine::core::{Action, PlayerId};
//!
//! let action: Action = "DA->2".parse().unwrap();
//! assert_eq!(action.target(), Some(PlayerId::new(2)));
//! assert_eq!(action.to_string(), "DA->2");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseError;
use super::player::PlayerId;
use crate::cards::{Card, RankClass};

/// Direction of a dual-effect card's point change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Apply this sign to a magnitude.
    #[must_use]
    pub const fn apply(self, magnitude: i32) -> i32 {
        match self {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Action {
    /// Play a single-effect card.
    Play(Card),
    /// Play a dual-effect card with the chosen sign.
    PlaySigned { card: Card, sign: Sign },
    /// Play a choose-target card against another player.
    PlayTargeted { card: Card, target: PlayerId },
}

impl Action {
    /// The card this action plays.
    #[must_use]
    pub const fn card(&self) -> Card {
        match *self {
            Action::Play(card)
            | Action::PlaySigned { card, .. }
            | Action::PlayTargeted { card, .. } => card,
        }
    }

    /// The targeted player, for choose-target actions.
    #[must_use]
    pub const fn target(&self) -> Option<PlayerId> {
        match *self {
            Action::PlayTargeted { target, .. } => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play(card) => write!(f, "{card}"),
            Action::PlaySigned { card, sign } => write!(f, "{card}{}", sign.symbol()),
            Action::PlayTargeted { card, target } => write!(f, "{card}->{}", target.0),
        }
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .char_indices()
            .nth(2)
            .map_or(s.len(), |(idx, _)| idx);
        let (code, suffix) = s.split_at(split);
        let card: Card = code.parse()?;

        let bad_suffix = || ParseError::InvalidSuffix {
            card: card.to_string(),
            suffix: suffix.to_string(),
        };

        match card.rank.class() {
            RankClass::Single if suffix.is_empty() => Ok(Action::Play(card)),
            RankClass::Dual => match suffix {
                "+" => Ok(Action::PlaySigned { card, sign: Sign::Plus }),
                "-" => Ok(Action::PlaySigned { card, sign: Sign::Minus }),
                _ => Err(bad_suffix()),
            },
            RankClass::ChooseTarget => {
                let index = suffix.strip_prefix("->").ok_or_else(bad_suffix)?;
                let canonical = !index.is_empty()
                    && index.bytes().all(|b| b.is_ascii_digit())
                    && (index == "0" || !index.starts_with('0'));
                let target = index
                    .parse::<u8>()
                    .ok()
                    .filter(|_| canonical)
                    .ok_or_else(|| ParseError::InvalidTarget(s.to_string()))?;
                Ok(Action::PlayTargeted {
                    card,
                    target: PlayerId::new(target),
                })
            }
            RankClass::Single => Err(bad_suffix()),
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

impl TryFrom<String> for Action {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn count when the action was taken (0-based).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}
