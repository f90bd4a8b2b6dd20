//! Card effect definitions.
//!
//! A `CardEffect` is what an `Action` does once the card is on the table.
//! Every rank maps to exactly one effect; dual-effect and choose-target
//! ranks take their parameter from the action.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::{Action, PlayerId, MAX_POINTS};

/// Magnitude of a Ten's point change.
const TEN_DELTA: i32 = 10;

/// Magnitude of a Queen's point change.
const QUEEN_DELTA: i32 = 20;

/// The resolved semantics of one play.
///
/// ## Point Effects
///
/// - `AddPoints`: number cards and signed Tens/Queens
/// - `SetPoints`: King
///
/// ## Turn Effects
///
/// - `Reverse`: Four flips the turn direction
/// - `ChooseNext`: Ace forces who plays next
///
/// ## Hand Effects
///
/// - `Exchange`: Seven swaps whole hands with the target
/// - `Steal`: Jack takes one random card from the target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    AddPoints(i32),
    SetPoints(i32),
    Reverse,
    ChooseNext(PlayerId),
    Exchange(PlayerId),
    Steal(PlayerId),
}

impl CardEffect {
    /// Resolve the effect an action produces.
    ///
    /// Returns `None` when the action's shape does not fit its card's rank
    /// (for example a Seven without a target). Such actions are never legal.
    #[must_use]
    pub fn of(action: &Action) -> Option<Self> {
        let effect = match (*action, action.card().rank) {
            (Action::Play(_), Rank::Four) => CardEffect::Reverse,
            (Action::Play(_), Rank::King) => CardEffect::SetPoints(MAX_POINTS),
            (Action::Play(card), _) => CardEffect::AddPoints(card.rank.face_value()?),
            (Action::PlaySigned { sign, .. }, Rank::Ten) => {
                CardEffect::AddPoints(sign.apply(TEN_DELTA))
            }
            (Action::PlaySigned { sign, .. }, Rank::Queen) => {
                CardEffect::AddPoints(sign.apply(QUEEN_DELTA))
            }
            (Action::PlayTargeted { target, .. }, Rank::Ace) => CardEffect::ChooseNext(target),
            (Action::PlayTargeted { target, .. }, Rank::Seven) => CardEffect::Exchange(target),
            (Action::PlayTargeted { target, .. }, Rank::Jack) => CardEffect::Steal(target),
            _ => return None,
        };
        Some(effect)
    }

    /// The player this effect acts on, if any.
    #[must_use]
    pub const fn target(&self) -> Option<PlayerId> {
        match *self {
            CardEffect::ChooseNext(target)
            | CardEffect::Exchange(target)
            | CardEffect::Steal(target) => Some(target),
            _ => None,
        }
    }

    /// Whether the active player draws a replacement card afterwards.
    ///
    /// Exchange and steal already changed the active hand.
    #[must_use]
    pub const fn draws_replacement(&self) -> bool {
        !matches!(self, CardEffect::Exchange(_) | CardEffect::Steal(_))
    }
}
