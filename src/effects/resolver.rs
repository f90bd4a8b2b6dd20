//! Effect resolution - executing a card effect on the round and the table.
//!
//! The resolver takes exclusive access to the whole player collection for
//! the duration of one effect, which is what exchange and steal need to
//! move cards between two hands.

use tracing::debug;

use super::CardEffect;
use crate::core::{GameError, GameRng, Player, PlayerId, PlayerMap};
use crate::rules::Round;

/// Applies card effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Fail with `InvalidTarget` if the effect targets a seat that does
    /// not exist or is no longer alive.
    pub fn check_target(players: &PlayerMap<Player>, effect: &CardEffect) -> Result<(), GameError> {
        match effect.target() {
            Some(target) if !players.get(target).is_some_and(Player::is_alive) => {
                Err(GameError::InvalidTarget { target })
            }
            _ => Ok(()),
        }
    }

    /// Apply `effect`, played by `active`.
    ///
    /// The target is checked before anything changes, so an error leaves
    /// both the round and the players untouched.
    pub fn resolve(
        round: &mut Round,
        players: &mut PlayerMap<Player>,
        active: PlayerId,
        effect: &CardEffect,
        rng: &mut GameRng,
    ) -> Result<(), GameError> {
        Self::check_target(players, effect)?;

        match *effect {
            CardEffect::AddPoints(delta) => round.points += delta,

            CardEffect::SetPoints(points) => round.points = points,

            CardEffect::Reverse => round.direction = round.direction.reversed(),

            CardEffect::ChooseNext(target) => round.pending_forced_turn = Some(target),

            CardEffect::Exchange(target) => {
                let active_hand = std::mem::take(&mut players[active].hand);
                let target_hand = std::mem::replace(&mut players[target].hand, active_hand);
                players[active].hand = target_hand;
                debug!(player = active.0, target = target.0, "Exchanged hands");
            }

            CardEffect::Steal(target) => {
                if let Some(card) = players[target].take_random(rng) {
                    players[active].receive(card);
                    debug!(player = active.0, target = target.0, "Stole a card");
                }
            }
        }

        Ok(())
    }
}
