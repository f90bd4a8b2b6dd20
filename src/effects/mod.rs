//! Card effects.
//!
//! - `CardEffect`: what one play does, derived from an `Action`
//! - `EffectResolver`: applies an effect to the round and the players
//!
//! Effects only touch the point total, the turn order and hands. Drawing,
//! busting and elimination are handled by the round after the effect.

mod effect;
mod resolver;

pub use effect::CardEffect;
pub use resolver::EffectResolver;
