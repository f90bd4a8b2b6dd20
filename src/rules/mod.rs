//! Game rules.
//!
//! - `Round`: the turn engine (legality, transitions, turn order)
//! - `RulesEngine`: the trait drivers use, implemented by `NinetyNineRules`

mod engine;
mod round;

pub use engine::{NinetyNineRules, RulesEngine};
pub use round::{Direction, Round};
