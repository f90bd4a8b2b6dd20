//! Cards and the draw pile.
//!
//! - `Card`, `Suit`, `Rank`: immutable card values and their text codes
//! - `RankClass`: how a rank expands into legal actions
//! - `Deck`: the shared, shuffleable draw pile

mod card;
mod deck;

pub use card::{Card, Rank, RankClass, Suit};
pub use deck::Deck;
