//! Ninety-Nine match orchestration.
//!
//! Players hold five cards and take turns playing one onto a shared
//! running total. Going over 99 on your own play, or ending up with no
//! cards, eliminates you. The last player standing wins.
//!
//! Supports 2-10 players.

mod ninety_nine;
mod history;
mod view;

pub use ninety_nine::{NinetyNineGame, NinetyNineGameBuilder};
pub use history::History;
pub use view::{PerfectInformation, PlayerView};
