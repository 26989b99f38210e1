//! Players and the turn state machine.

pub mod player;
pub mod seats;

pub use player::{Player, PlayerKind};
pub use seats::Seats;
