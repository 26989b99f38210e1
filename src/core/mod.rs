//! Core engine types: card handles, seats, actions, RNG, configuration,
//! errors.
//!
//! These are the leaf building blocks every other module depends on.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{DeckVariant, GameConfig};
pub use entity::CardId;
pub use error::{DurakError, Result};
pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::{GameRng, RandomSource};
