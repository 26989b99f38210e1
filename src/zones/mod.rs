//! Card containers.
//!
//! Each container holds `CardId`s and keeps the held cards' `Location` in
//! step with its own contents. Moving a card means taking it out of one
//! container and handing it to the next; a card's location is overwritten,
//! never merged, so it can only ever be in one place.
//!
//! ## Key Types
//!
//! - `Deck`: shuffled live cards with the trump suit
//! - `Table`: attack positions with bottom/top slots
//! - `Hand`: one player's ordered cards plus derived values
//! - `DiscardPile`: beaten cards

pub mod deck;
pub mod discard;
pub mod hand;
pub mod table;

pub use deck::Deck;
pub use discard::DiscardPile;
pub use hand::Hand;
pub use table::{Table, TableCards, TABLE_POSITIONS};
