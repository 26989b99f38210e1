//! Two-player Durak.
//!
//! - Short (36-card) or full (52-card) deck, one trump suit per deal
//! - Hands are dealt to six cards; a deal giving anyone five or more cards
//!   of one suit is re-dealt
//! - The holder of the lowest trump attacks first
//! - The attacker lays cards of ranks already on the table, the defender
//!   beats each one or picks the table up
//! - Whoever runs out of cards once the deck is empty wins

mod game;

pub use game::{DurakGame, DurakGameBuilder};
