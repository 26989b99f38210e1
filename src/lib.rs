//! # durak-core
//!
//! Rules and state engine for two-player Durak ("Fool").
//!
//! ## Design Principles
//!
//! 1. **One owner per card**: every card of the sealed population lives in
//!    a `CardRegistry`; containers hold `CardId` handles, and a card's
//!    `Location` names the single container holding it.
//!
//! 2. **Eager derivation**: hand totals and playability are recomputed
//!    inside every command, so readers never see stale values.
//!
//! 3. **Configuration over globals**: deck variant, hand size and the
//!    re-deal bound are fields of `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Card handles, seats, actions, RNG, configuration, errors
//! - `cards`: Faces, card instances, the sealed registry
//! - `zones`: Deck, table, hands, discard pile
//! - `rules`: Playability, sorting, deal priority, `RulesEngine`
//! - `players`: Players and the turn state machine
//! - `games`: The `DurakGame` orchestrator
//!
//! ## Example
//!
//! ```
//! use durak_core::{DurakGameBuilder, GameConfig, RulesEngine, StackSlot};
//!
//! let mut game = DurakGameBuilder::new()
//!     .config(GameConfig::new().with_strict_invariants(true))
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let attacker = game.seats().attacker();
//! let card = game.player(attacker).hand().playable()[0];
//! game.play(card, 0, StackSlot::Bottom).unwrap();
//!
//! assert_eq!(game.seats().active(), attacker.opponent());
//! assert!(!game.legal_actions(attacker.opponent()).is_empty());
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod players;
pub mod rules;
pub mod zones;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CardId, DeckVariant, DurakError, GameConfig, GameRng, PlayerId,
    PlayerMap, RandomSource, Result,
};

pub use crate::cards::{Card, CardFace, CardRegistry, Location, Rank, StackSlot, Suit};

pub use crate::zones::{Deck, DiscardPile, Hand, Table, TABLE_POSITIONS};

pub use crate::rules::{Focus, GameResult, RulesEngine, SortMethod};

pub use crate::players::{Player, PlayerKind, Seats};

pub use crate::games::{DurakGame, DurakGameBuilder};
