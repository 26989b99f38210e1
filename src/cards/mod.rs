//! Card system: faces, instances, and the sealed registry.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `CardFace`: immutable card identity
//! - `Card`: runtime card state (trump flag, UI flags, location)
//! - `Location`, `StackSlot`: where a card currently is
//! - `CardRegistry`: the sealed population and every card's state

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardFace, Rank, Suit};
pub use instance::{Card, Location, StackSlot, TRUMP_BONUS};
pub use registry::CardRegistry;
