//! Game rules.
//!
//! - `playability`: which hand cards may be laid, given a role and the table
//! - `sorting`: hand orderings
//! - `priority`: starting attacker and the re-deal rule
//! - `engine`: the `RulesEngine` trait the game implements

pub mod engine;
pub mod playability;
pub mod priority;
pub mod sorting;

pub use engine::{GameResult, RulesEngine};
pub use playability::Focus;
pub use sorting::SortMethod;
