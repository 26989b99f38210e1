//! Game implementations.

pub mod durak;

pub use durak::{DurakGame, DurakGameBuilder};
