//! Card handles.
//!
//! Every card of the sealed population has a `CardId`: its index in the
//! sealed list of the deck variant. Containers (deck, hand, table, discard)
//! store `CardId`s, the `CardRegistry` stores the cards themselves.
//!
//! ```
//! use durak_core::core::CardId;
//!
//! let id = CardId::new(7);
//! assert_eq!(id.index(), 7);
//! assert_eq!(format!("{}", id), "Card(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Handle to one card of the sealed population.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card handle from a raw index.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Index into the sealed population.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for CardId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
