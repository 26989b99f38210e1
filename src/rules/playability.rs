//! Playability derivation.
//!
//! Which hand cards may legally be laid depends on the owner's role this
//! round and the cards currently on the table:
//!
//! | Focus     | Empty table | Cards on the table                        |
//! |-----------|-------------|-------------------------------------------|
//! | Attacking | every card  | rank matches any card on the table        |
//! | Defending | nothing     | `compare_greater` beats any table card     |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::cards::{Card, CardRegistry};
use crate::core::entity::CardId;
use crate::core::error::{DurakError, Result};

/// A player's role this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Focus {
    Attacking,
    Defending,
}

impl Focus {
    /// The other role.
    #[must_use]
    pub const fn opposite(self) -> Focus {
        match self {
            Focus::Attacking => Focus::Defending,
            Focus::Defending => Focus::Attacking,
        }
    }
}

impl TryFrom<u8> for Focus {
    type Error = DurakError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Focus::Attacking),
            1 => Ok(Focus::Defending),
            other => Err(DurakError::UnknownFocus(other.to_string())),
        }
    }
}

impl FromStr for Focus {
    type Err = DurakError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attacking" | "attack" => Ok(Focus::Attacking),
            "defending" | "defend" => Ok(Focus::Defending),
            _ => Err(DurakError::UnknownFocus(s.to_string())),
        }
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Focus::Attacking => write!(f, "attacking"),
            Focus::Defending => write!(f, "defending"),
        }
    }
}

/// Can `card` be laid given `focus` and the cards it is judged against?
#[must_use]
pub fn is_playable(card: &Card, focus: Focus, against: &[&Card]) -> bool {
    if against.is_empty() {
        return focus == Focus::Attacking;
    }
    match focus {
        Focus::Attacking => against.iter().any(|t| t.rank() == card.rank()),
        Focus::Defending => against.iter().any(|t| card.compare_greater(t)),
    }
}

/// Subset of `hand` that is playable, in hand order.
pub fn playable_subset(
    cards: &CardRegistry,
    hand: &[CardId],
    focus: Focus,
    table_cards: &[CardId],
) -> SmallVec<[CardId; 8]> {
    let against: SmallVec<[&Card; 12]> = table_cards.iter().map(|&id| &cards[id]).collect();
    hand.iter()
        .copied()
        .filter(|&id| is_playable(&cards[id], focus, &against))
        .collect()
}
