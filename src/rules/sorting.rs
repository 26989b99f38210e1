//! Hand ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::cards::{Card, CardRegistry};
use crate::core::entity::CardId;
use crate::core::error::{DurakError, Result};

/// How a hand is ordered. Every method falls back to ascending insertion
/// order on ties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMethod {
    /// Hearts, Diamonds, Clubs, Spades with the trump suit moved last;
    /// descending rank within a suit.
    #[default]
    BySuit,
    /// Fixed suit priority, trump not moved.
    BySuitIgnoringTrump,
    /// Descending effective value, suit priority on ties.
    ByValue,
    /// Descending rank value, trump ignored.
    ByDefaultValue,
    /// The order cards joined the hand.
    ByTimeAdded,
}

impl SortMethod {
    pub const ALL: [SortMethod; 5] = [
        SortMethod::BySuit,
        SortMethod::BySuitIgnoringTrump,
        SortMethod::ByValue,
        SortMethod::ByDefaultValue,
        SortMethod::ByTimeAdded,
    ];

    /// Ordering between two cards under this method.
    #[must_use]
    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        let primary = match self {
            SortMethod::BySuit => a
                .is_trump()
                .cmp(&b.is_trump())
                .then(a.suit().cmp(&b.suit()))
                .then(b.rank_value().cmp(&a.rank_value())),
            SortMethod::BySuitIgnoringTrump => a
                .suit()
                .cmp(&b.suit())
                .then(b.rank_value().cmp(&a.rank_value())),
            SortMethod::ByValue => b
                .effective_value()
                .cmp(&a.effective_value())
                .then(a.suit().cmp(&b.suit())),
            SortMethod::ByDefaultValue => b.rank_value().cmp(&a.rank_value()),
            SortMethod::ByTimeAdded => Ordering::Equal,
        };
        primary.then(a.added_order().cmp(&b.added_order()))
    }

    /// Reorder `ids` in place.
    pub fn sort(self, cards: &CardRegistry, ids: &mut [CardId]) {
        ids.sort_by(|&a, &b| self.compare(&cards[a], &cards[b]));
    }
}

impl FromStr for SortMethod {
    type Err = DurakError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "suit" | "by_suit" => Ok(SortMethod::BySuit),
            "suit_ignoring_trump" | "by_suit_ignoring_trump" => {
                Ok(SortMethod::BySuitIgnoringTrump)
            }
            "value" | "by_value" => Ok(SortMethod::ByValue),
            "default_value" | "by_default_value" => Ok(SortMethod::ByDefaultValue),
            "time_added" | "by_time_added" => Ok(SortMethod::ByTimeAdded),
            _ => Err(DurakError::InvalidValue(format!("unknown sort method {s:?}"))),
        }
    }
}
