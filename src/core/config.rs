//! Game configuration.
//!
//! Everything that would otherwise be a module-level switch (deck size,
//! hand size, the re-deal bound, debug invariant checks) is a field of
//! `GameConfig` and is handed to the game at construction.

use serde::{Deserialize, Serialize};

use super::error::{DurakError, Result};
use super::player::PlayerId;
use crate::cards::{Rank, Suit};

/// Which sealed population a game uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckVariant {
    /// Six through Ace, 36 cards.
    #[default]
    Short,
    /// Two through Ace, 52 cards.
    Full,
}

impl DeckVariant {
    /// Lowest rank present in the sealed population.
    #[must_use]
    pub const fn lowest_rank(self) -> Rank {
        match self {
            DeckVariant::Short => Rank::Six,
            DeckVariant::Full => Rank::Two,
        }
    }

    /// Number of cards in the sealed population.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            DeckVariant::Short => 36,
            DeckVariant::Full => 52,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Sealed population.
    pub variant: DeckVariant,

    /// Cards below this rank are left out of the live deck.
    pub lowest_rank: Rank,

    /// Hands are refilled to this size.
    pub hand_size: usize,

    /// A dealt hand may hold at most this many cards of one suit.
    pub max_cards_of_one_suit: usize,

    /// Re-deals allowed before the deal gives up.
    pub max_deal_attempts: u32,

    /// Attacks first when nobody holds a trump.
    pub default_attacker: PlayerId,

    /// Run the full invariant sweep after every command.
    pub strict_invariants: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: DeckVariant::Short,
            lowest_rank: Rank::Six,
            hand_size: 6,
            max_cards_of_one_suit: 4,
            max_deal_attempts: 100,
            default_attacker: PlayerId::new(0),
            strict_invariants: cfg!(debug_assertions),
        }
    }
}

impl GameConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a sealed population; the rank filter follows the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: DeckVariant) -> Self {
        self.variant = variant;
        self.lowest_rank = variant.lowest_rank();
        self
    }

    /// Leave ranks below `rank` out of the live deck.
    #[must_use]
    pub fn with_lowest_rank(mut self, rank: Rank) -> Self {
        self.lowest_rank = rank;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_cards_of_one_suit(mut self, max: usize) -> Self {
        self.max_cards_of_one_suit = max;
        self
    }

    #[must_use]
    pub fn with_max_deal_attempts(mut self, attempts: u32) -> Self {
        self.max_deal_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_default_attacker(mut self, player: PlayerId) -> Self {
        self.default_attacker = player;
        self
    }

    #[must_use]
    pub fn with_strict_invariants(mut self, strict: bool) -> Self {
        self.strict_invariants = strict;
        self
    }

    /// Number of live cards after the rank filter.
    #[must_use]
    pub fn live_deck_size(&self) -> usize {
        let ranks = Rank::ALL
            .iter()
            .filter(|&&r| r >= self.lowest_rank)
            .count();
        ranks * Suit::ALL.len()
    }

    /// Reject configurations no deal can satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.lowest_rank < self.variant.lowest_rank() {
            return Err(DurakError::InvalidValue(format!(
                "lowest rank {} is below the {:?} deck",
                self.lowest_rank, self.variant
            )));
        }
        if self.hand_size == 0 {
            return Err(DurakError::InvalidValue("hand size 0".into()));
        }
        if self.hand_size * 2 > self.live_deck_size() {
            return Err(DurakError::InvalidValue(format!(
                "two hands of {} do not fit a {}-card deck",
                self.hand_size,
                self.live_deck_size()
            )));
        }
        if self.max_cards_of_one_suit == 0 {
            return Err(DurakError::InvalidValue("max cards of one suit 0".into()));
        }
        if self.max_deal_attempts == 0 {
            return Err(DurakError::InvalidValue("max deal attempts 0".into()));
        }
        Ok(())
    }
}
