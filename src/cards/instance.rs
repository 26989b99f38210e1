//! Card instances - runtime card state.
//!
//! A `Card` is one member of the sealed population at a specific moment:
//! its face, whether it is trump this deal, the flags the input and render
//! layers look at, and where it currently lives.
//!
//! ## Location
//!
//! A card is in at most one place at a time. The place is a single
//! `Location` value, so setting a new position replaces the old one; there
//! is no way to represent a card that is both in a hand and on the table.

use serde::{Deserialize, Serialize};

use super::definition::{CardFace, Rank, Suit};
use crate::core::error::{DurakError, Result};
use crate::zones::table::TABLE_POSITIONS;

/// Bonus added to the rank value of a trump card.
pub const TRUMP_BONUS: u16 = 100;

/// Which half of a table position a card occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackSlot {
    /// The attacking card.
    Bottom,
    /// The card covering it.
    Top,
}

impl StackSlot {
    /// Both slots, bottom first.
    pub const ALL: [StackSlot; 2] = [StackSlot::Bottom, StackSlot::Top];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            StackSlot::Bottom => 0,
            StackSlot::Top => 1,
        }
    }
}

impl TryFrom<u8> for StackSlot {
    type Error = DurakError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(StackSlot::Bottom),
            1 => Ok(StackSlot::Top),
            _ => Err(DurakError::OutOfRange {
                what: "stack slot",
                index: value as usize,
                limit: 2,
            }),
        }
    }
}

/// Where a card currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Not held by any container.
    #[default]
    Nowhere,
    /// In the live deck; 0 is the depth of the top card at creation.
    Deck(usize),
    /// In a hand at this index.
    Hand(usize),
    /// On the table.
    Table { position: usize, slot: StackSlot },
    /// In the discard pile at this index.
    Discard(usize),
}

impl Location {
    #[must_use]
    pub fn deck_index(self) -> Option<usize> {
        match self {
            Location::Deck(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub fn hand_index(self) -> Option<usize> {
        match self {
            Location::Hand(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub fn discard_index(self) -> Option<usize> {
        match self {
            Location::Discard(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub fn table_slot(self) -> Option<(usize, StackSlot)> {
        match self {
            Location::Table { position, slot } => Some((position, slot)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_nowhere(self) -> bool {
        self == Location::Nowhere
    }
}

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    face: CardFace,
    is_trump: bool,
    selected: bool,
    hovered: bool,
    revealed: bool,
    playable: bool,
    arrived: bool,
    added_order: u64,
    location: Location,
}

impl Card {
    /// Create a card with no trump status and no location.
    #[must_use]
    pub fn new(face: CardFace) -> Self {
        Self {
            face,
            is_trump: false,
            selected: false,
            hovered: false,
            revealed: false,
            playable: false,
            arrived: false,
            added_order: 0,
            location: Location::Nowhere,
        }
    }

    /// Create a card from a raw suit index (0..4) and rank value (2..=14).
    ///
    /// ```
    /// use durak_core::cards::{Card, Rank, Suit};
    ///
    /// let card = Card::create(2, 12).unwrap();
    /// assert_eq!(card.suit(), Suit::Clubs);
    /// assert_eq!(card.rank(), Rank::Queen);
    /// assert!(Card::create(2, 20).is_err());
    /// ```
    pub fn create(suit: u8, rank: u8) -> Result<Self> {
        Ok(Self::new(CardFace::from_values(suit, rank)?))
    }

    // === Identity ===

    #[must_use]
    pub fn face(&self) -> CardFace {
        self.face
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.face.suit
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.face.rank
    }

    /// Rank value, 2..=14, ignoring trump.
    #[must_use]
    pub fn rank_value(&self) -> u16 {
        self.face.rank.value()
    }

    #[must_use]
    pub fn is_trump(&self) -> bool {
        self.is_trump
    }

    /// Set by the deck when the trump suit is chosen.
    pub fn set_trump(&mut self, is_trump: bool) {
        self.is_trump = is_trump;
    }

    /// Rank value plus `TRUMP_BONUS` for trumps.
    #[must_use]
    pub fn effective_value(&self) -> u16 {
        if self.is_trump {
            self.rank_value() + TRUMP_BONUS
        } else {
            self.rank_value()
        }
    }

    // === Comparison ===

    /// Can this card beat `other`?
    ///
    /// A trump competes against any suit, a plain card only against its own
    /// suit. Not an ordering: two cards of different plain suits beat
    /// neither each other.
    #[must_use]
    pub fn compare_greater(&self, other: &Card) -> bool {
        (self.is_trump || self.suit() == other.suit())
            && self.effective_value() > other.effective_value()
    }

    /// Same suit and lower value. Used for ordering within a suit only.
    #[must_use]
    pub fn compare_lesser(&self, other: &Card) -> bool {
        self.suit() == other.suit() && self.rank_value() < other.rank_value()
    }

    // === Location ===

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Put the card in the deck at `depth`. `capacity` bounds the index.
    pub fn set_deck_position(&mut self, depth: usize, capacity: usize) -> Result<()> {
        check_index("deck", depth, capacity)?;
        self.location = Location::Deck(depth);
        Ok(())
    }

    /// Put the card in a hand at `index`.
    pub fn set_hand_position(&mut self, index: usize, capacity: usize) -> Result<()> {
        check_index("hand", index, capacity)?;
        self.location = Location::Hand(index);
        Ok(())
    }

    /// Put the card on the discard pile at `index`.
    pub fn set_discard_position(&mut self, index: usize, capacity: usize) -> Result<()> {
        check_index("discard", index, capacity)?;
        self.location = Location::Discard(index);
        Ok(())
    }

    /// Put the card on the table.
    pub fn set_table_position(&mut self, position: usize, slot: StackSlot) -> Result<()> {
        check_index("table position", position, TABLE_POSITIONS)?;
        self.location = Location::Table { position, slot };
        Ok(())
    }

    /// Card belongs to no container.
    pub fn reset_position(&mut self) {
        self.location = Location::Nowhere;
    }

    /// Fails unless the card is free to join a container.
    pub fn ensure_unheld(&self) -> Result<()> {
        if self.location.is_nowhere() {
            return Ok(());
        }
        Err(DurakError::InvariantViolation(format!(
            "{self} is already held at {:?}",
            self.location
        )))
    }

    // === Flags ===

    #[must_use]
    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    #[must_use]
    pub fn playable(&self) -> bool {
        self.playable
    }

    pub fn set_playable(&mut self, playable: bool) {
        self.playable = playable;
    }

    /// Render layer finished moving the card to its destination.
    #[must_use]
    pub fn arrived(&self) -> bool {
        self.arrived
    }

    pub fn set_arrived(&mut self, arrived: bool) {
        self.arrived = arrived;
    }

    /// Insertion stamp from the last hand this card joined.
    #[must_use]
    pub fn added_order(&self) -> u64 {
        self.added_order
    }

    pub fn set_added_order(&mut self, order: u64) {
        self.added_order = order;
    }

    /// Clear turn-scoped flags. Identity, trump and revealed survive.
    pub fn reset_state(&mut self) {
        self.selected = false;
        self.hovered = false;
        self.playable = false;
        self.arrived = false;
    }

    /// Clear everything a new deal assigns: flags, trump, reveal, stamp and
    /// location.
    pub fn reset_round(&mut self) {
        self.reset_state();
        self.reset_position();
        self.is_trump = false;
        self.revealed = false;
        self.added_order = 0;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_trump {
            write!(f, "{}*", self.face)
        } else {
            write!(f, "{}", self.face)
        }
    }
}

fn check_index(what: &'static str, index: usize, limit: usize) -> Result<()> {
    if index < limit {
        Ok(())
    } else {
        Err(DurakError::OutOfRange { what, index, limit })
    }
}
