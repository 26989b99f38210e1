//! The sealed card population.
//!
//! `CardRegistry` generates one card per (suit, rank) pair of a deck
//! variant exactly once. The list of faces never changes afterwards; the
//! per-card runtime state is reset between deals but the cards themselves
//! are never created or destroyed.
//!
//! ## Usage
//!
//! ```
//! use durak_core::cards::{CardFace, CardRegistry};
//! use durak_core::core::DeckVariant;
//!
//! let registry = CardRegistry::new(DeckVariant::Short);
//! assert_eq!(registry.len(), 36);
//!
//! let queen = registry.find("QD".parse::<CardFace>().unwrap()).unwrap();
//! assert_eq!(registry[queen].face().to_string(), "QD");
//! ```

use rustc_hash::FxHashMap;
use std::ops::{Index, IndexMut};

use super::definition::{CardFace, Rank, Suit};
use super::instance::Card;
use crate::core::config::DeckVariant;
use crate::core::entity::CardId;
use crate::core::error::{DurakError, Result};

/// Sealed faces plus the live state of every card.
#[derive(Clone, Debug)]
pub struct CardRegistry {
    variant: DeckVariant,
    sealed: Vec<CardFace>,
    cards: Vec<Card>,
    by_face: FxHashMap<CardFace, CardId>,
}

impl CardRegistry {
    /// Generate the sealed population for a variant, suit-major and
    /// lowest rank first.
    #[must_use]
    pub fn new(variant: DeckVariant) -> Self {
        let low = variant.lowest_rank();
        let sealed: Vec<CardFace> = Suit::ALL
            .iter()
            .flat_map(|&suit| {
                Rank::ALL
                    .iter()
                    .filter(move |&&rank| rank >= low)
                    .map(move |&rank| CardFace::new(suit, rank))
            })
            .collect();

        let by_face = sealed
            .iter()
            .enumerate()
            .map(|(i, &face)| (face, CardId(i as u8)))
            .collect();
        let cards = sealed.iter().map(|&face| Card::new(face)).collect();

        Self {
            variant,
            sealed,
            cards,
            by_face,
        }
    }

    #[must_use]
    pub fn variant(&self) -> DeckVariant {
        self.variant
    }

    /// Number of cards in the sealed population.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sealed.is_empty()
    }

    /// Faces of the sealed population in generation order.
    #[must_use]
    pub fn sealed(&self) -> &[CardFace] {
        &self.sealed
    }

    /// All card handles in generation order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.sealed.len() as u8).map(CardId)
    }

    /// Iterate over (CardId, &Card) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (CardId(i as u8), c))
    }

    /// Look up the handle of a face. `None` if the variant has no such card.
    #[must_use]
    pub fn find(&self, face: CardFace) -> Option<CardId> {
        self.by_face.get(&face).copied()
    }

    /// Checked access for handles arriving from outside the engine.
    pub fn get(&self, id: CardId) -> Result<&Card> {
        self.cards.get(id.index()).ok_or(DurakError::OutOfRange {
            what: "card",
            index: id.index(),
            limit: self.cards.len(),
        })
    }

    /// Checked mutable access.
    pub fn get_mut(&mut self, id: CardId) -> Result<&mut Card> {
        let limit = self.cards.len();
        self.cards.get_mut(id.index()).ok_or(DurakError::OutOfRange {
            what: "card",
            index: id.index(),
            limit,
        })
    }

    /// Return every card to its freshly generated state.
    pub fn reset_all(&mut self) {
        for card in &mut self.cards {
            card.reset_round();
        }
    }
}

impl Index<CardId> for CardRegistry {
    type Output = Card;

    fn index(&self, id: CardId) -> &Self::Output {
        &self.cards[id.index()]
    }
}

impl IndexMut<CardId> for CardRegistry {
    fn index_mut(&mut self, id: CardId) -> &mut Self::Output {
        &mut self.cards[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_short_population() {
        let registry = CardRegistry::new(DeckVariant::Short);
        assert_eq!(registry.len(), 36);
        assert!(registry.sealed().iter().all(|f| f.rank >= Rank::Six));
    }

    #[test]
    fn test_full_population() {
        let registry = CardRegistry::new(DeckVariant::Full);
        assert_eq!(registry.len(), 52);
        assert_eq!(registry.sealed()[0], "2H".parse().unwrap());
        assert_eq!(registry.sealed()[51], "AS".parse().unwrap());
    }

    #[test]
    fn test_no_duplicate_faces() {
        let registry = CardRegistry::new(DeckVariant::Full);
        let faces: FxHashSet<_> = registry.sealed().iter().collect();
        assert_eq!(faces.len(), registry.len());
    }

    #[test]
    fn test_find_matches_index() {
        let registry = CardRegistry::new(DeckVariant::Short);
        for (id, card) in registry.iter() {
            assert_eq!(registry.find(card.face()), Some(id));
        }
        assert_eq!(registry.find("2C".parse().unwrap()), None);
    }

    #[test]
    fn test_checked_access() {
        let mut registry = CardRegistry::new(DeckVariant::Short);
        assert!(registry.get(CardId(35)).is_ok());
        assert!(matches!(
            registry.get(CardId(36)),
            Err(DurakError::OutOfRange { what: "card", index: 36, limit: 36 })
        ));
        assert!(registry.get_mut(CardId(200)).is_err());
    }

    #[test]
    fn test_reset_all() {
        let mut registry = CardRegistry::new(DeckVariant::Short);
        let id = CardId(3);
        registry[id].set_trump(true);
        registry[id].set_hand_position(0, 36).unwrap();

        registry.reset_all();

        assert!(!registry[id].is_trump());
        assert!(registry[id].location().is_nowhere());
    }
}
