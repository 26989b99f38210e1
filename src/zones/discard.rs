//! Discard pile for beaten cards.

use crate::cards::CardRegistry;
use crate::core::entity::CardId;
use crate::core::error::{DurakError, Result};

/// Cards swept off the table after a successful defense, oldest first.
#[derive(Clone, Debug, Default)]
pub struct DiscardPile {
    ids: Vec<CardId>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card on top of the pile. No-op if it is already here.
    pub fn add(&mut self, cards: &mut CardRegistry, id: CardId) -> Result<()> {
        if self.ids.contains(&id) {
            return Ok(());
        }
        cards[id].ensure_unheld()?;
        let capacity = cards.len();
        let card = &mut cards[id];
        card.set_discard_position(self.ids.len(), capacity)?;
        card.reset_state();
        self.ids.push(id);
        Ok(())
    }

    pub fn clear(&mut self, cards: &mut CardRegistry) {
        for id in self.ids.drain(..) {
            cards[id].reset_position();
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    pub fn validate(&self, cards: &CardRegistry) -> Result<()> {
        for (expected, &id) in self.ids.iter().enumerate() {
            if cards[id].location().discard_index() != Some(expected) {
                return Err(DurakError::InvariantViolation(format!(
                    "{} is discard card {expected} but located at {:?}",
                    cards[id],
                    cards[id].location()
                )));
            }
        }
        Ok(())
    }
}
