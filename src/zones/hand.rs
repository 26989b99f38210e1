//! A player's hand.
//!
//! Cards are kept in display order. Each card's `Location::Hand(i)` equals
//! its index, contiguous from 0; every mutation re-indexes what it moved
//! and refreshes the summary before returning, so queries never see stale
//! counts, values or playability.

use smallvec::SmallVec;

use crate::cards::CardRegistry;
use crate::core::entity::CardId;
use crate::core::error::{DurakError, Result};
use crate::rules::playability::{self, Focus};
use crate::rules::sorting::SortMethod;

/// Derived values, recomputed after each mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Summary {
    total_value: u32,
    total_value_ignoring_trump: u32,
    playable: SmallVec<[CardId; 8]>,
}

/// Ordered cards held by one player.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    ids: Vec<CardId>,
    /// Stamp for the next card added.
    added: u64,
    /// Cards become revealed when they join this hand.
    reveals_on_add: bool,
    summary: Summary,
}

impl Hand {
    /// An empty hand. `reveals_on_add` marks cards face up as they arrive.
    #[must_use]
    pub fn new(reveals_on_add: bool) -> Self {
        Self {
            reveals_on_add,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn reveals_on_add(&self) -> bool {
        self.reveals_on_add
    }

    /// Append a card. No-op if it is already here; a card held anywhere
    /// else is rejected.
    pub fn add(&mut self, cards: &mut CardRegistry, id: CardId) -> Result<()> {
        if self.contains(id) {
            return Ok(());
        }
        cards[id].ensure_unheld()?;
        let capacity = cards.len();
        let card = &mut cards[id];
        card.set_hand_position(self.ids.len(), capacity)?;
        card.set_added_order(self.added);
        if self.reveals_on_add {
            card.set_revealed(true);
        }

        self.added += 1;
        self.ids.push(id);
        self.refresh(cards);
        Ok(())
    }

    /// Take a card out, closing the gap. Returns false if it was not here.
    pub fn remove(&mut self, cards: &mut CardRegistry, id: CardId) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        self.ids.remove(index);
        cards[id].reset_position();
        cards[id].set_playable(false);
        self.reindex(cards, index);
        self.refresh(cards);
        true
    }

    /// Re-derive every card's playable flag.
    ///
    /// `table_cards` are the cards the hand is judged against: all cards in
    /// play for an attacker, the uncovered attacks for a defender.
    pub fn recompute_playability(
        &mut self,
        cards: &mut CardRegistry,
        focus: Focus,
        table_cards: &[CardId],
    ) {
        let playable = playability::playable_subset(cards, &self.ids, focus, table_cards);
        for &id in &self.ids {
            cards[id].set_playable(playable.contains(&id));
        }
        self.summary.playable = playable;
    }

    /// Mark nothing playable.
    pub fn clear_playability(&mut self, cards: &mut CardRegistry) {
        for &id in &self.ids {
            cards[id].set_playable(false);
        }
        self.summary.playable.clear();
    }

    /// Reorder the hand. Insertion stamps are left alone.
    pub fn sort(&mut self, cards: &mut CardRegistry, method: SortMethod) {
        method.sort(cards, &mut self.ids);
        self.reindex(cards, 0);
        let order = &self.ids;
        self.summary.playable.sort_by_key(|id| order.iter().position(|x| x == id));
    }

    /// Drop every card and restart the insertion counter.
    pub fn clear(&mut self, cards: &mut CardRegistry) {
        for id in self.ids.drain(..) {
            cards[id].reset_position();
            cards[id].set_playable(false);
        }
        self.added = 0;
        self.summary = Summary::default();
    }

    // === Queries ===

    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Cards in display order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.ids
    }

    /// Playable cards in display order.
    #[must_use]
    pub fn playable(&self) -> &[CardId] {
        &self.summary.playable
    }

    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.summary.total_value
    }

    #[must_use]
    pub fn total_value_ignoring_trump(&self) -> u32 {
        self.summary.total_value_ignoring_trump
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.ids.iter().position(|&c| c == id)
    }

    /// Check that hand indices are contiguous from 0.
    pub fn validate(&self, cards: &CardRegistry) -> Result<()> {
        for (expected, &id) in self.ids.iter().enumerate() {
            let found = cards[id].location().hand_index();
            if found != Some(expected) {
                return Err(DurakError::InvariantViolation(format!(
                    "{} is hand card {expected} but located at {:?}",
                    cards[id],
                    cards[id].location()
                )));
            }
        }
        Ok(())
    }

    fn reindex(&self, cards: &mut CardRegistry, from: usize) {
        let capacity = cards.len();
        for (index, &id) in self.ids.iter().enumerate().skip(from) {
            // index < ids.len() <= capacity
            let _ = cards[id].set_hand_position(index, capacity);
        }
    }

    fn refresh(&mut self, cards: &CardRegistry) {
        self.summary.total_value = self
            .ids
            .iter()
            .map(|&id| u32::from(cards[id].effective_value()))
            .sum();
        self.summary.total_value_ignoring_trump = self
            .ids
            .iter()
            .map(|&id| u32::from(cards[id].rank_value()))
            .sum();
        self.summary.playable.retain(|id| self.ids.contains(id));
    }
}
