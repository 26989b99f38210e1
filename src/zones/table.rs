//! The table: attack positions with a bottom and a top slot each.
//!
//! The attacker fills the bottom slot of an empty position, the defender
//! covers it with the top slot of the same position. At the end of a bout
//! the whole table is swept at once.

use smallvec::SmallVec;

use crate::cards::{CardRegistry, Rank, StackSlot};
use crate::core::entity::CardId;
use crate::core::error::{DurakError, Result};

/// Number of attack positions on the table.
pub const TABLE_POSITIONS: usize = 6;

/// Cards on the table in placement order. Never more than twelve.
pub type TableCards = SmallVec<[CardId; 12]>;

/// Fixed grid of positions x stack slots.
#[derive(Clone, Debug, Default)]
pub struct Table {
    slots: [[Option<CardId>; 2]; TABLE_POSITIONS],
    /// Occupied slots in the order they were filled.
    placed: SmallVec<[(usize, StackSlot); 12]>,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `id` into a slot.
    ///
    /// The card's location becomes this slot and its transient flags are
    /// cleared. Fails without touching anything if the slot is out of
    /// range or already holds a card, or if the card is held elsewhere.
    pub fn place(
        &mut self,
        cards: &mut CardRegistry,
        id: CardId,
        position: usize,
        slot: StackSlot,
    ) -> Result<()> {
        check_position(position)?;
        if self.slots[position][slot.index()].is_some() {
            return Err(DurakError::SlotOccupied { position, slot });
        }
        cards[id].ensure_unheld()?;

        let card = &mut cards[id];
        card.set_table_position(position, slot)?;
        card.reset_state();

        self.slots[position][slot.index()] = Some(id);
        self.placed.push((position, slot));
        Ok(())
    }

    /// Card in a slot, if any.
    pub fn slot(&self, position: usize, slot: StackSlot) -> Result<Option<CardId>> {
        check_position(position)?;
        Ok(self.slots[position][slot.index()])
    }

    /// Lowest position whose bottom slot is empty. `None` when every
    /// position already holds an attack.
    #[must_use]
    pub fn find_empty_attack_position(&self) -> Option<usize> {
        self.slots.iter().position(|pair| pair[0].is_none())
    }

    /// Every card on the table in placement order.
    #[must_use]
    pub fn cards_in_play(&self) -> TableCards {
        self.placed
            .iter()
            .filter_map(|&(position, slot)| self.slots[position][slot.index()])
            .collect()
    }

    /// Attack cards that have not been covered yet, by position.
    #[must_use]
    pub fn undefended_attacks(&self) -> TableCards {
        self.slots
            .iter()
            .filter_map(|pair| match pair {
                [Some(bottom), None] => Some(*bottom),
                _ => None,
            })
            .collect()
    }

    /// Positions holding an attack, defended or not.
    #[must_use]
    pub fn attack_count(&self) -> usize {
        self.slots.iter().filter(|pair| pair[0].is_some()).count()
    }

    /// True when at least one attack is on the table and all are covered.
    #[must_use]
    pub fn all_defended(&self) -> bool {
        self.attack_count() > 0 && self.undefended_attacks().is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Ranks present on the table.
    #[must_use]
    pub fn ranks_in_play(&self, cards: &CardRegistry) -> SmallVec<[Rank; 12]> {
        let mut ranks: SmallVec<[Rank; 12]> =
            self.cards_in_play().iter().map(|&id| cards[id].rank()).collect();
        ranks.sort_unstable();
        ranks.dedup();
        ranks
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.slots.iter().flatten().any(|&slot| slot == Some(id))
    }

    /// Empty every slot and return what was there, in placement order.
    ///
    /// The cards themselves are untouched; the caller moves them on.
    pub fn sweep(&mut self) -> TableCards {
        let swept = self.cards_in_play();
        self.slots = [[None; 2]; TABLE_POSITIONS];
        self.placed.clear();
        swept
    }

    /// Check that each occupied slot's card points back at that slot.
    pub fn validate(&self, cards: &CardRegistry) -> Result<()> {
        for (position, pair) in self.slots.iter().enumerate() {
            for slot in StackSlot::ALL {
                if let Some(id) = pair[slot.index()] {
                    let found = cards[id].location().table_slot();
                    if found != Some((position, slot)) {
                        return Err(DurakError::InvariantViolation(format!(
                            "{} sits at table {position}/{slot:?} but is located at {:?}",
                            cards[id],
                            cards[id].location()
                        )));
                    }
                }
            }
            if pair[0].is_none() && pair[1].is_some() {
                return Err(DurakError::InvariantViolation(format!(
                    "table position {position} has a defense without an attack"
                )));
            }
        }
        Ok(())
    }
}

fn check_position(position: usize) -> Result<()> {
    if position < TABLE_POSITIONS {
        Ok(())
    } else {
        Err(DurakError::OutOfRange {
            what: "table position",
            index: position,
            limit: TABLE_POSITIONS,
        })
    }
}
