//! Player actions and the action history.
//!
//! An `Action` is one rule-level move: lay a card, stop attacking, or pick
//! up the table. Cosmetic commands (select, hover, sort) are not actions
//! and are never recorded.

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use super::player::PlayerId;
use crate::cards::StackSlot;

/// A rule-level move.
///
/// ```
/// use durak_core::cards::StackSlot;
/// use durak_core::core::{Action, CardId};
///
/// let attack = Action::Play { card: CardId(4), position: 0, slot: StackSlot::Bottom };
/// assert_eq!(attack.card(), Some(CardId(4)));
/// assert_eq!(Action::EndAttack.card(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Lay `card` on the table.
    Play {
        card: CardId,
        position: usize,
        slot: StackSlot,
    },
    /// Attacker is done; every attack has been beaten.
    EndAttack,
    /// Defender gives up and picks up the table.
    TakeCards,
}

impl Action {
    /// The card this action moves, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Action::Play { card, .. } => Some(*card),
            Action::EndAttack | Action::TakeCards => None,
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Sequence number within the round.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
