//! A seated player.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::rules::playability::Focus;
use crate::zones::hand::Hand;

/// Who is behind a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

impl PlayerKind {
    /// Whether cards are turned face up as they reach this player's hand.
    #[must_use]
    pub const fn reveals_hand(self) -> bool {
        matches!(self, PlayerKind::Human)
    }
}

/// Name, kind, turn state and hand of one seat.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    kind: PlayerKind,
    active: bool,
    focus: Focus,
    hand: Hand,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            active: false,
            focus: Focus::Defending,
            hand: Hand::new(kind.reveals_hand()),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Is it this player's move?
    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }
}
