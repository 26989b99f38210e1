//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, Location, StackSlot};
use crate::core::{Action, CardId, PlayerId};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> PyResult<Self> {
        Ok(Self(PlayerId::try_from(id)?))
    }

    fn index(&self) -> usize {
        self.0.index()
    }

    #[getter]
    fn id(&self) -> u8 {
        self.0.into()
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.index())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Lay `card` at `position`; `slot` is 0 (bottom) or 1 (top).
    #[staticmethod]
    fn play(card: u8, position: usize, slot: u8) -> PyResult<Self> {
        Ok(Self(Action::Play {
            card: CardId(card),
            position,
            slot: StackSlot::try_from(slot)?,
        }))
    }

    #[staticmethod]
    fn end_attack() -> Self {
        Self(Action::EndAttack)
    }

    #[staticmethod]
    fn take_cards() -> Self {
        Self(Action::TakeCards)
    }

    /// "play", "end_attack" or "take_cards".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Action::Play { .. } => "play",
            Action::EndAttack => "end_attack",
            Action::TakeCards => "take_cards",
        }
    }

    #[getter]
    fn card(&self) -> Option<u8> {
        self.0.card().map(CardId::raw)
    }

    #[getter]
    fn position(&self) -> Option<usize> {
        match self.0 {
            Action::Play { position, .. } => Some(position),
            _ => None,
        }
    }

    #[getter]
    fn slot(&self) -> Option<u8> {
        match self.0 {
            Action::Play { slot, .. } => Some(slot.index() as u8),
            _ => None,
        }
    }

    fn __repr__(&self) -> String {
        match self.0 {
            Action::Play {
                card,
                position,
                slot,
            } => format!("Action.play({}, {position}, {})", card.0, slot.index()),
            Action::EndAttack => "Action.end_attack()".to_string(),
            Action::TakeCards => "Action.take_cards()".to_string(),
        }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Read-only snapshot of a card for rendering.
#[pyclass(name = "Card", get_all)]
#[derive(Clone, Debug)]
pub struct PyCard {
    pub id: u8,
    pub suit: String,
    pub rank: u16,
    pub is_trump: bool,
    pub effective_value: u16,
    pub selected: bool,
    pub hovered: bool,
    pub revealed: bool,
    pub playable: bool,
    pub arrived: bool,
    /// "nowhere", "deck", "hand", "table" or "discard".
    pub location: String,
    /// Index within the container; table cards use the position.
    pub index: Option<usize>,
}

impl PyCard {
    pub fn snapshot(id: CardId, card: &Card) -> Self {
        let (location, index) = match card.location() {
            Location::Nowhere => ("nowhere", None),
            Location::Deck(i) => ("deck", Some(i)),
            Location::Hand(i) => ("hand", Some(i)),
            Location::Table { position, .. } => ("table", Some(position)),
            Location::Discard(i) => ("discard", Some(i)),
        };
        Self {
            id: id.raw(),
            suit: card.suit().to_string(),
            rank: card.rank_value(),
            is_trump: card.is_trump(),
            effective_value: card.effective_value(),
            selected: card.selected(),
            hovered: card.hovered(),
            revealed: card.revealed(),
            playable: card.playable(),
            arrived: card.arrived(),
            location: location.to_string(),
            index,
        }
    }
}

#[pymethods]
impl PyCard {
    fn __repr__(&self) -> String {
        format!("Card({}, {}{})", self.id, self.rank, self.suit)
    }
}
