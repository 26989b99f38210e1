//! Game bindings for Python.

use pyo3::prelude::*;

use crate::cards::StackSlot;
use crate::core::{CardId, DeckVariant, GameConfig, PlayerId};
use crate::games::{DurakGame, DurakGameBuilder};
use crate::players::PlayerKind;
use crate::rules::{GameResult, RulesEngine, SortMethod};

use super::py_core::{PyAction, PyCard, PyPlayerId};

/// Python wrapper for DurakGame.
#[pyclass(name = "DurakGame")]
pub struct PyDurakGame {
    game: DurakGame,
}

fn ids(cards: &[CardId]) -> Vec<u8> {
    cards.iter().map(|id| id.raw()).collect()
}

#[pymethods]
impl PyDurakGame {
    /// Create and deal a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - full_deck: use the 52-card deck instead of the 36-card one
    /// - hand_size: cards each hand is refilled to
    /// - computer_opponent: seat 1 is a computer whose cards stay hidden
    #[new]
    #[pyo3(signature = (seed = 0, full_deck = false, hand_size = 6, computer_opponent = true))]
    fn new(seed: u64, full_deck: bool, hand_size: usize, computer_opponent: bool) -> PyResult<Self> {
        let variant = if full_deck {
            DeckVariant::Full
        } else {
            DeckVariant::Short
        };
        let kind = if computer_opponent {
            PlayerKind::Computer
        } else {
            PlayerKind::Human
        };
        let game = DurakGameBuilder::new()
            .config(
                GameConfig::new()
                    .with_variant(variant)
                    .with_hand_size(hand_size),
            )
            .player(PlayerId::new(1), "Computer", kind)
            .seed(seed)
            .build()?;
        Ok(Self { game })
    }

    // === Queries ===

    fn card(&self, id: u8) -> PyResult<PyCard> {
        let id = CardId(id);
        Ok(PyCard::snapshot(id, self.game.card(id)?))
    }

    /// Cards of a player's hand in display order.
    fn hand(&self, player: &PyPlayerId) -> Vec<u8> {
        ids(self.game.player(player.0).hand().ids())
    }

    fn playable(&self, player: &PyPlayerId) -> Vec<u8> {
        ids(self.game.player(player.0).hand().playable())
    }

    fn table_slot(&self, position: usize, slot: u8) -> PyResult<Option<u8>> {
        let slot = StackSlot::try_from(slot)?;
        Ok(self.game.table().slot(position, slot)?.map(CardId::raw))
    }

    #[getter]
    fn deck_count(&self) -> usize {
        self.game.deck().count()
    }

    #[getter]
    fn top_card(&self) -> Option<u8> {
        self.game.deck().top_card().map(CardId::raw)
    }

    #[getter]
    fn trump_suit(&self) -> Option<String> {
        self.game.trump_suit().map(|s| s.to_string())
    }

    #[getter]
    fn active_player(&self) -> PyPlayerId {
        PyPlayerId(self.game.seats().active())
    }

    #[getter]
    fn attacker(&self) -> PyPlayerId {
        PyPlayerId(self.game.seats().attacker())
    }

    #[getter]
    fn round(&self) -> u32 {
        self.game.round()
    }

    /// Winner once the game is over; `None` while it runs or on a draw.
    fn winner(&self) -> Option<PyPlayerId> {
        match self.game.outcome() {
            Some(GameResult::Winner(p)) => Some(PyPlayerId(p)),
            _ => None,
        }
    }

    fn is_terminal(&self) -> bool {
        self.game.is_terminal()
    }

    fn legal_actions(&self) -> Vec<PyAction> {
        let player = self.game.seats().active();
        self.game
            .legal_actions(player)
            .into_iter()
            .map(PyAction)
            .collect()
    }

    // === Commands ===

    fn apply_action(&mut self, action: &PyAction) -> PyResult<()> {
        let player = self.game.seats().active();
        Ok(self.game.apply_action(player, action.0)?)
    }

    fn select(&mut self, id: u8) -> PyResult<()> {
        Ok(self.game.select(CardId(id))?)
    }

    fn deselect(&mut self) {
        self.game.deselect();
    }

    #[pyo3(signature = (id = None))]
    fn hover(&mut self, id: Option<u8>) -> PyResult<()> {
        Ok(self.game.hover(id.map(CardId))?)
    }

    fn play(&mut self, id: u8, position: usize, slot: u8) -> PyResult<()> {
        let slot = StackSlot::try_from(slot)?;
        Ok(self.game.play(CardId(id), position, slot)?)
    }

    fn draw(&mut self, player: &PyPlayerId) -> PyResult<Option<u8>> {
        Ok(self.game.draw(player.0)?.map(CardId::raw))
    }

    /// Sort a hand; `method` is e.g. "by_suit" or "by_time_added".
    fn sort(&mut self, player: &PyPlayerId, method: &str) -> PyResult<()> {
        let method: SortMethod = method.parse()?;
        self.game.sort(player.0, method);
        Ok(())
    }

    fn end_attack(&mut self) -> PyResult<()> {
        Ok(self.game.end_attack()?)
    }

    fn take_cards(&mut self) -> PyResult<()> {
        Ok(self.game.take_cards()?)
    }

    fn restart_game(&mut self) -> PyResult<()> {
        Ok(self.game.restart_game()?)
    }

    fn __repr__(&self) -> String {
        let status = if self.game.is_terminal() {
            "over"
        } else {
            "running"
        };
        format!(
            "DurakGame(round={}, active=P{}, deck={}, status={})",
            self.game.round(),
            self.game.seats().active().0,
            self.game.deck().count(),
            status
        )
    }
}
