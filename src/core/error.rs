//! Engine error type.
//!
//! Most variants are programming-level faults rejected at the boundary:
//! the command that raised them leaves the game untouched. Mutations that
//! are no-ops by design (adding a card already in a hand, removing one that
//! is absent) never produce an error.

use thiserror::Error;

use super::entity::CardId;
use super::player::PlayerId;
use crate::cards::StackSlot;

/// Errors raised by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurakError {
    /// A suit, rank, sort method or config value outside the recognized set.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A position or index outside the bounds of its container.
    #[error("{what} index {index} out of range (limit {limit})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        limit: usize,
    },

    /// Placing onto a table slot that already holds a card.
    #[error("table slot {slot:?} at position {position} is occupied")]
    SlotOccupied { position: usize, slot: StackSlot },

    /// A focus value that is neither attacking nor defending.
    #[error("unknown focus: {0}")]
    UnknownFocus(String),

    /// Internal bookkeeping disagrees with itself.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Every allowed re-deal still broke the suit-count rule.
    #[error("initial deal failed after {attempts} attempts")]
    DealExhausted { attempts: u32 },

    /// The card is not in the hand the command expected.
    #[error("{0} is not in a hand")]
    CardNotInHand(CardId),

    /// A player tried to act while the other player holds the turn.
    #[error("{0} is not the active player")]
    NotYourTurn(PlayerId),

    /// The move breaks the attack or defense rules.
    #[error("illegal play: {0}")]
    IllegalPlay(String),

    /// The game has already been decided.
    #[error("the game is over")]
    GameOver,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DurakError>;
