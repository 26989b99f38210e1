//! Rules engine trait.
//!
//! A game exposes its rule-level moves through `RulesEngine`:
//! - What actions are legal
//! - How an action changes the game
//! - Whether the game is over

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The player who got rid of their cards.
    Winner(PlayerId),
    /// Both hands emptied together.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The player left holding cards, if any.
    #[must_use]
    pub fn fool(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(p.opponent()),
            GameResult::Draw => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty if the player can't act right now
/// - `apply_action`: must be deterministic, and must leave the game
///   untouched when it returns an error
/// - `outcome`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Every action `player` may take now.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action>;

    /// Apply an action on behalf of `player`.
    fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<()>;

    /// Result of the game, once it has ended.
    fn outcome(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// True once the game has ended.
    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Is `action` among the legal actions for `player`?
    fn is_legal(&self, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(player).contains(action)
    }
}
