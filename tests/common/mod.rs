//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use durak_core::{CardFace, CardId, DeckVariant, RandomSource, Suit};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Randomness that deals a fixed deck.
///
/// `top` lists the faces to put on top of the deck, first drawn first;
/// the remaining cards follow in generation order. The trump suit is
/// always `trump`.
#[derive(Clone, Debug)]
pub struct StackedDeck {
    top: Vec<CardFace>,
    trump: Suit,
    variant: DeckVariant,
}

impl StackedDeck {
    pub fn new(trump: Suit, top: &[&str]) -> Self {
        Self {
            top: top.iter().map(|f| f.parse().unwrap()).collect(),
            trump,
            variant: DeckVariant::Short,
        }
    }

    /// Leave the deck in generation order: every deal hands player 0 six
    /// hearts.
    pub fn unshuffled() -> Self {
        Self::new(Suit::Hearts, &[])
    }

    fn id_of(&self, face: CardFace) -> CardId {
        durak_core::CardRegistry::new(self.variant).find(face).unwrap()
    }
}

impl RandomSource for StackedDeck {
    fn shuffle_cards(&mut self, cards: &mut [CardId]) {
        let wanted: Vec<CardId> = self.top.iter().map(|&f| self.id_of(f)).collect();
        let mut rest: Vec<CardId> = cards.iter().copied().filter(|c| !wanted.contains(c)).collect();
        let mut order = wanted;
        order.append(&mut rest);
        cards.copy_from_slice(&order);
    }

    fn pick_index(&mut self, _len: usize) -> usize {
        self.trump.index()
    }
}
