//! Deterministic random number generation.
//!
//! The engine consumes randomness in exactly two places: shuffling the live
//! deck and choosing the trump suit. Both go through the `RandomSource`
//! trait so tests can force a particular deal.
//!
//! ```
//! use durak_core::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(a.pick_index(1000), b.pick_index(1000));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::entity::CardId;

/// Source of randomness consumed by the deck.
pub trait RandomSource {
    /// Shuffle card handles in place.
    fn shuffle_cards(&mut self, cards: &mut [CardId]);

    /// Pick an index uniformly from `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Deterministic, seedable RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn shuffle_cards(&mut self, cards: &mut [CardId]) {
        cards.shuffle(&mut self.inner);
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
