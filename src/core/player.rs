//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The game is strictly two-handed, so the only
//! valid ids are `PlayerId(0)` and `PlayerId(1)`.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::DurakError;

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 2;

/// Seat identifier.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`. Ids are
/// only built through `new` or `TryFrom<u8>`, so an out-of-range seat never
/// reaches a `PlayerMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `id` does not name one of the two seats.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < SEAT_COUNT, "Seat index out of range");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat across the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seats.
    ///
    /// ```
    /// use durak_core::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEAT_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = DurakError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < SEAT_COUNT {
            Ok(Self(id))
        } else {
            Err(DurakError::OutOfRange {
                what: "seat",
                index: id as usize,
                limit: SEAT_COUNT,
            })
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> u8 {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use durak_core::core::{PlayerId, PlayerMap};
///
/// let mut taken: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// taken[PlayerId::new(1)] += 3;
///
/// assert_eq!(taken[PlayerId::new(0)], 0);
/// assert_eq!(taken[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow both entries mutably at once, `player`'s first.
    pub fn pair_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [a, b] = &mut self.data;
        if player.index() == 0 {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
