//! Card identity: suits, ranks and faces.
//!
//! `CardFace` is the immutable (suit, rank) pair of a card. Mutable
//! per-card state (trump flag, UI flags, location) lives in `Card`.
//!
//! Faces parse from the short notation used in tests and logs:
//!
//! ```
//! use durak_core::cards::{CardFace, Rank, Suit};
//!
//! let face: CardFace = "10S".parse().unwrap();
//! assert_eq!(face, CardFace::new(Suit::Spades, Rank::Ten));
//! assert_eq!(face.to_string(), "10S");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::{DurakError, Result};

/// Card suit.
///
/// Declaration order is the fixed suit priority used for sorting hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in priority order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-letter symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Position in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Suit {
    type Error = DurakError;

    fn try_from(value: u8) -> Result<Self> {
        Suit::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| DurakError::InvalidValue(format!("suit index {value}")))
    }
}

impl FromStr for Suit {
    type Err = DurakError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hearts" => Ok(Suit::Hearts),
            "d" | "diamonds" => Ok(Suit::Diamonds),
            "c" | "clubs" => Ok(Suit::Clubs),
            "s" | "spades" => Ok(Suit::Spades),
            other => Err(DurakError::InvalidValue(format!("suit {other:?}"))),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, Two (value 2) through Ace (value 14).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2..=14.
    #[must_use]
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Rank for a numeric value in 2..=14.
    pub fn from_value(value: u8) -> Result<Self> {
        if (2..=14).contains(&value) {
            Ok(Rank::ALL[(value - 2) as usize])
        } else {
            Err(DurakError::InvalidValue(format!("rank value {value}")))
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl FromStr for Rank {
    type Err = DurakError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            digits => digits
                .parse::<u8>()
                .map_err(|_| DurakError::InvalidValue(format!("rank {digits:?}")))
                .and_then(Rank::from_value),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Immutable identity of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardFace {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Build a face from raw suit index (0..4) and rank value (2..=14).
    pub fn from_values(suit: u8, rank: u8) -> Result<Self> {
        Ok(Self {
            suit: Suit::try_from(suit)?,
            rank: Rank::from_value(rank)?,
        })
    }
}

impl FromStr for CardFace {
    type Err = DurakError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .filter(|&i| i > 0)
            .ok_or_else(|| DurakError::InvalidValue(format!("card {s:?}")))?;
        let (rank, suit) = s.split_at(split);
        Ok(Self {
            suit: suit.parse()?,
            rank: rank.parse()?,
        })
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
