//! Deal-time rules: who attacks first, and which deals are re-dealt.

use crate::cards::{CardRegistry, Suit};
use crate::core::entity::CardId;
use crate::core::player::{PlayerId, PlayerMap};

/// Lowest trump in `hand`, by rank.
#[must_use]
pub fn lowest_trump(cards: &CardRegistry, hand: &[CardId]) -> Option<CardId> {
    hand.iter()
        .copied()
        .filter(|&id| cards[id].is_trump())
        .min_by_key(|&id| cards[id].rank_value())
}

/// Player who opens the first bout.
///
/// The holder of the lowest trump attacks. If neither hand holds a trump,
/// `default` attacks.
#[must_use]
pub fn starting_attacker(
    cards: &CardRegistry,
    hands: &PlayerMap<&[CardId]>,
    default: PlayerId,
) -> PlayerId {
    hands
        .iter()
        .filter_map(|(player, hand)| {
            lowest_trump(cards, hand).map(|id| (cards[id].rank_value(), player))
        })
        .min()
        .map_or(default, |(_, player)| player)
}

/// First suit of which `hand` holds more than `max` cards.
#[must_use]
pub fn suit_overflow(cards: &CardRegistry, hand: &[CardId], max: usize) -> Option<Suit> {
    let mut counts = [0usize; 4];
    for &id in hand {
        counts[cards[id].suit().index()] += 1;
    }
    Suit::ALL.into_iter().find(|suit| counts[suit.index()] > max)
}
