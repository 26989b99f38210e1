//! The live deck.
//!
//! Built from the sealed population on every `create`, drained by draws.
//! Handles are stored bottom first so drawing the top card is a `pop`.
//! Every live card carries `Location::Deck(depth)` where depth 0 was the
//! top card when the deck was built; depths are not relabelled as the deck
//! drains, so the top card is always the live card with the smallest depth.

use tracing::debug;

use crate::cards::{CardRegistry, Rank, Suit};
use crate::core::entity::CardId;
use crate::core::error::{DurakError, Result};
use crate::core::rng::RandomSource;

/// Shuffled, trump-marked subset of the sealed population.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    /// Bottom first, top last.
    live: Vec<CardId>,
    trump_suit: Option<Suit>,
    total_value: u32,
}

impl Deck {
    /// An empty deck with no trump.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the live deck.
    ///
    /// Previously live cards are released, the sealed cards at or above
    /// `lowest_rank` are shuffled, a trump suit is drawn uniformly from the
    /// four suits, and trump flags are reassigned across the population.
    /// Fails before touching anything if one of those cards is still held
    /// by another container.
    pub fn create<R: RandomSource + ?Sized>(
        &mut self,
        cards: &mut CardRegistry,
        rng: &mut R,
        lowest_rank: Rank,
    ) -> Result<()> {
        if lowest_rank < cards.variant().lowest_rank() {
            return Err(DurakError::InvalidValue(format!(
                "lowest rank {lowest_rank} is not in the {:?} deck",
                cards.variant()
            )));
        }

        if let Some(held) = cards.ids().find(|&id| {
            let location = cards[id].location();
            cards[id].rank() >= lowest_rank
                && !location.is_nowhere()
                && location.deck_index().is_none()
        }) {
            return Err(DurakError::InvariantViolation(format!(
                "{} is still held at {:?}",
                cards[held],
                cards[held].location()
            )));
        }

        self.clear(cards);

        let mut order: Vec<CardId> = cards
            .ids()
            .filter(|&id| cards[id].rank() >= lowest_rank)
            .collect();
        rng.shuffle_cards(&mut order);
        let trump = Suit::ALL[rng.pick_index(Suit::ALL.len())];

        let capacity = cards.len();
        for id in cards.ids() {
            cards[id].set_trump(false);
        }
        for (depth, &id) in order.iter().enumerate() {
            let card = &mut cards[id];
            card.set_trump(card.suit() == trump);
            card.set_deck_position(depth, capacity)?;
        }

        order.reverse();
        self.live = order;
        self.trump_suit = Some(trump);
        self.refresh(cards);

        debug!(trump = %trump, count = self.live.len(), "deck created");
        Ok(())
    }

    /// Remove and return the top card.
    pub fn draw_next(&mut self, cards: &mut CardRegistry) -> Option<CardId> {
        let id = self.live.pop()?;
        cards[id].reset_position();
        self.refresh(cards);
        Some(id)
    }

    /// Remove and return the live card with the greatest effective value.
    ///
    /// Ties go to the card nearest the top.
    pub fn draw_highest_value(&mut self, cards: &mut CardRegistry) -> Option<CardId> {
        let (index, _) = self
            .live
            .iter()
            .enumerate()
            .max_by_key(|&(_, &id)| cards[id].effective_value())?;
        let id = self.live.remove(index);
        cards[id].reset_position();
        self.refresh(cards);
        Some(id)
    }

    /// Take a specific card out of the deck. No-op if it is not live.
    pub fn remove(&mut self, cards: &mut CardRegistry, id: CardId) -> bool {
        match self.live.iter().position(|&c| c == id) {
            Some(index) => {
                self.live.remove(index);
                cards[id].reset_position();
                self.refresh(cards);
                true
            }
            None => false,
        }
    }

    /// Release every live card and forget the trump suit.
    pub fn clear(&mut self, cards: &mut CardRegistry) {
        for id in self.live.drain(..) {
            cards[id].reset_position();
        }
        self.trump_suit = None;
        self.total_value = 0;
    }

    // === Queries ===

    /// Number of live cards.
    #[must_use]
    pub fn count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Sum of effective values over the live cards.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.total_value
    }

    /// Trump suit of the current deal.
    #[must_use]
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_suit
    }

    /// Next card to be drawn.
    #[must_use]
    pub fn top_card(&self) -> Option<CardId> {
        self.live.last().copied()
    }

    /// Last card to be drawn.
    #[must_use]
    pub fn bottom_card(&self) -> Option<CardId> {
        self.live.first().copied()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.live.contains(&id)
    }

    /// Live cards, top first.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.live.iter().rev().copied()
    }

    /// Check that every live card points back at the deck, depths grow from
    /// top to bottom, and trump flags match the trump suit.
    pub fn validate(&self, cards: &CardRegistry) -> Result<()> {
        let mut previous: Option<usize> = None;
        for id in self.ids() {
            let card = &cards[id];
            let depth = card.location().deck_index().ok_or_else(|| {
                DurakError::InvariantViolation(format!(
                    "{} is in the deck but located at {:?}",
                    card,
                    card.location()
                ))
            })?;
            if previous.is_some_and(|p| depth <= p) {
                return Err(DurakError::InvariantViolation(format!(
                    "deck depth {depth} out of order"
                )));
            }
            previous = Some(depth);

            if let Some(trump) = self.trump_suit {
                if card.is_trump() != (card.suit() == trump) {
                    return Err(DurakError::InvariantViolation(format!(
                        "{card} has the wrong trump flag"
                    )));
                }
            }
        }
        Ok(())
    }

    fn refresh(&mut self, cards: &CardRegistry) {
        self.total_value = self
            .live
            .iter()
            .map(|&id| u32::from(cards[id].effective_value()))
            .sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Location;
    use crate::core::config::DeckVariant;
    use crate::core::rng::GameRng;
    use rustc_hash::FxHashSet;

    fn fresh(variant: DeckVariant, lowest: Rank) -> (Deck, CardRegistry) {
        let mut cards = CardRegistry::new(variant);
        let mut deck = Deck::new();
        deck.create(&mut cards, &mut GameRng::new(42), lowest).unwrap();
        (deck, cards)
    }

    #[test]
    fn test_create_short_deck() {
        let (deck, cards) = fresh(DeckVariant::Short, Rank::Six);
        assert_eq!(deck.count(), 36);
        assert!(deck.trump_suit().is_some());
        deck.validate(&cards).unwrap();
    }

    #[test]
    fn test_create_filters_low_ranks() {
        let (deck, cards) = fresh(DeckVariant::Full, Rank::Six);
        assert_eq!(deck.count(), 36);
        assert!(deck.ids().all(|id| cards[id].rank() >= Rank::Six));
        // Filtered cards stay out of the deck
        let two = cards.find("2H".parse().unwrap()).unwrap();
        assert_eq!(cards[two].location(), Location::Nowhere);
    }

    #[test]
    fn test_create_rejects_rank_below_variant() {
        let mut cards = CardRegistry::new(DeckVariant::Short);
        let mut deck = Deck::new();
        let err = deck
            .create(&mut cards, &mut GameRng::new(1), Rank::Two)
            .unwrap_err();
        assert!(matches!(err, DurakError::InvalidValue(_)));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_trump_flags_follow_suit() {
        let (deck, cards) = fresh(DeckVariant::Short, Rank::Six);
        let trump = deck.trump_suit().unwrap();
        for id in deck.ids() {
            assert_eq!(cards[id].is_trump(), cards[id].suit() == trump);
        }
    }

    #[test]
    fn test_no_duplicates() {
        let (deck, _) = fresh(DeckVariant::Full, Rank::Two);
        let unique: FxHashSet<_> = deck.ids().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_draw_next_takes_top() {
        let (mut deck, mut cards) = fresh(DeckVariant::Short, Rank::Six);
        let top = deck.top_card().unwrap();
        assert_eq!(cards[top].location(), Location::Deck(0));

        let drawn = deck.draw_next(&mut cards).unwrap();
        assert_eq!(drawn, top);
        assert_eq!(cards[drawn].location(), Location::Nowhere);
        assert_eq!(deck.count(), 35);

        let next = deck.top_card().unwrap();
        assert_eq!(cards[next].location(), Location::Deck(1));
        deck.validate(&cards).unwrap();
    }

    #[test]
    fn test_draw_until_empty() {
        let (mut deck, mut cards) = fresh(DeckVariant::Short, Rank::Six);
        let mut drawn = 0;
        while deck.draw_next(&mut cards).is_some() {
            drawn += 1;
        }
        assert_eq!(drawn, 36);
        assert!(deck.is_empty());
        assert_eq!(deck.total_value(), 0);
        assert_eq!(deck.draw_next(&mut cards), None);
    }

    #[test]
    fn test_draw_highest_value_is_trump_ace() {
        let (mut deck, mut cards) = fresh(DeckVariant::Short, Rank::Six);
        let trump = deck.trump_suit().unwrap();

        let best = deck.draw_highest_value(&mut cards).unwrap();
        assert_eq!(cards[best].suit(), trump);
        assert_eq!(cards[best].rank(), Rank::Ace);
        assert_eq!(cards[best].effective_value(), 114);
        assert!(!deck.contains(best));
    }

    #[test]
    fn test_total_value_tracks_draws() {
        let (mut deck, mut cards) = fresh(DeckVariant::Short, Rank::Six);
        // 4 suits of 6..=14 plus 100 for each of the nine trumps
        let expected: u32 = 4 * (6..=14).sum::<u32>() + 9 * 100;
        assert_eq!(deck.total_value(), expected);

        let id = deck.draw_next(&mut cards).unwrap();
        let value = u32::from(cards[id].effective_value());
        assert_eq!(deck.total_value(), expected - value);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let (mut deck, mut cards) = fresh(DeckVariant::Short, Rank::Six);
        let id = deck.draw_next(&mut cards).unwrap();
        assert!(!deck.remove(&mut cards, id));
        assert_eq!(deck.count(), 35);

        let other = deck.bottom_card().unwrap();
        assert!(deck.remove(&mut cards, other));
        assert_eq!(deck.count(), 34);
    }

    #[test]
    fn test_create_rejects_cards_still_held() {
        let (mut deck, mut cards) = fresh(DeckVariant::Short, Rank::Six);
        let mut hand = crate::zones::Hand::new(false);
        let drawn = deck.draw_next(&mut cards).unwrap();
        hand.add(&mut cards, drawn).unwrap();
        let trump = deck.trump_suit();

        assert!(matches!(
            deck.create(&mut cards, &mut GameRng::new(9), Rank::Six),
            Err(DurakError::InvariantViolation(_))
        ));
        assert_eq!(deck.count(), 35);
        assert_eq!(deck.trump_suit(), trump);
        assert_eq!(cards[drawn].location(), Location::Hand(0));

        hand.clear(&mut cards);
        deck.create(&mut cards, &mut GameRng::new(9), Rank::Six).unwrap();
        assert_eq!(deck.count(), 36);
    }

    #[test]
    fn test_create_is_a_full_rebuild() {
        let mut cards = CardRegistry::new(DeckVariant::Short);
        let mut deck = Deck::new();
        let mut rng = GameRng::new(5);

        deck.create(&mut cards, &mut rng, Rank::Six).unwrap();
        for _ in 0..10 {
            deck.draw_next(&mut cards);
        }
        deck.create(&mut cards, &mut rng, Rank::Six).unwrap();

        assert_eq!(deck.count(), 36);
        deck.validate(&cards).unwrap();
    }
}
