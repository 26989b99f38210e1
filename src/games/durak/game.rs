//! Durak game orchestration.

use im::Vector;
use tracing::{debug, info, warn};

use crate::cards::{Card, CardRegistry, StackSlot, Suit};
use crate::core::{
    Action, ActionRecord, CardId, DurakError, GameConfig, GameRng, PlayerId, PlayerMap,
    RandomSource, Result,
};
use crate::players::{Player, PlayerKind, Seats};
use crate::rules::playability::Focus;
use crate::rules::priority::{starting_attacker, suit_overflow};
use crate::rules::sorting::SortMethod;
use crate::rules::{GameResult, RulesEngine};
use crate::zones::{Deck, DiscardPile, Table, TableCards};

/// A two-player game of Durak.
///
/// Owns the card population, every container and both seats. Commands
/// check everything they depend on before touching any state, so a
/// command that returns an error leaves the game as it was. Hand summaries
/// and playability are refreshed before every command returns.
#[derive(Clone, Debug)]
pub struct DurakGame<R: RandomSource = GameRng> {
    config: GameConfig,
    cards: CardRegistry,
    deck: Deck,
    table: Table,
    discard: DiscardPile,
    seats: Seats,
    rng: R,
    /// Bouts completed since the deal.
    round: u32,
    /// Actions taken in the current round.
    sequence: u32,
    history: Vector<ActionRecord>,
    selected: Option<CardId>,
    hovered: Option<CardId>,
    outcome: Option<GameResult>,
    deal_attempts: u32,
}

/// Builder for creating a `DurakGame`.
#[derive(Clone, Debug)]
pub struct DurakGameBuilder {
    config: GameConfig,
    players: PlayerMap<(String, PlayerKind)>,
    seed: u64,
}

impl Default for DurakGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            players: PlayerMap::new(|id| {
                if id.index() == 0 {
                    ("Player".to_string(), PlayerKind::Human)
                } else {
                    ("Computer".to_string(), PlayerKind::Computer)
                }
            }),
            seed: 0,
        }
    }
}

impl DurakGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(mut self, seat: PlayerId, name: impl Into<String>, kind: PlayerKind) -> Self {
        self.players[seat] = (name.into(), kind);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the game with a seeded `GameRng` and deal.
    pub fn build(self) -> Result<DurakGame> {
        let rng = GameRng::new(self.seed);
        self.build_with_rng(rng)
    }

    /// Build the game with a custom randomness source and deal.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> Result<DurakGame<R>> {
        self.config.validate()?;

        let players = PlayerMap::new(|id| {
            let (name, kind) = self.players[id].clone();
            Player::new(id, name, kind)
        });

        let mut game = DurakGame {
            cards: CardRegistry::new(self.config.variant),
            deck: Deck::new(),
            table: Table::new(),
            discard: DiscardPile::new(),
            seats: Seats::new(players),
            rng,
            round: 0,
            sequence: 0,
            history: Vector::new(),
            selected: None,
            hovered: None,
            outcome: None,
            deal_attempts: 0,
            config: self.config,
        };
        game.deal_initial()?;
        Ok(game)
    }
}

impl<R: RandomSource> DurakGame<R> {
    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Checked card lookup.
    pub fn card(&self, id: CardId) -> Result<&Card> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[must_use]
    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.seats.get(id)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn trump_suit(&self) -> Option<Suit> {
        self.deck.trump_suit()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    #[must_use]
    pub fn hovered(&self) -> Option<CardId> {
        self.hovered
    }

    /// Shuffles it took to reach an acceptable deal.
    #[must_use]
    pub fn deal_attempts(&self) -> u32 {
        self.deal_attempts
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    // === Deal ===

    /// Deal both hands, re-dealing while any hand holds more than
    /// `max_cards_of_one_suit` cards of one suit.
    ///
    /// On success the holder of the lowest trump attacks. Gives up with
    /// `DealExhausted` after `max_deal_attempts` shuffles, leaving no cards
    /// dealt.
    pub fn deal_initial(&mut self) -> Result<()> {
        let attempts = self.config.max_deal_attempts;
        for attempt in 1..=attempts {
            debug!(attempt, "dealing");
            self.clear_containers();
            self.cards.reset_all();
            self.deck
                .create(&mut self.cards, &mut self.rng, self.config.lowest_rank)?;
            for player in PlayerId::all() {
                self.fill_to(player, self.config.hand_size)?;
            }

            let overflow = PlayerId::all().find_map(|player| {
                let hand = self.seats.get(player).hand().ids();
                suit_overflow(&self.cards, hand, self.config.max_cards_of_one_suit)
                    .map(|suit| (player, suit))
            });
            if let Some((player, suit)) = overflow {
                warn!(attempt, %player, %suit, "too many cards of one suit, re-dealing");
                continue;
            }

            let hands = PlayerMap::new(|p| self.seats.get(p).hand().ids());
            let attacker = starting_attacker(&self.cards, &hands, self.config.default_attacker);
            self.seats.assign_roles(attacker);
            self.deal_attempts = attempt;
            self.refresh_playability();

            info!(
                attempt,
                trump = ?self.deck.trump_suit(),
                %attacker,
                "cards dealt"
            );
            return self.check_invariants();
        }

        self.clear_containers();
        self.cards.reset_all();
        warn!(attempts, "no acceptable deal found");
        Err(DurakError::DealExhausted { attempts })
    }

    /// Start over with a fresh deal.
    pub fn restart_game(&mut self) -> Result<()> {
        self.round = 0;
        self.sequence = 0;
        self.history = Vector::new();
        self.selected = None;
        self.hovered = None;
        self.outcome = None;
        info!("game restarted");
        self.deal_initial()
    }

    // === Cosmetic commands ===

    /// Select a card in the active player's hand. Replaces any previous
    /// selection.
    pub fn select(&mut self, id: CardId) -> Result<()> {
        self.ensure_running()?;
        self.cards.get(id)?;
        let active = self.seats.active();
        if !self.seats.get(active).hand().contains(id) {
            return Err(DurakError::CardNotInHand(id));
        }
        self.deselect();
        self.cards[id].set_selected(true);
        self.selected = Some(id);
        Ok(())
    }

    /// Clear the selection. No-op when nothing is selected.
    pub fn deselect(&mut self) {
        if let Some(previous) = self.selected.take() {
            self.cards[previous].set_selected(false);
        }
    }

    /// Move the hover mark to `id`, or clear it.
    pub fn hover(&mut self, id: Option<CardId>) -> Result<()> {
        if let Some(id) = id {
            self.cards.get(id)?;
        }
        if let Some(previous) = self.hovered.take() {
            self.cards[previous].set_hovered(false);
        }
        if let Some(id) = id {
            self.cards[id].set_hovered(true);
            self.hovered = Some(id);
        }
        Ok(())
    }

    /// Reorder a player's hand.
    pub fn sort(&mut self, player: PlayerId, method: SortMethod) {
        self.seats
            .get_mut(player)
            .hand_mut()
            .sort(&mut self.cards, method);
    }

    // === Rule commands ===

    /// Lay a card from the active player's hand on the table.
    ///
    /// The attacker plays to the bottom slot of an empty position, the
    /// defender to the top slot of an uncovered attack, with a card that
    /// beats it. Passes the move to the other player.
    pub fn play(&mut self, id: CardId, position: usize, slot: StackSlot) -> Result<()> {
        self.ensure_running()?;
        let player = self.seats.active();
        self.check_play(player, id, position, slot)?;

        self.seats
            .get_mut(player)
            .hand_mut()
            .remove(&mut self.cards, id);
        self.table.place(&mut self.cards, id, position, slot)?;
        self.cards[id].set_revealed(true);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }

        debug!(%player, card = %self.cards[id], position, ?slot, "card played");
        self.record(player, Action::Play { card: id, position, slot });
        self.seats.switch_active();
        self.refresh_playability();
        self.check_invariants()
    }

    /// Attacker stops attacking once every attack is beaten.
    ///
    /// The table goes to the discard pile, both hands are refilled
    /// (attacker first), and the defender becomes the attacker.
    pub fn end_attack(&mut self) -> Result<()> {
        self.ensure_running()?;
        let attacker = self.seats.attacker();
        if self.seats.active() != attacker {
            return Err(DurakError::NotYourTurn(attacker));
        }
        if self.table.is_empty() {
            return Err(DurakError::IllegalPlay("no attack to end".into()));
        }
        if !self.table.all_defended() {
            return Err(DurakError::IllegalPlay(
                "an attack is still undefended".into(),
            ));
        }

        let swept = self.release_table();
        for &id in &swept {
            self.discard.add(&mut self.cards, id)?;
        }
        debug!(count = swept.len(), "table swept to discard");

        self.record(attacker, Action::EndAttack);
        self.fill_to(attacker, self.config.hand_size)?;
        self.fill_to(attacker.opponent(), self.config.hand_size)?;
        self.seats.switch_focus();
        self.seats.activate(Focus::Attacking);
        self.finish_bout();
        self.check_invariants()
    }

    /// Defender gives up and picks up every card on the table.
    ///
    /// The attacker refills and attacks again.
    pub fn take_cards(&mut self) -> Result<()> {
        self.ensure_running()?;
        let defender = self.seats.defender();
        if self.seats.active() != defender {
            return Err(DurakError::NotYourTurn(defender));
        }
        if self.table.is_empty() {
            return Err(DurakError::IllegalPlay("nothing to take".into()));
        }

        let swept = self.release_table();
        let hand = self.seats.get_mut(defender).hand_mut();
        for &id in &swept {
            hand.add(&mut self.cards, id)?;
        }
        debug!(%defender, count = swept.len(), "table taken");

        self.record(defender, Action::TakeCards);
        self.fill_to(defender.opponent(), self.config.hand_size)?;
        self.seats.activate(Focus::Attacking);
        self.finish_bout();
        self.check_invariants()
    }

    /// Move the top card of the deck into a player's hand.
    pub fn draw(&mut self, player: PlayerId) -> Result<Option<CardId>> {
        self.ensure_running()?;
        let drawn = self.draw_into(player)?;
        self.refresh_playability();
        self.check_invariants()?;
        Ok(drawn)
    }

    /// Draw until the hand holds `target` cards or the deck runs out.
    /// Returns the number of cards drawn.
    pub fn fill_hand(&mut self, player: PlayerId, target: usize) -> Result<usize> {
        self.ensure_running()?;
        let drawn = self.fill_to(player, target)?;
        self.refresh_playability();
        self.check_invariants()?;
        Ok(drawn)
    }

    /// Full invariant sweep: every card is held by exactly the container
    /// its location names, hand indices are contiguous, and the seats are
    /// consistent.
    pub fn validate(&self) -> Result<()> {
        self.deck.validate(&self.cards)?;
        self.table.validate(&self.cards)?;
        self.discard.validate(&self.cards)?;
        for (_, player) in self.seats.iter() {
            player.hand().validate(&self.cards)?;
        }
        self.seats.validate()?;

        for (id, card) in self.cards.iter() {
            let holders = usize::from(self.deck.contains(id))
                + usize::from(self.table.contains(id))
                + usize::from(self.discard.contains(id))
                + self
                    .seats
                    .iter()
                    .filter(|(_, p)| p.hand().contains(id))
                    .count();
            let expected = usize::from(!card.location().is_nowhere());
            if holders != expected {
                return Err(DurakError::InvariantViolation(format!(
                    "{card} is held by {holders} containers but located at {:?}",
                    card.location()
                )));
            }
        }
        Ok(())
    }

    // === Internals ===

    fn ensure_running(&self) -> Result<()> {
        match self.outcome {
            Some(_) => Err(DurakError::GameOver),
            None => Ok(()),
        }
    }

    fn check_invariants(&self) -> Result<()> {
        if self.config.strict_invariants {
            self.validate()
        } else {
            Ok(())
        }
    }

    fn check_play(
        &self,
        player: PlayerId,
        id: CardId,
        position: usize,
        slot: StackSlot,
    ) -> Result<()> {
        let card = self.cards.get(id)?;
        if !self.seats.get(player).hand().contains(id) {
            return Err(DurakError::CardNotInHand(id));
        }
        if self.table.slot(position, slot)?.is_some() {
            return Err(DurakError::SlotOccupied { position, slot });
        }
        if !card.playable() {
            return Err(DurakError::IllegalPlay(format!("{card} is not playable")));
        }

        match self.seats.get(player).focus() {
            Focus::Attacking => {
                if slot != StackSlot::Bottom {
                    return Err(DurakError::IllegalPlay(
                        "attacks go in the bottom slot".into(),
                    ));
                }
                if !self.can_add_attack() {
                    return Err(DurakError::IllegalPlay(
                        "the defender cannot answer another attack".into(),
                    ));
                }
            }
            Focus::Defending => {
                if slot != StackSlot::Top {
                    return Err(DurakError::IllegalPlay(
                        "defenses go in the top slot".into(),
                    ));
                }
                let bottom = self.table.slot(position, StackSlot::Bottom)?.ok_or_else(|| {
                    DurakError::IllegalPlay(format!("no attack at position {position}"))
                })?;
                let target = &self.cards[bottom];
                if !card.compare_greater(target) {
                    return Err(DurakError::IllegalPlay(format!(
                        "{card} does not beat {target}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Another attack fits on the table and the defender can still answer it.
    fn can_add_attack(&self) -> bool {
        let defender_cards = self.seats.get(self.seats.defender()).hand().count();
        self.table.find_empty_attack_position().is_some()
            && self.table.undefended_attacks().len() < defender_cards
    }

    fn draw_into(&mut self, player: PlayerId) -> Result<Option<CardId>> {
        let Some(id) = self.deck.draw_next(&mut self.cards) else {
            return Ok(None);
        };
        self.seats
            .get_mut(player)
            .hand_mut()
            .add(&mut self.cards, id)?;
        Ok(Some(id))
    }

    fn fill_to(&mut self, player: PlayerId, target: usize) -> Result<usize> {
        let mut drawn = 0;
        while self.seats.get(player).hand().count() < target {
            if self.draw_into(player)?.is_none() {
                break;
            }
            drawn += 1;
        }
        Ok(drawn)
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        self.history
            .push_back(ActionRecord::new(player, action, self.round, self.sequence));
        self.sequence += 1;
    }

    fn finish_bout(&mut self) {
        self.round += 1;
        self.sequence = 0;
        self.outcome = self.evaluate_outcome();
        self.refresh_playability();

        match self.outcome {
            Some(result) => info!(round = self.round, ?result, "game over"),
            None => info!(
                round = self.round,
                attacker = %self.seats.attacker(),
                deck = self.deck.count(),
                "round started"
            ),
        }
    }

    fn evaluate_outcome(&self) -> Option<GameResult> {
        if !self.deck.is_empty() || !self.table.is_empty() {
            return None;
        }
        let empty = PlayerMap::new(|p| self.seats.get(p).hand().is_empty());
        match (empty[PlayerId::new(0)], empty[PlayerId::new(1)]) {
            (true, true) => Some(GameResult::Draw),
            (true, false) => Some(GameResult::Winner(PlayerId::new(0))),
            (false, true) => Some(GameResult::Winner(PlayerId::new(1))),
            (false, false) => None,
        }
    }

    /// Re-derive playability for both hands.
    ///
    /// The attacker is judged against every card in play, the defender
    /// against the uncovered attacks only.
    fn refresh_playability(&mut self) {
        let attacker = self.seats.attacker();
        let defender = attacker.opponent();

        if self.outcome.is_some() {
            for player in [attacker, defender] {
                self.seats
                    .get_mut(player)
                    .hand_mut()
                    .clear_playability(&mut self.cards);
            }
            return;
        }

        let in_play = self.table.cards_in_play();
        let undefended = self.table.undefended_attacks();
        let can_attack = self.can_add_attack();

        let hand = self.seats.get_mut(attacker).hand_mut();
        if can_attack {
            hand.recompute_playability(&mut self.cards, Focus::Attacking, &in_play);
        } else {
            hand.clear_playability(&mut self.cards);
        }
        self.seats
            .get_mut(defender)
            .hand_mut()
            .recompute_playability(&mut self.cards, Focus::Defending, &undefended);
    }

    /// Sweep the table, leaving the swept cards unheld.
    fn release_table(&mut self) -> TableCards {
        let swept = self.table.sweep();
        for &id in &swept {
            self.cards[id].reset_position();
        }
        swept
    }

    fn clear_containers(&mut self) {
        for (_, player) in self.seats.iter_mut() {
            player.hand_mut().clear(&mut self.cards);
        }
        self.release_table();
        self.discard.clear(&mut self.cards);
        self.deck.clear(&mut self.cards);
    }
}

impl<R: RandomSource> RulesEngine for DurakGame<R> {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.outcome.is_some() || self.seats.active() != player {
            return Vec::new();
        }
        let hand = self.seats.get(player).hand();
        let mut actions = Vec::new();

        match self.seats.get(player).focus() {
            Focus::Attacking => {
                if let Some(position) = self.table.find_empty_attack_position() {
                    if self.can_add_attack() {
                        actions.extend(hand.playable().iter().map(|&card| Action::Play {
                            card,
                            position,
                            slot: StackSlot::Bottom,
                        }));
                    }
                }
                if self.table.all_defended() {
                    actions.push(Action::EndAttack);
                }
            }
            Focus::Defending => {
                for attack in self.table.undefended_attacks() {
                    let Some((position, _)) = self.cards[attack].location().table_slot() else {
                        continue;
                    };
                    let target = &self.cards[attack];
                    actions.extend(
                        hand.ids()
                            .iter()
                            .filter(|&&card| self.cards[card].compare_greater(target))
                            .map(|&card| Action::Play {
                                card,
                                position,
                                slot: StackSlot::Top,
                            }),
                    );
                }
                if !self.table.is_empty() {
                    actions.push(Action::TakeCards);
                }
            }
        }
        actions
    }

    fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<()> {
        self.ensure_running()?;
        if self.seats.active() != player {
            return Err(DurakError::NotYourTurn(player));
        }
        match action {
            Action::Play {
                card,
                position,
                slot,
            } => self.play(card, position, slot),
            Action::EndAttack => self.end_attack(),
            Action::TakeCards => self.take_cards(),
        }
    }

    fn outcome(&self) -> Option<GameResult> {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Location;

    fn game(seed: u64) -> DurakGame {
        DurakGameBuilder::new()
            .config(GameConfig::new().with_strict_invariants(true))
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_initial_deal() {
        let g = game(7);
        for (_, player) in g.seats().iter() {
            assert_eq!(player.hand().count(), 6);
        }
        assert_eq!(g.deck().count(), 36 - 12);
        assert!(g.table().is_empty());
        assert_eq!(g.round(), 0);
        assert!(g.deal_attempts() >= 1);
        g.validate().unwrap();
    }

    #[test]
    fn test_attacker_opens_with_any_card() {
        let g = game(3);
        let attacker = g.seats().attacker();
        assert_eq!(g.seats().active(), attacker);
        assert_eq!(g.player(attacker).hand().playable().len(), 6);
        assert!(g.player(attacker.opponent()).hand().playable().is_empty());
    }

    #[test]
    fn test_human_hand_is_revealed() {
        let g = game(11);
        let human = g.player(PlayerId::new(0));
        let computer = g.player(PlayerId::new(1));
        assert!(human.hand().ids().iter().all(|&id| g.cards()[id].revealed()));
        assert!(computer.hand().ids().iter().all(|&id| !g.cards()[id].revealed()));
    }

    #[test]
    fn test_attack_passes_the_move() {
        let mut g = game(5);
        let attacker = g.seats().attacker();
        let card = g.player(attacker).hand().ids()[0];

        g.play(card, 0, StackSlot::Bottom).unwrap();

        assert_eq!(g.seats().active(), attacker.opponent());
        assert_eq!(
            g.cards()[card].location(),
            Location::Table {
                position: 0,
                slot: StackSlot::Bottom
            }
        );
        assert_eq!(g.player(attacker).hand().count(), 5);
        assert_eq!(g.history().len(), 1);
    }

    #[test]
    fn test_select_requires_active_hand() {
        let mut g = game(5);
        let defender = g.seats().defender();
        let theirs = g.player(defender).hand().ids()[0];
        assert_eq!(g.select(theirs), Err(DurakError::CardNotInHand(theirs)));

        let mine = g.player(g.seats().attacker()).hand().ids()[0];
        g.select(mine).unwrap();
        assert!(g.cards()[mine].selected());
        g.deselect();
        assert!(!g.cards()[mine].selected());
        assert_eq!(g.selected(), None);
    }

    #[test]
    fn test_hover_moves_mark() {
        let mut g = game(5);
        g.hover(Some(CardId(0))).unwrap();
        g.hover(Some(CardId(1))).unwrap();
        assert!(!g.cards()[CardId(0)].hovered());
        assert!(g.cards()[CardId(1)].hovered());
        g.hover(None).unwrap();
        assert!(!g.cards()[CardId(1)].hovered());
        assert!(g.hover(Some(CardId(99))).is_err());
    }

    #[test]
    fn test_end_attack_needs_defended_table() {
        let mut g = game(5);
        assert!(matches!(g.end_attack(), Err(DurakError::IllegalPlay(_))));
    }

    #[test]
    fn test_defender_cannot_end_attack() {
        let mut g = game(5);
        let attacker = g.seats().attacker();
        let card = g.player(attacker).hand().ids()[0];
        g.play(card, 0, StackSlot::Bottom).unwrap();
        assert_eq!(g.end_attack(), Err(DurakError::NotYourTurn(attacker)));
    }

    #[test]
    fn test_take_cards_moves_table_to_defender() {
        let mut g = game(9);
        let attacker = g.seats().attacker();
        let defender = attacker.opponent();
        let card = g.player(attacker).hand().ids()[0];
        g.play(card, 0, StackSlot::Bottom).unwrap();

        g.take_cards().unwrap();

        assert!(g.table().is_empty());
        assert_eq!(g.player(defender).hand().count(), 7);
        assert!(g.player(defender).hand().contains(card));
        assert_eq!(g.player(attacker).hand().count(), 6);
        assert_eq!(g.seats().attacker(), attacker);
        assert_eq!(g.seats().active(), attacker);
        assert_eq!(g.round(), 1);
    }

    #[test]
    fn test_legal_actions_only_for_active() {
        let g = game(1);
        let attacker = g.seats().attacker();
        assert!(g.legal_actions(attacker.opponent()).is_empty());
        let actions = g.legal_actions(attacker);
        assert_eq!(actions.len(), 6);
        assert!(!actions.contains(&Action::EndAttack));
    }

    #[test]
    fn test_apply_action_rejects_wrong_player() {
        let mut g = game(1);
        let defender = g.seats().defender();
        assert_eq!(
            g.apply_action(defender, Action::TakeCards),
            Err(DurakError::NotYourTurn(defender))
        );
    }

    #[test]
    fn test_restart_clears_history() {
        let mut g = game(2);
        let attacker = g.seats().attacker();
        let card = g.player(attacker).hand().ids()[0];
        g.play(card, 0, StackSlot::Bottom).unwrap();

        g.restart_game().unwrap();

        assert!(g.history().is_empty());
        assert!(g.table().is_empty());
        assert_eq!(g.round(), 0);
        g.validate().unwrap();
    }
}
