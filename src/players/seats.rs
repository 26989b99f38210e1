//! The two seats and the turn machine.
//!
//! Two independent axes per player: `active` (whose move it is) and `focus`
//! (attacking or defending this round). Exactly one player is active and
//! the two foci are always opposite. Passing the move flips `active` on
//! both players; ending a successful defense flips `focus` on both.

use tracing::debug;

use super::player::Player;
use crate::core::error::{DurakError, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::rules::playability::Focus;

/// Both players plus their turn state.
#[derive(Clone, Debug)]
pub struct Seats {
    players: PlayerMap<Player>,
}

impl Seats {
    /// Seat two players. The first seat starts as the active attacker.
    #[must_use]
    pub fn new(players: PlayerMap<Player>) -> Self {
        let mut seats = Self { players };
        seats.assign_roles(PlayerId::new(0));
        seats
    }

    /// Pass the move to the other player.
    pub fn switch_active(&mut self) {
        for (_, player) in self.players.iter_mut() {
            let active = player.active();
            player.set_active(!active);
        }
    }

    /// Swap attacker and defender.
    pub fn switch_focus(&mut self) {
        for (_, player) in self.players.iter_mut() {
            let focus = player.focus();
            player.set_focus(focus.opposite());
        }
        debug!(attacker = %self.attacker(), "roles switched");
    }

    /// Make `attacker` the active attacker and the other seat the waiting
    /// defender.
    pub fn assign_roles(&mut self, attacker: PlayerId) {
        let (att, def) = self.players.pair_mut(attacker);
        att.set_active(true);
        att.set_focus(Focus::Attacking);
        def.set_active(false);
        def.set_focus(Focus::Defending);
    }

    /// Hand the move to whoever holds `focus`.
    pub fn activate(&mut self, focus: Focus) {
        for (_, player) in self.players.iter_mut() {
            let active = player.focus() == focus;
            player.set_active(active);
        }
    }

    /// The attacking seat.
    #[must_use]
    pub fn attacker(&self) -> PlayerId {
        self.with_focus(Focus::Attacking)
    }

    /// The defending seat.
    #[must_use]
    pub fn defender(&self) -> PlayerId {
        self.attacker().opponent()
    }

    /// The seat whose move it is.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.players
            .iter()
            .find(|(_, p)| p.active())
            .map_or(PlayerId::new(0), |(id, _)| id)
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut Player)> {
        self.players.iter_mut()
    }

    /// Exactly one active player and opposite foci.
    pub fn validate(&self) -> Result<()> {
        let active = self.players.iter().filter(|(_, p)| p.active()).count();
        if active != 1 {
            return Err(DurakError::InvariantViolation(format!(
                "{active} active players"
            )));
        }
        let [a, b] = [PlayerId::new(0), PlayerId::new(1)].map(|id| self.players[id].focus());
        if a == b {
            return Err(DurakError::InvariantViolation(format!(
                "both players are {a}"
            )));
        }
        Ok(())
    }

    fn with_focus(&self, focus: Focus) -> PlayerId {
        self.players
            .iter()
            .find(|(_, p)| p.focus() == focus)
            .map_or(PlayerId::new(0), |(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::PlayerKind;

    fn seats() -> Seats {
        Seats::new(PlayerMap::new(|id| {
            Player::new(id, format!("P{}", id.index()), PlayerKind::Human)
        }))
    }

    #[test]
    fn test_initial_roles() {
        let s = seats();
        assert_eq!(s.attacker(), PlayerId::new(0));
        assert_eq!(s.defender(), PlayerId::new(1));
        assert_eq!(s.active(), PlayerId::new(0));
        s.validate().unwrap();
    }

    #[test]
    fn test_switch_active() {
        let mut s = seats();
        s.switch_active();
        assert_eq!(s.active(), PlayerId::new(1));
        assert_eq!(s.attacker(), PlayerId::new(0));
        s.validate().unwrap();
        s.switch_active();
        assert_eq!(s.active(), PlayerId::new(0));
    }

    #[test]
    fn test_switch_focus_flips_both() {
        let mut s = seats();
        s.switch_focus();
        assert_eq!(s.attacker(), PlayerId::new(1));
        assert_eq!(s.get(PlayerId::new(0)).focus(), Focus::Defending);
        s.validate().unwrap();
    }

    #[test]
    fn test_assign_and_activate() {
        let mut s = seats();
        s.assign_roles(PlayerId::new(1));
        assert_eq!(s.attacker(), PlayerId::new(1));
        assert_eq!(s.active(), PlayerId::new(1));

        s.activate(Focus::Defending);
        assert_eq!(s.active(), PlayerId::new(0));
        s.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_two_active() {
        let mut s = seats();
        s.get_mut(PlayerId::new(1)).set_active(true);
        assert!(matches!(
            s.validate(),
            Err(DurakError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_same_focus() {
        let mut s = seats();
        s.get_mut(PlayerId::new(1)).set_focus(Focus::Attacking);
        assert!(s.validate().is_err());
    }
}
