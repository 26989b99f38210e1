//! Round sequencing integration tests.
//!
//! Plays scripted bouts on stacked decks, then whole games through the
//! `RulesEngine` interface.

mod common;

use common::{init_logging, StackedDeck};
use durak_core::{
    Action, CardId, DurakError, DurakGame, DurakGameBuilder, Focus, GameConfig, GameResult,
    Location, PlayerId, RulesEngine, SortMethod, StackSlot, Suit,
};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// Spades are trump; player 0 holds the lowest trump and attacks.
fn scripted() -> DurakGame<StackedDeck> {
    init_logging();
    let deck = StackedDeck::new(
        Suit::Spades,
        &[
            "6S", "7H", "8D", "9D", "10C", "JC", // player 0
            "9S", "8H", "QD", "KD", "AC", "6C", // player 1
        ],
    );
    DurakGameBuilder::new()
        .config(GameConfig::new().with_strict_invariants(true))
        .build_with_rng(deck)
        .unwrap()
}

fn id<R: durak_core::RandomSource>(game: &DurakGame<R>, face: &str) -> CardId {
    game.cards().find(face.parse().unwrap()).unwrap()
}

fn faces<R: durak_core::RandomSource>(game: &DurakGame<R>, ids: &[CardId]) -> Vec<String> {
    ids.iter()
        .map(|&id| game.cards()[id].face().to_string())
        .collect()
}

// =============================================================================
// Attack and Defense
// =============================================================================

/// A full bout: two attacks, two defenses, end of attack.
#[test]
fn test_defended_bout_goes_to_discard() {
    let mut game = scripted();
    assert_eq!(game.seats().attacker(), P0);

    game.play(id(&game, "7H"), 0, StackSlot::Bottom).unwrap();
    assert_eq!(game.seats().active(), P1);
    assert_eq!(
        faces(&game, game.player(P1).hand().playable()),
        ["9S", "8H"]
    );

    game.play(id(&game, "8H"), 0, StackSlot::Top).unwrap();
    assert_eq!(game.seats().active(), P0);
    assert_eq!(faces(&game, game.player(P0).hand().playable()), ["8D"]);

    game.play(id(&game, "8D"), 1, StackSlot::Bottom).unwrap();
    game.play(id(&game, "QD"), 1, StackSlot::Top).unwrap();
    assert!(game.table().all_defended());
    assert_eq!(game.legal_actions(P0), vec![Action::EndAttack]);

    game.end_attack().unwrap();

    assert!(game.table().is_empty());
    assert_eq!(faces(&game, game.discard().ids()), ["7H", "8H", "8D", "QD"]);
    assert_eq!(game.cards()[id(&game, "QD")].location(), Location::Discard(3));
    assert_eq!(game.deck().count(), 20);
    // Attacker refills first
    assert_eq!(
        faces(&game, game.player(P0).hand().ids()),
        ["6S", "9D", "10C", "JC", "6H", "9H"]
    );
    assert_eq!(
        faces(&game, game.player(P1).hand().ids()),
        ["9S", "KD", "AC", "6C", "10H", "JH"]
    );
    assert_eq!(game.seats().attacker(), P1);
    assert_eq!(game.seats().active(), P1);
    assert_eq!(game.player(P0).focus(), Focus::Defending);
    assert_eq!(game.round(), 1);
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.history()[4].action, Action::EndAttack);
}

/// Taking the table keeps the roles and refills only the attacker.
#[test]
fn test_failed_defense_goes_to_defender() {
    let mut game = scripted();
    let seven = id(&game, "7H");
    game.play(seven, 0, StackSlot::Bottom).unwrap();

    assert!(game.legal_actions(P1).contains(&Action::TakeCards));
    game.take_cards().unwrap();

    assert_eq!(game.player(P1).hand().count(), 7);
    assert_eq!(game.cards()[seven].location(), Location::Hand(6));
    assert!(!game.table().contains(seven));
    game.validate().unwrap();
    assert_eq!(game.player(P0).hand().count(), 6);
    assert_eq!(game.seats().attacker(), P0);
    assert_eq!(game.seats().active(), P0);
    assert_eq!(game.round(), 1);
    assert!(game.discard().is_empty());
}

/// Defender's legal moves cover the open attack or take.
#[test]
fn test_defender_legal_actions() {
    let mut game = scripted();
    game.play(id(&game, "7H"), 0, StackSlot::Bottom).unwrap();

    let actions = game.legal_actions(P1);
    let expected = vec![
        Action::Play {
            card: id(&game, "9S"),
            position: 0,
            slot: StackSlot::Top,
        },
        Action::Play {
            card: id(&game, "8H"),
            position: 0,
            slot: StackSlot::Top,
        },
        Action::TakeCards,
    ];
    assert_eq!(actions, expected);
    assert!(game.legal_actions(P0).is_empty());
}

// =============================================================================
// Rejected Commands
// =============================================================================

fn fingerprint<R: durak_core::RandomSource>(game: &DurakGame<R>) -> String {
    format!(
        "{:?}|{:?}|{:?}|{:?}|{}|{}",
        game.player(P0).hand().ids(),
        game.player(P1).hand().ids(),
        game.table().cards_in_play(),
        game.seats().active(),
        game.history().len(),
        game.deck().count(),
    )
}

/// Every rejected command leaves the game untouched.
#[test]
fn test_failed_commands_do_not_mutate() {
    let mut game = scripted();
    game.play(id(&game, "7H"), 0, StackSlot::Bottom).unwrap();
    let before = fingerprint(&game);

    // Six of clubs cannot beat the seven of hearts
    let err = game.play(id(&game, "6C"), 0, StackSlot::Top).unwrap_err();
    assert!(matches!(err, DurakError::IllegalPlay(_)));

    // Defense must go on top of an attack
    assert!(matches!(
        game.play(id(&game, "8H"), 1, StackSlot::Bottom),
        Err(DurakError::IllegalPlay(_))
    ));
    assert_eq!(
        game.play(id(&game, "8H"), 0, StackSlot::Bottom),
        Err(DurakError::SlotOccupied {
            position: 0,
            slot: StackSlot::Bottom
        })
    );
    assert!(matches!(
        game.play(id(&game, "8H"), 6, StackSlot::Top),
        Err(DurakError::OutOfRange { .. })
    ));
    // Attacker's cards are not in the active hand
    let six = id(&game, "6S");
    assert_eq!(
        game.play(six, 1, StackSlot::Bottom),
        Err(DurakError::CardNotInHand(six))
    );
    assert_eq!(game.end_attack(), Err(DurakError::NotYourTurn(P0)));
    assert_eq!(
        game.apply_action(P0, Action::EndAttack),
        Err(DurakError::NotYourTurn(P0))
    );

    assert_eq!(fingerprint(&game), before);
    game.validate().unwrap();
}

/// An attack must match a rank on the table.
#[test]
fn test_attack_must_match_rank() {
    let mut game = scripted();
    game.play(id(&game, "7H"), 0, StackSlot::Bottom).unwrap();
    game.play(id(&game, "8H"), 0, StackSlot::Top).unwrap();

    let nine = id(&game, "9D");
    assert!(!game.cards()[nine].playable());
    assert!(matches!(
        game.play(nine, 1, StackSlot::Bottom),
        Err(DurakError::IllegalPlay(_))
    ));
    assert!(matches!(game.take_cards(), Err(DurakError::NotYourTurn(_))));
}

// =============================================================================
// Other Commands
// =============================================================================

/// Playing the selected card clears the selection.
#[test]
fn test_play_clears_selection() {
    let mut game = scripted();
    let seven = id(&game, "7H");
    game.select(seven).unwrap();
    game.hover(Some(seven)).unwrap();

    game.play(seven, 0, StackSlot::Bottom).unwrap();

    assert_eq!(game.selected(), None);
    assert_eq!(game.hovered(), None);
    let card = game.card(seven).unwrap();
    assert!(!card.selected());
    assert!(!card.hovered());
    assert!(card.revealed());
}

/// Sorting reorders the hand without touching insertion stamps.
#[test]
fn test_sort_hand() {
    let mut game = scripted();
    game.sort(P1, SortMethod::BySuit);
    assert_eq!(
        faces(&game, game.player(P1).hand().ids()),
        ["8H", "KD", "QD", "AC", "6C", "9S"]
    );

    game.sort(P1, SortMethod::ByTimeAdded);
    assert_eq!(
        faces(&game, game.player(P1).hand().ids()),
        ["9S", "8H", "QD", "KD", "AC", "6C"]
    );
    game.validate().unwrap();
}

/// Draw and fill move cards from the top of the deck.
#[test]
fn test_draw_and_fill() {
    let mut game = scripted();
    let top = game.deck().top_card().unwrap();

    assert_eq!(game.draw(P0).unwrap(), Some(top));
    assert_eq!(game.player(P0).hand().count(), 7);

    assert_eq!(game.fill_hand(P1, 9).unwrap(), 3);
    assert_eq!(game.player(P1).hand().count(), 9);
    assert_eq!(game.deck().count(), 20);

    assert_eq!(game.fill_hand(P1, 30).unwrap(), 20);
    assert!(game.deck().is_empty());
    assert_eq!(game.draw(P0).unwrap(), None);
}

// =============================================================================
// Whole Games
// =============================================================================

/// Always taking the first legal action ends every game.
#[test]
fn test_games_terminate() {
    init_logging();
    for seed in 0..25 {
        let mut game = DurakGameBuilder::new()
            .config(GameConfig::new().with_strict_invariants(true))
            .seed(seed)
            .build()
            .unwrap();

        let mut steps = 0;
        while !game.is_terminal() {
            let player = game.seats().active();
            let actions = game.legal_actions(player);
            assert!(!actions.is_empty(), "seed {seed}: {player} is stuck");
            game.apply_action(player, actions[0]).unwrap();
            steps += 1;
            assert!(steps < 2_000, "seed {seed}: game did not end");
        }

        let result = game.outcome().unwrap();
        assert!(game.deck().is_empty());
        assert!(game.table().is_empty());
        match result {
            GameResult::Winner(p) => {
                assert!(game.player(p).hand().is_empty());
                assert!(!game.player(p.opponent()).hand().is_empty());
            }
            GameResult::Draw => {
                assert!(game.seats().iter().all(|(_, pl)| pl.hand().is_empty()));
            }
        }
        assert!(game.legal_actions(P0).is_empty());
        assert!(game.legal_actions(P1).is_empty());
        assert_eq!(game.end_attack(), Err(DurakError::GameOver));
        assert_eq!(game.draw(P0), Err(DurakError::GameOver));
    }
}

/// A finished game can be restarted.
#[test]
fn test_restart_after_game_over() {
    init_logging();
    let mut game = DurakGameBuilder::new().seed(3).build().unwrap();
    while !game.is_terminal() {
        let player = game.seats().active();
        let action = game.legal_actions(player)[0];
        game.apply_action(player, action).unwrap();
    }

    game.restart_game().unwrap();

    assert!(!game.is_terminal());
    assert!(!game.legal_actions(game.seats().active()).is_empty());
    game.validate().unwrap();
}
