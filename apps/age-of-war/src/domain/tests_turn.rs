use crate::domain::dice::{Die, ScriptedDice, START_DICE};
use crate::domain::events::GameEvent;
use crate::domain::lines::{Line, Symbol};
use crate::domain::scoring::scores;
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::{dice, finished_state, make_game_state, MakeGameStateArgs};
use crate::domain::turn::{attack, complete_line, roll, start_game};
use crate::errors::domain::{DomainError, ValidationKind};

const KITA: usize = 0;
const AZUCHI: usize = 1;
const GIFU: usize = 2;
const EDO: usize = 3;
const HAMAMATSU: usize = 4;
const OKAZAKI: usize = 5;

fn assert_kind<T: std::fmt::Debug>(result: Result<T, DomainError>, kind: ValidationKind) {
    match result {
        Err(err) => assert_eq!(err.kind(), Some(kind), "unexpected error: {err}"),
        Ok(v) => panic!("expected {kind:?}, got Ok({v:?})"),
    }
}

#[test]
fn start_rejects_bad_player_counts() {
    for count in [0u8, 1, 7, 10] {
        let mut rng = ScriptedDice::default();
        assert_kind(
            start_game(count, &mut rng),
            ValidationKind::InvalidPlayerCount,
        );
    }
}

#[test]
fn start_rolls_seven_dice_for_player_zero() {
    for count in 2u8..=6 {
        let mut rng = ScriptedDice::new(dice("1 2 3 A C D D"));
        let (state, events) = start_game(count, &mut rng).unwrap();
        assert_eq!(state.player_count, count);
        assert_eq!(state.current_player, 0);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.conquered_count(), 0);
        assert_eq!(state.current_roll, dice("1 2 3 A C D D"));
        assert_eq!(
            events,
            vec![GameEvent::TurnStarted {
                player: 0,
                dice: dice("1 2 3 A C D D"),
            }]
        );
        assert!(scores(&state).iter().all(|&s| s == 0));
    }
}

#[test]
fn kita_conquered_over_two_lines() {
    // Initial hand, then five dice re-rolled after the archery pair.
    let mut rng = ScriptedDice::new(dice("A A C C 1 1 1  C C 1 1 1"));
    let (mut state, _) = start_game(2, &mut rng).unwrap();

    let events = attack(&mut state, &mut rng, 0, KITA).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::AttackStarted {
            player: 0,
            castle: KITA,
            lines: vec![
                Line::symbol(Symbol::Archery, 2),
                Line::symbol(Symbol::Cavalry, 2)
            ],
        }]
    );
    assert_eq!(state.phase(), Phase::Attacking { castle: KITA });

    let events = complete_line(&mut state, &mut rng, 0, 0).unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        GameEvent::LineCompleted {
            line: 0,
            dice_used: 2,
            ..
        }
    ));
    assert_eq!(
        events[1],
        GameEvent::DiceRolled {
            player: 0,
            dice: dice("C C 1 1 1"),
        }
    );
    assert_eq!(state.dice_held(), 5);

    let events = complete_line(&mut state, &mut rng, 0, 1).unwrap();
    assert!(matches!(events[0], GameEvent::LineCompleted { line: 1, .. }));
    assert_eq!(
        events[1],
        GameEvent::CastleConquered {
            player: 0,
            castle: KITA,
            previous_owner: None,
        }
    );
    // No re-roll for the conquering player: the next event is player 1's turn.
    assert!(matches!(events[2], GameEvent::TurnStarted { player: 1, .. }));
    assert_eq!(events.len(), 3);

    assert_eq!(state.owner(KITA), Some(0));
    assert_eq!(state.current_player, 1);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.completed_lines.is_empty());
    assert_eq!(state.dice_held(), START_DICE);
    assert_eq!(scores(&state), vec![3, 0]);
}

#[test]
fn reconquest_faces_fortification_and_changes_owner() {
    let mut state = make_game_state(
        dice("A A C C D 1 1"),
        MakeGameStateArgs {
            current_player: Some(1),
            owners: vec![(KITA, 0)],
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::new(dice("C C D 1 1  D 1 1"));

    let events = attack(&mut state, &mut rng, 1, KITA).unwrap();
    match &events[0] {
        GameEvent::AttackStarted { lines, .. } => {
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[2], Line::symbol(Symbol::Daimyo, 1));
        }
        other => panic!("unexpected event {other:?}"),
    }

    complete_line(&mut state, &mut rng, 1, 0).unwrap();
    complete_line(&mut state, &mut rng, 1, 1).unwrap();
    assert_eq!(state.current_roll, dice("D 1 1"));

    let events = complete_line(&mut state, &mut rng, 1, 2).unwrap();
    assert!(events.contains(&GameEvent::CastleConquered {
        player: 1,
        castle: KITA,
        previous_owner: Some(0),
    }));
    assert_eq!(state.owner(KITA), Some(1));
    assert_eq!(state.current_player, 0);
    assert_eq!(scores(&state), vec![0, 3]);
}

#[test]
fn closing_a_clan_awards_the_set_and_locks_it() {
    let mut state = make_game_state(
        dice("3 D C A"),
        MakeGameStateArgs {
            owners: vec![(KITA, 0), (AZUCHI, 0)],
            attacking: Some(GIFU),
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::new(dice("D C A  C A"));

    complete_line(&mut state, &mut rng, 0, 0).unwrap();
    assert_eq!(state.current_roll, dice("D C A"));
    complete_line(&mut state, &mut rng, 0, 1).unwrap();
    assert_eq!(state.current_roll, dice("C A"));
    let events = complete_line(&mut state, &mut rng, 0, 2).unwrap();

    assert!(events.contains(&GameEvent::ClanConquered { player: 0, clan: 0 }));
    assert_eq!(scores(&state), vec![10, 0]);

    // Player 1 can no longer touch any Oda castle.
    assert_eq!(state.current_player, 1);
    let before = state.clone();
    assert_kind(
        attack(&mut state, &mut rng, 1, KITA),
        ValidationKind::ClanClosed,
    );
    assert_eq!(state, before);
}

#[test]
fn exact_fit_without_a_payable_line_fails() {
    let mut state = make_game_state(
        dice("A C D"),
        MakeGameStateArgs {
            attacking: Some(OKAZAKI),
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::new(dice("A C"));

    let events = roll(&mut state, &mut rng, 0).unwrap();
    assert_eq!(
        events[..2],
        [
            GameEvent::DiceRolled {
                player: 0,
                dice: dice("A C"),
            },
            GameEvent::AttackFailed {
                player: 0,
                castle: Some(OKAZAKI),
            },
        ]
    );
    assert!(matches!(events[2], GameEvent::TurnStarted { player: 1, .. }));
    assert_eq!(state.owner(OKAZAKI), None);
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn exact_fit_with_a_payable_line_continues() {
    let mut state = make_game_state(
        dice("A C D"),
        MakeGameStateArgs {
            attacking: Some(OKAZAKI),
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::new(dice("3 3"));

    let events = roll(&mut state, &mut rng, 0).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(state.phase(), Phase::Attacking { castle: OKAZAKI });
    assert_eq!(state.current_player, 0);
}

#[test]
fn running_minimum_overflow_fails() {
    // Edo needs 3 dice for the 8 infantry plus one daimyo.
    let mut state = make_game_state(
        dice("3 3 3 D"),
        MakeGameStateArgs {
            attacking: Some(EDO),
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::new(dice("3 3 3"));

    let events = roll(&mut state, &mut rng, 0).unwrap();
    assert!(events.contains(&GameEvent::AttackFailed {
        player: 0,
        castle: Some(EDO),
    }));
    assert_eq!(state.current_player, 1);
}

#[test]
fn unaffordable_attack_is_accepted_and_ends_the_turn() {
    let mut state = make_game_state(dice("3 3 D"), MakeGameStateArgs::default());
    let mut rng = ScriptedDice::default();

    let events = attack(&mut state, &mut rng, 0, EDO).unwrap();
    assert!(matches!(events[0], GameEvent::AttackStarted { castle: EDO, .. }));
    assert_eq!(
        events[1],
        GameEvent::AttackFailed {
            player: 0,
            castle: Some(EDO),
        }
    );
    assert!(matches!(events[2], GameEvent::TurnStarted { player: 1, .. }));
}

#[test]
fn idle_player_with_too_few_dice_fails_without_a_castle() {
    let mut state = make_game_state(dice("1 2"), MakeGameStateArgs::default());
    let mut rng = ScriptedDice::new(dice("3"));

    let events = roll(&mut state, &mut rng, 0).unwrap();
    assert_eq!(
        events[1],
        GameEvent::AttackFailed {
            player: 0,
            castle: None,
        }
    );
    assert_eq!(state.current_player, 1);
    assert_eq!(state.dice_held(), START_DICE);
}

#[test]
fn failure_after_line_reroll_passes_the_turn() {
    let mut state = make_game_state(
        dice("C C 1 A"),
        MakeGameStateArgs {
            attacking: Some(HAMAMATSU),
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::new(dice("A D"));

    let events = complete_line(&mut state, &mut rng, 0, 0).unwrap();
    assert!(matches!(events[0], GameEvent::LineCompleted { dice_used: 2, .. }));
    assert_eq!(
        events[1],
        GameEvent::DiceRolled {
            player: 0,
            dice: dice("A D"),
        }
    );
    assert_eq!(
        events[2],
        GameEvent::AttackFailed {
            player: 0,
            castle: Some(HAMAMATSU),
        }
    );
    assert!(matches!(events[3], GameEvent::TurnStarted { player: 1, .. }));
    assert!(state.completed_lines.is_empty());
}

#[test]
fn roll_discards_one_die() {
    let mut rng = ScriptedDice::new(dice("1 1 1 1 1 1 1"));
    let (mut state, _) = start_game(3, &mut rng).unwrap();
    for expected in (2..START_DICE).rev() {
        roll(&mut state, &mut rng, 0).unwrap();
        assert_eq!(state.dice_held(), expected);
        assert_eq!(state.current_player, 0);
    }
}

#[test]
fn rejected_actions_leave_state_untouched() {
    let mut state = make_game_state(
        dice("A A 3 D C 1 2"),
        MakeGameStateArgs {
            player_count: Some(3),
            owners: vec![(OKAZAKI, 0), (EDO, 1), (HAMAMATSU, 1), (GIFU, 2)],
            ..Default::default()
        },
    );
    // Tokugawa is not closed: Okazaki belongs to player 0.
    let mut rng = ScriptedDice::default();
    let before = state.clone();

    assert_kind(
        attack(&mut state, &mut rng, 1, KITA),
        ValidationKind::OutOfTurn,
    );
    assert_kind(roll(&mut state, &mut rng, 2), ValidationKind::OutOfTurn);
    assert_kind(
        attack(&mut state, &mut rng, 0, 14),
        ValidationKind::InvalidCastle,
    );
    assert_kind(
        attack(&mut state, &mut rng, 0, OKAZAKI),
        ValidationKind::AlreadyOwned,
    );
    assert_kind(
        complete_line(&mut state, &mut rng, 0, 0),
        ValidationKind::PhaseMismatch,
    );
    assert_eq!(state, before);
}

#[test]
fn line_errors_while_attacking() {
    let mut state = make_game_state(
        dice("A A 3 C 1"),
        MakeGameStateArgs {
            attacking: Some(KITA),
            completed: vec![0],
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::default();
    let before = state.clone();

    assert_kind(
        attack(&mut state, &mut rng, 0, EDO),
        ValidationKind::PhaseMismatch,
    );
    assert_kind(
        complete_line(&mut state, &mut rng, 0, 2),
        ValidationKind::InvalidLine,
    );
    assert_kind(
        complete_line(&mut state, &mut rng, 0, 0),
        ValidationKind::LineAlreadyCompleted,
    );
    assert_kind(
        complete_line(&mut state, &mut rng, 0, 1),
        ValidationKind::CannotAffordLine,
    );
    assert_eq!(state, before);
}

#[test]
fn roll_without_dice_is_rejected() {
    let mut state = make_game_state(Vec::new(), MakeGameStateArgs::default());
    let mut rng = ScriptedDice::default();
    assert_kind(roll(&mut state, &mut rng, 0), ValidationKind::NoDiceToRoll);
}

#[test]
fn finished_game_rejects_everything() {
    let mut state: GameState = finished_state(2, |castle| (castle % 2) as u8);
    state.current_roll = vec![Die::Daimyo; START_DICE];
    let mut rng = ScriptedDice::default();

    assert_kind(attack(&mut state, &mut rng, 0, KITA), ValidationKind::GameOver);
    assert_kind(
        complete_line(&mut state, &mut rng, 0, 0),
        ValidationKind::GameOver,
    );
    assert_kind(roll(&mut state, &mut rng, 0), ValidationKind::GameOver);
    assert_eq!(state.phase(), Phase::GameOver);
}
