use crate::domain::dice::{ScriptedDice, START_DICE};
use crate::domain::end_of_turn::{check_end_of_turn, TurnOutcome};
use crate::domain::events::GameEvent;
use crate::domain::test_state_helpers::{dice, finished_state, make_game_state, MakeGameStateArgs};

const EDO: usize = 3;
const OKAZAKI: usize = 5;
const OBI: usize = 13;

#[test]
fn all_lines_complete_conquers() {
    let mut state = make_game_state(
        dice("1 1"),
        MakeGameStateArgs {
            attacking: Some(OKAZAKI),
            completed: vec![0],
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::default();
    let mut events = Vec::new();

    let outcome = check_end_of_turn(&mut state, &mut rng, &mut events).unwrap();
    assert_eq!(outcome, TurnOutcome::Conquered);
    assert!(outcome.turn_ended());
    assert_eq!(state.owner(OKAZAKI), Some(0));
    assert_eq!(state.current_player, 1);
    assert_eq!(state.dice_held(), START_DICE);
}

#[test]
fn overflow_fails_once_and_next_turn_is_stable() {
    let mut state = make_game_state(
        dice("3 3 3"),
        MakeGameStateArgs {
            player_count: Some(3),
            attacking: Some(EDO),
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::default();
    let mut events = Vec::new();

    assert_eq!(
        check_end_of_turn(&mut state, &mut rng, &mut events).unwrap(),
        TurnOutcome::Failed
    );
    assert_eq!(state.current_player, 1);
    let after_first = state.clone();

    // A fresh seven-dice turn always fits some castle.
    assert_eq!(
        check_end_of_turn(&mut state, &mut rng, &mut events).unwrap(),
        TurnOutcome::Continues
    );
    assert_eq!(state, after_first);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::AttackFailed { .. }))
            .count(),
        1
    );
}

#[test]
fn idle_ignores_castles_the_player_already_owns() {
    // Okazaki, Oko and Obi are the only two-dice castles.
    let mut state = make_game_state(
        dice("1 1"),
        MakeGameStateArgs {
            owners: vec![(OKAZAKI, 0), (11, 0), (OBI, 0)],
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::default();
    let mut events = Vec::new();

    assert_eq!(
        check_end_of_turn(&mut state, &mut rng, &mut events).unwrap(),
        TurnOutcome::Failed
    );
    assert_eq!(
        events[0],
        GameEvent::AttackFailed {
            player: 0,
            castle: None,
        }
    );
}

#[test]
fn idle_counts_fortification_on_conquered_castles() {
    // Obi is normally a two-dice castle; conquered by player 1 it needs three.
    let mut state = make_game_state(
        dice("1 1"),
        MakeGameStateArgs {
            owners: vec![(OKAZAKI, 0), (11, 0), (OBI, 1)],
            ..Default::default()
        },
    );
    let mut rng = ScriptedDice::default();
    let mut events = Vec::new();
    assert_eq!(
        check_end_of_turn(&mut state, &mut rng, &mut events).unwrap(),
        TurnOutcome::Failed
    );

    let mut state = make_game_state(
        dice("1 1 1"),
        MakeGameStateArgs {
            owners: vec![(OKAZAKI, 0), (11, 0), (OBI, 1)],
            ..Default::default()
        },
    );
    assert_eq!(
        check_end_of_turn(&mut state, &mut rng, &mut events).unwrap(),
        TurnOutcome::Continues
    );
}

#[test]
fn finished_game_is_left_alone() {
    let mut state = finished_state(2, |_| 0);
    let before = state.clone();
    let mut events = Vec::new();
    assert_eq!(
        check_end_of_turn(&mut state, &mut ScriptedDice::default(), &mut events).unwrap(),
        TurnOutcome::Continues
    );
    assert_eq!(state, before);
    assert!(events.is_empty());
}

#[test]
fn dangling_attack_is_an_integrity_error() {
    let mut state = make_game_state(
        dice("1 1"),
        MakeGameStateArgs {
            attacking: Some(99),
            ..Default::default()
        },
    );
    let err = check_end_of_turn(&mut state, &mut ScriptedDice::default(), &mut Vec::new())
        .unwrap_err();
    assert!(!err.is_validation());
}
