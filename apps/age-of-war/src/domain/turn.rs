//! Turn state machine: game start, the three player actions and turn
//! advancement.
//!
//! Every action validates all of its preconditions before writing to the
//! state, so a rejected action leaves the game untouched.

use tracing::debug;

use crate::domain::catalog::{self, CastleId};
use crate::domain::dice::{DiceRoller, START_DICE};
use crate::domain::end_of_turn::check_end_of_turn;
use crate::domain::events::GameEvent;
use crate::domain::scoring::is_clan_closed;
use crate::domain::state::{
    next_player, require_attacked_castle, validate_player_count, GameState, PlayerId,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// Create a game for `player_count` players and roll the first hand.
pub fn start_game<D: DiceRoller + ?Sized>(
    player_count: u8,
    dice: &mut D,
) -> Result<(GameState, Vec<GameEvent>), DomainError> {
    validate_player_count(player_count)?;
    let mut state = GameState::new(player_count);
    let mut events = Vec::new();
    start_turn(&mut state, dice, &mut events);
    debug!(player_count, "Game started");
    Ok((state, events))
}

/// Reset per-turn state and roll a full hand for the current player.
pub fn start_turn<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    events: &mut Vec<GameEvent>,
) {
    state.currently_attacking = None;
    state.completed_lines.clear();
    state.current_roll = dice.roll(START_DICE);
    debug!(player = state.current_player, dice = ?state.current_roll, "Turn started");
    events.push(GameEvent::TurnStarted {
        player: state.current_player,
        dice: state.current_roll.clone(),
    });
}

/// Pass the turn to the next player.
pub fn next_turn<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    events: &mut Vec<GameEvent>,
) {
    state.current_player = next_player(state.current_player, state.player_count);
    start_turn(state, dice, events);
}

/// Replace the current roll with `count` fresh dice.
fn reroll<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    count: usize,
    events: &mut Vec<GameEvent>,
) {
    state.current_roll = dice.roll(count);
    debug!(player = state.current_player, dice = ?state.current_roll, "Dice rolled");
    events.push(GameEvent::DiceRolled {
        player: state.current_player,
        dice: state.current_roll.clone(),
    });
}

fn ensure_in_play(state: &GameState) -> Result<(), DomainError> {
    if state.is_finished() {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            "the game is over",
        ));
    }
    Ok(())
}

fn ensure_turn(state: &GameState, who: PlayerId) -> Result<(), DomainError> {
    if state.current_player != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "it is not your turn",
        ));
    }
    Ok(())
}

/// Begin an attack on `castle`.
pub fn attack<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    who: PlayerId,
    castle: CastleId,
) -> Result<Vec<GameEvent>, DomainError> {
    ensure_in_play(state)?;
    ensure_turn(state, who)?;
    if state.currently_attacking.is_some() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "unable to attack a castle right now",
        ));
    }
    let Some(target) = catalog::castle(castle) else {
        return Err(DomainError::validation(
            ValidationKind::InvalidCastle,
            "that is not a valid castle",
        ));
    };
    if state.owner(target.id) == Some(who) {
        return Err(DomainError::validation(
            ValidationKind::AlreadyOwned,
            "you have already conquered that castle",
        ));
    }
    if is_clan_closed(state, target.clan) {
        return Err(DomainError::validation(
            ValidationKind::ClanClosed,
            "that clan is already conquered",
        ));
    }

    state.currently_attacking = Some(target.id);
    state.completed_lines.clear();
    debug!(player = who, castle = target.name, "Attack started");

    let mut events = vec![GameEvent::AttackStarted {
        player: who,
        castle: target.id,
        lines: state.lines_for(target),
    }];
    check_end_of_turn(state, dice, &mut events)?;
    Ok(events)
}

/// Complete line `line` (0-based) of the castle under attack.
pub fn complete_line<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    who: PlayerId,
    line: usize,
) -> Result<Vec<GameEvent>, DomainError> {
    ensure_in_play(state)?;
    ensure_turn(state, who)?;
    if state.currently_attacking.is_none() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "unable to complete a line right now",
        ));
    }
    let castle = require_attacked_castle(state, "complete_line")?;
    let lines = state.lines_for(castle);
    let Some(requirement) = lines.get(line).copied() else {
        return Err(DomainError::validation(
            ValidationKind::InvalidLine,
            "that is not a valid line",
        ));
    };
    if state.completed_lines.contains(line) {
        return Err(DomainError::validation(
            ValidationKind::LineAlreadyCompleted,
            "that line has already been completed",
        ));
    }
    let affordability = requirement.can_afford(&state.current_roll);
    if !affordability.can_afford {
        return Err(DomainError::validation(
            ValidationKind::CannotAffordLine,
            "cannot afford that line",
        ));
    }

    let dice_used = affordability.dice_used;
    state.completed_lines.insert(line);
    debug!(player = who, castle = castle.name, line, dice_used, "Line completed");
    let mut events = vec![GameEvent::LineCompleted {
        player: who,
        castle: castle.id,
        line,
        requirement,
        dice_used,
    }];

    // A completed castle ends the turn before any dice are spent.
    if !check_end_of_turn(state, dice, &mut events)?.turn_ended() {
        let remaining = state.dice_held().saturating_sub(dice_used);
        reroll(state, dice, remaining, &mut events);
        check_end_of_turn(state, dice, &mut events)?;
    }
    Ok(events)
}

/// Discard one die and re-roll the rest.
pub fn roll<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    who: PlayerId,
) -> Result<Vec<GameEvent>, DomainError> {
    ensure_in_play(state)?;
    ensure_turn(state, who)?;
    if state.current_roll.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoDiceToRoll,
            "no dice left to roll",
        ));
    }

    let mut events = Vec::new();
    let remaining = state.dice_held() - 1;
    reroll(state, dice, remaining, &mut events);
    check_end_of_turn(state, dice, &mut events)?;
    Ok(events)
}
