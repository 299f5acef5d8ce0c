//! End-of-turn evaluation, run after every state change.

use tracing::info;

use crate::domain::catalog::CASTLES;
use crate::domain::conquest::conquer_castle;
use crate::domain::dice::DiceRoller;
use crate::domain::events::GameEvent;
use crate::domain::scoring::is_clan_closed;
use crate::domain::state::{require_attacked_castle, GameState};
use crate::domain::turn::next_turn;
use crate::errors::domain::DomainError;

/// What the evaluator decided for the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player keeps acting.
    Continues,
    /// Every line was completed; the castle changed hands and the turn passed.
    Conquered,
    /// The player cannot finish; the turn passed.
    Failed,
}

impl TurnOutcome {
    pub fn turn_ended(self) -> bool {
        !matches!(self, TurnOutcome::Continues)
    }
}

/// Decide whether the current turn continues.
///
/// Checks run in a fixed order: full completion, then a running minimum-dice
/// overflow, then the exact-fit deadlock where the dice only just cover the
/// remaining lines but none of them can be paid right now. An idle player
/// fails when no open castle fits in the dice they hold.
pub fn check_end_of_turn<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    events: &mut Vec<GameEvent>,
) -> Result<TurnOutcome, DomainError> {
    if state.is_finished() {
        return Ok(TurnOutcome::Continues);
    }

    if state.currently_attacking.is_none() {
        return Ok(check_idle(state, dice, events));
    }

    let castle = require_attacked_castle(state, "check_end_of_turn")?;
    let lines = state.lines_for(castle);

    if (0..lines.len()).all(|i| state.completed_lines.contains(i)) {
        conquer_castle(state, castle, events);
        next_turn(state, dice, events);
        return Ok(TurnOutcome::Conquered);
    }

    let held = state.dice_held();
    let mut required = 0usize;
    let mut can_afford_any = false;
    for (i, line) in lines.iter().enumerate() {
        if state.completed_lines.contains(i) {
            continue;
        }
        required += line.min_dice();
        if required > held {
            fail_attack(state, dice, events);
            return Ok(TurnOutcome::Failed);
        }
        if line.can_afford(&state.current_roll).can_afford {
            can_afford_any = true;
        }
    }

    if required == held && !can_afford_any {
        fail_attack(state, dice, events);
        return Ok(TurnOutcome::Failed);
    }

    Ok(TurnOutcome::Continues)
}

fn check_idle<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    events: &mut Vec<GameEvent>,
) -> TurnOutcome {
    let held = state.dice_held();
    let player = state.current_player;
    let affordable = CASTLES.iter().any(|castle| {
        state.owner(castle.id) != Some(player)
            && !is_clan_closed(state, castle.clan)
            && castle.min_dice(state.is_conquered(castle.id)) <= held
    });
    if affordable {
        return TurnOutcome::Continues;
    }
    fail_attack(state, dice, events);
    TurnOutcome::Failed
}

fn fail_attack<D: DiceRoller + ?Sized>(
    state: &mut GameState,
    dice: &mut D,
    events: &mut Vec<GameEvent>,
) {
    let player = state.current_player;
    let castle = state.currently_attacking;
    info!(player, castle = ?castle, dice = state.dice_held(), "Attack failed");
    events.push(GameEvent::AttackFailed { player, castle });
    next_turn(state, dice, events);
}
