//! Lossless encoding of a [`GameState`] to bytes and back.
//!
//! Decoding checks every structural invariant of the aggregate, so a state
//! that comes back from storage is safe to hand straight to the turn
//! functions.

use serde::{Deserialize, Serialize};

use crate::domain::catalog;
use crate::domain::dice::START_DICE;
use crate::domain::scoring::is_clan_closed;
use crate::domain::state::{validate_player_count, GameState, LineSet};
use crate::errors::domain::{DomainError, ValidationKind};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u16 = 1;

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u16,
    state: T,
}

/// Encode `state` as a versioned JSON document.
pub fn encode(state: &GameState) -> Result<Vec<u8>, DomainError> {
    serde_json::to_vec(&Envelope {
        version: SNAPSHOT_VERSION,
        state,
    })
    .map_err(|e| DomainError::integrity(format!("failed to encode game state: {e}")))
}

/// Decode and validate a state produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<GameState, DomainError> {
    let envelope: Envelope<GameState> = serde_json::from_slice(bytes).map_err(|e| {
        DomainError::validation(
            ValidationKind::Malformed,
            format!("malformed game state: {e}"),
        )
    })?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(DomainError::validation(
            ValidationKind::Malformed,
            format!("unsupported snapshot version {}", envelope.version),
        ));
    }
    validate(&envelope.state)?;
    Ok(envelope.state)
}

/// Check the structural invariants of a game state.
pub fn validate(state: &GameState) -> Result<(), DomainError> {
    validate_player_count(state.player_count)
        .map_err(|_| DomainError::integrity("player_count out of range"))?;

    if state.current_player >= state.player_count {
        return Err(DomainError::integrity(format!(
            "current_player {} is not below player_count {}",
            state.current_player, state.player_count
        )));
    }

    for (castle, owner) in state.castle_owner.iter().enumerate() {
        if let Some(owner) = owner {
            if *owner >= state.player_count {
                return Err(DomainError::integrity(format!(
                    "castle {castle} is owned by unknown player {owner}"
                )));
            }
        }
    }

    if state.current_roll.len() > START_DICE {
        return Err(DomainError::integrity(format!(
            "current_roll holds {} dice, more than {START_DICE}",
            state.current_roll.len()
        )));
    }

    match state.currently_attacking {
        None => {
            if !state.completed_lines.is_empty() {
                return Err(DomainError::integrity(
                    "completed_lines must be empty while not attacking",
                ));
            }
        }
        Some(id) => {
            let castle = catalog::castle(id).ok_or_else(|| {
                DomainError::integrity(format!("attacked castle {id} is not in the catalog"))
            })?;
            if state.owner(id) == Some(state.current_player) {
                return Err(DomainError::integrity(
                    "current player is attacking a castle they own",
                ));
            }
            if is_clan_closed(state, castle.clan) {
                return Err(DomainError::integrity(
                    "attacked castle belongs to a closed clan",
                ));
            }
            let line_count = state.lines_for(castle).len();
            if let Some(bad) = state.completed_lines.iter().find(|&i| i >= line_count) {
                return Err(DomainError::integrity(format!(
                    "completed line {bad} is outside {}'s {line_count} lines",
                    castle.name
                )));
            }
            if state.completed_lines.len() == line_count {
                return Err(DomainError::integrity(
                    "every line is complete but the attack is still open",
                ));
            }
        }
    }

    Ok(())
}
