//! Test-only game state helpers for domain unit tests.

use crate::domain::catalog::CastleId;
use crate::domain::dice::Die;
use crate::domain::state::{GameState, LineSet, PlayerId};

/// Parse a compact dice notation: `1`, `2`, `3` for infantry strengths,
/// `A` archery, `C` cavalry, `D` daimyo. Whitespace is ignored.
pub fn dice(faces: &str) -> Vec<Die> {
    faces
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '1' => Die::Infantry1,
            '2' => Die::Infantry2,
            '3' => Die::Infantry3,
            'A' => Die::Archery,
            'C' => Die::Cavalry,
            'D' => Die::Daimyo,
            other => panic!("unknown die token {other:?}"),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct MakeGameStateArgs {
    pub player_count: Option<u8>,
    pub current_player: Option<PlayerId>,
    pub owners: Vec<(CastleId, PlayerId)>,
    pub attacking: Option<CastleId>,
    pub completed: Vec<usize>,
}

/// Build a `GameState` holding `roll`, with sensible defaults for the rest:
/// two players, player 0 to act, an empty board and no attack.
pub fn make_game_state(roll: Vec<Die>, args: MakeGameStateArgs) -> GameState {
    let mut state = GameState::new(args.player_count.unwrap_or(2));
    state.current_player = args.current_player.unwrap_or(0);
    for (castle, owner) in args.owners {
        state.castle_owner[castle] = Some(owner);
    }
    state.currently_attacking = args.attacking;
    let mut completed = LineSet::empty();
    for line in args.completed {
        completed.insert(line);
    }
    state.completed_lines = completed;
    state.current_roll = roll;
    state
}

/// Every castle owned by `owner`, i.e. a finished game.
pub fn finished_state(player_count: u8, owner: impl Fn(CastleId) -> PlayerId) -> GameState {
    let mut state = GameState::new(player_count);
    for (castle, slot) in state.castle_owner.iter_mut().enumerate() {
        *slot = Some(owner(castle));
    }
    state
}
