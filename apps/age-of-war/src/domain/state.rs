use serde::{Deserialize, Serialize};

use crate::domain::catalog::{self, Castle, CastleId, CASTLE_COUNT};
use crate::domain::dice::Die;
use crate::domain::lines::Line;
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = u8; // 0..player_count

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 6;

/// Game progression as seen from the current player.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// No attack in progress; the player may attack or roll.
    Idle,
    /// Attacking `castle`; the player may complete lines or roll.
    Attacking { castle: CastleId },
    /// Every castle has been conquered.
    GameOver,
}

/// Small bitset of line indices completed during the current attack.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineSet(u16);

impl LineSet {
    pub const CAPACITY: usize = 16;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(&self, line: usize) -> bool {
        line < Self::CAPACITY && self.0 & (1 << line) != 0
    }

    pub fn insert(&mut self, line: usize) {
        debug_assert!(line < Self::CAPACITY, "line index out of range");
        self.0 |= 1 << line;
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::CAPACITY).filter(move |&i| self.contains(i))
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player whose turn it is.
    pub current_player: PlayerId,
    /// Fixed at start, 2..=6.
    pub player_count: u8,
    /// Owner per castle. `Some` once a castle has been conquered; never
    /// cleared afterwards, only reassigned.
    pub castle_owner: [Option<PlayerId>; CASTLE_COUNT],
    /// Castle under attack this turn, if any.
    pub currently_attacking: Option<CastleId>,
    /// Lines of the attacked castle completed so far.
    pub completed_lines: LineSet,
    /// Dice currently held by the active player.
    pub current_roll: Vec<Die>,
}

impl GameState {
    /// Empty board for `player_count` players, before the first roll.
    pub fn new(player_count: u8) -> Self {
        Self {
            current_player: 0,
            player_count,
            castle_owner: [None; CASTLE_COUNT],
            currently_attacking: None,
            completed_lines: LineSet::empty(),
            current_roll: Vec::new(),
        }
    }

    pub fn is_conquered(&self, castle: CastleId) -> bool {
        self.owner(castle).is_some()
    }

    pub fn owner(&self, castle: CastleId) -> Option<PlayerId> {
        self.castle_owner.get(castle).copied().flatten()
    }

    pub fn conquered_count(&self) -> usize {
        self.castle_owner.iter().filter(|o| o.is_some()).count()
    }

    pub fn is_finished(&self) -> bool {
        self.conquered_count() == CASTLE_COUNT
    }

    pub fn phase(&self) -> Phase {
        if self.is_finished() {
            return Phase::GameOver;
        }
        match self.currently_attacking {
            Some(castle) => Phase::Attacking { castle },
            None => Phase::Idle,
        }
    }

    /// Lines of `castle` as they stand now (fortified if already conquered).
    pub fn lines_for(&self, castle: &Castle) -> Vec<Line> {
        castle.lines(self.is_conquered(castle.id))
    }

    pub fn dice_held(&self) -> usize {
        self.current_roll.len()
    }
}

/// Player after `p` in seating order.
#[inline]
pub fn next_player(p: PlayerId, player_count: u8) -> PlayerId {
    debug_assert!(player_count > 0, "player_count must be positive");
    ((u16::from(p) + 1) % u16::from(player_count)) as PlayerId
}

pub fn validate_player_count(player_count: u8) -> Result<(), DomainError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("only for {MIN_PLAYERS} to {MAX_PLAYERS} players, got {player_count}"),
        ))
    }
}

/// Castle currently under attack, or an integrity error naming `ctx`.
pub fn require_attacked_castle(
    state: &GameState,
    ctx: &'static str,
) -> Result<&'static Castle, DomainError> {
    let id = state.currently_attacking.ok_or_else(|| {
        DomainError::integrity(format!(
            "Invariant violated: currently_attacking must be set ({ctx})"
        ))
    })?;
    catalog::castle(id).ok_or_else(|| {
        DomainError::integrity(format!(
            "Invariant violated: attacked castle {id} is not in the catalog ({ctx})"
        ))
    })
}
