//! Structured game log entries.
//!
//! Every entry is public. Entries carry ids and counts only; turning them
//! into text is left to the renderer.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CastleId, ClanId};
use crate::domain::dice::Die;
use crate::domain::lines::Line;
use crate::domain::state::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh turn began with a full hand.
    TurnStarted { player: PlayerId, dice: Vec<Die> },

    /// The active player re-rolled their remaining dice.
    DiceRolled { player: PlayerId, dice: Vec<Die> },

    /// An attack began; `lines` is the castle's current requirement layout.
    AttackStarted {
        player: PlayerId,
        castle: CastleId,
        lines: Vec<Line>,
    },

    LineCompleted {
        player: PlayerId,
        castle: CastleId,
        line: usize,
        requirement: Line,
        dice_used: usize,
    },

    /// `previous_owner` is set when the castle was taken from another player.
    CastleConquered {
        player: PlayerId,
        castle: CastleId,
        previous_owner: Option<PlayerId>,
    },

    ClanConquered { player: PlayerId, clan: ClanId },

    /// The turn ended without a conquest. `castle` is `None` when the player
    /// could not afford to attack anything.
    AttackFailed {
        player: PlayerId,
        castle: Option<CastleId>,
    },
}

impl GameEvent {
    /// Player the entry is about.
    pub fn player(&self) -> PlayerId {
        match self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::AttackStarted { player, .. }
            | GameEvent::LineCompleted { player, .. }
            | GameEvent::CastleConquered { player, .. }
            | GameEvent::ClanConquered { player, .. }
            | GameEvent::AttackFailed { player, .. } => *player,
        }
    }

    pub fn is_turn_start(&self) -> bool {
        matches!(self, GameEvent::TurnStarted { .. })
    }
}
