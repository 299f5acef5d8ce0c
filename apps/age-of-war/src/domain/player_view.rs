//! What one player can see and do right now.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CastleId, CASTLES};
use crate::domain::dice::Die;
use crate::domain::lines::Line;
use crate::domain::scoring::{is_clan_closed, scores};
use crate::domain::state::{require_attacked_castle, GameState, Phase, PlayerId};
use crate::errors::domain::DomainError;

/// One legal action, as chosen by an automated player.
///
/// The engine itself exposes the three actions as separate calls; this enum
/// only carries a choice from a decision-maker to whoever dispatches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "move", rename_all = "snake_case")]
pub enum Move {
    Attack { castle: CastleId },
    CompleteLine { line: usize },
    Roll,
}

/// A castle the player may attack this turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOption {
    pub castle: CastleId,
    pub points: u32,
    pub owner: Option<PlayerId>,
    pub min_dice: usize,
    pub lines: Vec<Line>,
}

/// A line of the attacked castle the current dice can pay for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOption {
    pub line: usize,
    pub requirement: Line,
    pub dice_used: usize,
}

/// Game state visible to a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub player: PlayerId,
    pub player_count: u8,
    pub is_my_turn: bool,
    pub phase: Phase,
    pub roll: Vec<Die>,
    pub castle_owner: Vec<Option<PlayerId>>,
    pub scores: Vec<u32>,
    /// Castles open to attack that fit in the current dice (idle only).
    pub attack_options: Vec<AttackOption>,
    /// Lines still open on the attacked castle.
    pub remaining_lines: Vec<(usize, Line)>,
    /// Open lines payable with the current dice.
    pub line_options: Vec<LineOption>,
}

impl PlayerView {
    pub fn for_player(state: &GameState, who: PlayerId) -> Result<Self, DomainError> {
        let phase = state.phase();
        let is_my_turn = state.current_player == who && phase != Phase::GameOver;

        let mut attack_options = Vec::new();
        let mut remaining_lines = Vec::new();
        let mut line_options = Vec::new();

        if is_my_turn {
            match phase {
                Phase::Idle => {
                    attack_options = CASTLES
                        .iter()
                        .filter(|c| state.owner(c.id) != Some(who))
                        .filter(|c| !is_clan_closed(state, c.clan))
                        .filter(|c| c.min_dice(state.is_conquered(c.id)) <= state.dice_held())
                        .map(|c| AttackOption {
                            castle: c.id,
                            points: c.points,
                            owner: state.owner(c.id),
                            min_dice: c.min_dice(state.is_conquered(c.id)),
                            lines: state.lines_for(c),
                        })
                        .collect();
                }
                Phase::Attacking { .. } => {
                    let castle = require_attacked_castle(state, "PlayerView::for_player")?;
                    for (i, line) in state.lines_for(castle).into_iter().enumerate() {
                        if state.completed_lines.contains(i) {
                            continue;
                        }
                        remaining_lines.push((i, line));
                        let a = line.can_afford(&state.current_roll);
                        if a.can_afford {
                            line_options.push(LineOption {
                                line: i,
                                requirement: line,
                                dice_used: a.dice_used,
                            });
                        }
                    }
                }
                Phase::GameOver => {}
            }
        }

        Ok(Self {
            player: who,
            player_count: state.player_count,
            is_my_turn,
            phase,
            roll: state.current_roll.clone(),
            castle_owner: state.castle_owner.to_vec(),
            scores: scores(state),
            attack_options,
            remaining_lines,
            line_options,
        })
    }

    /// Actions worth taking right now: attacks that fit in the dice,
    /// payable lines and a re-roll. The engine also accepts attacks that
    /// cannot succeed; those simply end the turn.
    pub fn legal_moves(&self) -> Vec<Move> {
        if !self.is_my_turn {
            return Vec::new();
        }
        let mut moves: Vec<Move> = match self.phase {
            Phase::Idle => self
                .attack_options
                .iter()
                .map(|o| Move::Attack { castle: o.castle })
                .collect(),
            Phase::Attacking { .. } => self
                .line_options
                .iter()
                .map(|o| Move::CompleteLine { line: o.line })
                .collect(),
            Phase::GameOver => return Vec::new(),
        };
        if !self.roll.is_empty() {
            moves.push(Move::Roll);
        }
        moves
    }
}
