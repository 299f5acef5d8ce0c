//! Heuristic: a deterministic greedy baseline that beats random play.
//!
//! Idle: castles nobody has taken yet come first, since only those move the
//! game towards its end; steals are considered when none fits. Each
//! candidate is scored by what taking it is worth (its points, a clan bonus
//! it would complete, points denied to the current owner) against how many
//! spare dice the attack leaves. `aggression` (0.0..=1.0) shifts weight from
//! spare dice towards value.
//!
//! Attacking: pay symbol lines before infantry since their faces are
//! scarcer, and the widest symbol line first. Infantry lines are paid with
//! as few dice as possible. With nothing payable, roll.
//!
//! No randomness: ties go to the lowest castle or line index.

use crate::ai::{AiError, AiPlayer};
use crate::domain::catalog::{self, clan_castles};
use crate::domain::lines::Line;
use crate::domain::player_view::{AttackOption, LineOption, Move, PlayerView};

pub const DEFAULT_AGGRESSION: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Heuristic {
    aggression: f64,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(aggression: Option<f64>) -> Self {
        Self {
            aggression: aggression.unwrap_or(DEFAULT_AGGRESSION).clamp(0.0, 1.0),
        }
    }

    pub fn aggression(&self) -> f64 {
        self.aggression
    }

    /// Points gained by `player` if `option` falls to them, including any
    /// clan set it completes and points taken from the current owner.
    fn attack_value(view: &PlayerView, option: &AttackOption) -> f64 {
        let Some(castle) = catalog::castle(option.castle) else {
            return 0.0;
        };
        let mut value = f64::from(option.points);

        if option.owner.is_some() {
            value += f64::from(option.points);
        }

        let completes_clan = clan_castles(castle.clan)
            .filter(|c| c.id != castle.id)
            .all(|c| view.castle_owner.get(c.id).copied().flatten() == Some(view.player));
        if completes_clan {
            if let Some(clan) = catalog::clan(castle.clan) {
                let held: u32 = clan_castles(castle.clan)
                    .filter(|c| c.id != castle.id)
                    .map(|c| c.points)
                    .sum();
                value += f64::from(clan.set_points) - f64::from(held) - f64::from(option.points);
            }
        }
        value
    }

    fn choose_attack(&self, view: &PlayerView) -> Option<Move> {
        let held = view.roll.len() as f64;
        let fresh: Vec<&AttackOption> = view
            .attack_options
            .iter()
            .filter(|o| o.owner.is_none())
            .collect();
        let candidates: Vec<&AttackOption> = if fresh.is_empty() {
            view.attack_options.iter().collect()
        } else {
            fresh
        };

        let mut best: Option<(f64, usize)> = None;
        for option in candidates {
            let slack = held - option.min_dice as f64;
            let score = self.aggression * Self::attack_value(view, option)
                + (1.0 - self.aggression) * slack;
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, option.castle));
            }
        }
        best.map(|(_, castle)| Move::Attack { castle })
    }

    fn line_rank(option: &LineOption) -> (u8, usize) {
        match option.requirement {
            Line::Symbol { count, .. } => (0, usize::from(u8::MAX - count)),
            Line::Infantry { .. } => (1, option.dice_used),
        }
    }

    fn choose_line(view: &PlayerView) -> Option<Move> {
        view.line_options
            .iter()
            .min_by_key(|o| (Self::line_rank(o), o.line))
            .map(|o| Move::CompleteLine { line: o.line })
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AiPlayer for Heuristic {
    fn choose_move(&self, view: &PlayerView) -> Result<Move, AiError> {
        let legal = view.legal_moves();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal moves available".into()));
        }

        let choice = self
            .choose_attack(view)
            .or_else(|| Self::choose_line(view))
            .unwrap_or(Move::Roll);

        if !legal.contains(&choice) {
            return Err(AiError::Internal(format!(
                "heuristic picked {choice:?}, which is not legal"
            )));
        }
        Ok(choice)
    }
}
