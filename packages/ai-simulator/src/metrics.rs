//! Metrics collection and output for AI simulation results.

use age_of_war::{GameEvent, PlayerId};
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub player_metrics: Vec<PlayerMetrics>,
    /// Engine log; only kept at [`MetricsLevel::Detailed`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<GameEvent>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub players: u8,
    pub ai_types: Vec<String>,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<u32>,
    pub winners: Vec<PlayerId>,
    pub moves: usize,
    pub turns: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: PlayerId,
    pub ai_type: String,
    pub score: u32,
    pub castles_held: usize,
    pub turns: u32,
    pub rolls: u32,
    pub lines_completed: u32,
    pub attacks: AttackStats,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AttackStats {
    pub conquests: u32,
    /// Conquests that took a castle from another player.
    pub steals: u32,
    pub failed: u32,
    /// Turns that ended without anything affordable to attack.
    pub idle_turns: u32,
    pub clans_conquered: u32,
    pub success_pct: f64,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    ai_types: Vec<String>,
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let player_metrics = ai_types
        .iter()
        .enumerate()
        .map(|(seat, ai_type)| build_player_metrics(seat as PlayerId, ai_type, result))
        .collect();

    let events = match level {
        MetricsLevel::Basic => None,
        MetricsLevel::Detailed => Some(result.events.clone()),
    };

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfig {
            players: ai_types.len() as u8,
            ai_types,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winners: result.winners.clone(),
            moves: result.moves,
            turns: result.turns(),
            duration_ms,
        },
        player_metrics,
        events,
    }
}

fn build_player_metrics(seat: PlayerId, ai_type: &str, result: &GameResult) -> PlayerMetrics {
    let mut turns = 0;
    let mut rolls = 0;
    let mut lines_completed = 0;
    let mut attacks = AttackStats::default();

    for event in result.events.iter().filter(|e| e.player() == seat) {
        match event {
            GameEvent::TurnStarted { .. } => turns += 1,
            GameEvent::DiceRolled { .. } => rolls += 1,
            GameEvent::AttackStarted { .. } => {}
            GameEvent::LineCompleted { .. } => lines_completed += 1,
            GameEvent::CastleConquered { previous_owner, .. } => {
                attacks.conquests += 1;
                if previous_owner.is_some() {
                    attacks.steals += 1;
                }
            }
            GameEvent::ClanConquered { .. } => attacks.clans_conquered += 1,
            GameEvent::AttackFailed { castle: Some(_), .. } => attacks.failed += 1,
            GameEvent::AttackFailed { castle: None, .. } => attacks.idle_turns += 1,
        }
    }

    let attempts = attacks.conquests + attacks.failed;
    attacks.success_pct = if attempts > 0 {
        (attacks.conquests as f64 / attempts as f64) * 100.0
    } else {
        0.0
    };

    let idx = usize::from(seat);
    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        score: result.final_scores.get(idx).copied().unwrap_or(0),
        castles_held: result.castles_held.get(idx).copied().unwrap_or(0),
        turns,
        rolls,
        lines_completed,
        attacks,
    }
}

/// CSV summary row for quick analysis.
///
/// Seats beyond the game's player count are left empty.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub players: u8,
    /// Winning seats joined with `|`.
    pub winners: String,
    pub moves: usize,
    pub turns: usize,
    pub seat0_score: Option<u32>,
    pub seat1_score: Option<u32>,
    pub seat2_score: Option<u32>,
    pub seat3_score: Option<u32>,
    pub seat4_score: Option<u32>,
    pub seat5_score: Option<u32>,
    pub seat0_ai: Option<String>,
    pub seat1_ai: Option<String>,
    pub seat2_ai: Option<String>,
    pub seat3_ai: Option<String>,
    pub seat4_ai: Option<String>,
    pub seat5_ai: Option<String>,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let score = |seat: usize| metrics.result.final_scores.get(seat).copied();
        let ai = |seat: usize| metrics.config.ai_types.get(seat).cloned();
        let winners = metrics
            .result
            .winners
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join("|");

        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            players: metrics.config.players,
            winners,
            moves: metrics.result.moves,
            turns: metrics.result.turns,
            seat0_score: score(0),
            seat1_score: score(1),
            seat2_score: score(2),
            seat3_score: score(3),
            seat4_score: score(4),
            seat5_score: score(5),
            seat0_ai: ai(0),
            seat1_ai: ai(1),
            seat2_ai: ai(2),
            seat3_ai: ai(3),
            seat4_ai: ai(4),
            seat5_ai: ai(5),
        }
    }
}
