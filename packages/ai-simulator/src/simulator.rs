//! In-memory game simulator for AI training and evaluation.
//!
//! Drives a [`GameSession`] with seeded dice, asking each seat's AI for a
//! move whenever it is that seat's turn and dispatching the move onto the
//! engine. Games are independent; nothing is shared between them.

use age_of_war::{AiError, AiPlayer, DomainError, GameEvent, GameSession, Move, PlayerId, SeededDice};
use thiserror::Error;
use tracing::debug;

/// Moves allowed before a game is abandoned.
pub const DEFAULT_MAX_MOVES: usize = 100_000;

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Final scores, indexed by seat.
    pub final_scores: Vec<u32>,
    /// Every seat sharing the best score after the clan tiebreak.
    pub winners: Vec<PlayerId>,
    /// Castles held by each seat when the game ended.
    pub castles_held: Vec<usize>,
    /// Actions dispatched to the engine.
    pub moves: usize,
    /// Full engine log, starting with the first `TurnStarted`.
    pub events: Vec<GameEvent>,
}

impl GameResult {
    pub fn turns(&self) -> usize {
        self.events.iter().filter(|e| e.is_turn_start()).count()
    }
}

/// Errors that can occur during simulation.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("AI error (seat {seat}): {source}")]
    Ai {
        seat: PlayerId,
        #[source]
        source: AiError,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("{ais} AIs supplied for {players} seats")]
    SeatMismatch { players: u8, ais: usize },

    #[error("Game not finished after {0} moves")]
    MoveLimit(usize),
}

/// In-memory game simulator for a single game.
pub struct Simulator {
    session: GameSession<SeededDice>,
    events: Vec<GameEvent>,
    max_moves: usize,
}

impl Simulator {
    /// Start a game for `players` seats whose dice come from `dice_seed`.
    pub fn new(players: u8, dice_seed: u64, max_moves: usize) -> Result<Self, SimulatorError> {
        let (session, events) = GameSession::start(players, SeededDice::new(dice_seed))?;
        Ok(Self {
            session,
            events,
            max_moves,
        })
    }

    /// Play the game to the end. `ais[seat]` decides for `seat`.
    pub fn simulate_game(
        mut self,
        ais: &[Box<dyn AiPlayer>],
    ) -> Result<GameResult, SimulatorError> {
        let players = self.session.state().player_count;
        if ais.len() != usize::from(players) {
            return Err(SimulatorError::SeatMismatch {
                players,
                ais: ais.len(),
            });
        }

        let mut moves = 0;
        while !self.session.is_finished() {
            if moves >= self.max_moves {
                return Err(SimulatorError::MoveLimit(moves));
            }
            for seat in self.session.whose_turn() {
                let view = self.session.view(seat)?;
                let choice = ais[usize::from(seat)]
                    .choose_move(&view)
                    .map_err(|source| SimulatorError::Ai { seat, source })?;
                debug!(seat, ?choice, "AI move");
                let events = self.apply(seat, choice)?;
                self.events.extend(events);
                moves += 1;
            }
        }

        let state = self.session.state();
        let castles_held = (0..players)
            .map(|p| state.castle_owner.iter().filter(|o| **o == Some(p)).count())
            .collect();

        Ok(GameResult {
            final_scores: self.session.scores(),
            winners: self.session.winners(),
            castles_held,
            moves,
            events: self.events,
        })
    }

    fn apply(&mut self, seat: PlayerId, choice: Move) -> Result<Vec<GameEvent>, SimulatorError> {
        let events = match choice {
            Move::Attack { castle } => self.session.attack(seat, castle)?,
            Move::CompleteLine { line } => self.session.complete_line(seat, line)?,
            Move::Roll => self.session.roll(seat)?,
        };
        Ok(events)
    }
}
