//! One game instance: its state plus the dice it rolls with.
//!
//! A session is not synchronized. Callers that share a game between
//! threads must serialize access to it themselves.

use crate::domain::catalog::CastleId;
use crate::domain::dice::DiceRoller;
use crate::domain::events::GameEvent;
use crate::domain::player_view::PlayerView;
use crate::domain::scoring;
use crate::domain::snapshot;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::turn;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub struct GameSession<D> {
    state: GameState,
    dice: D,
}

impl<D: DiceRoller> GameSession<D> {
    /// Start a new game for `player_count` players (2..=6).
    pub fn start(player_count: u8, mut dice: D) -> Result<(Self, Vec<GameEvent>), DomainError> {
        let (state, events) = turn::start_game(player_count, &mut dice)?;
        Ok((Self { state, dice }, events))
    }

    /// Resume a game from [`GameSession::encode`] output.
    pub fn decode(bytes: &[u8], dice: D) -> Result<Self, DomainError> {
        let state = snapshot::decode(bytes)?;
        Ok(Self { state, dice })
    }

    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        snapshot::encode(&self.state)
    }

    pub fn attack(
        &mut self,
        player: PlayerId,
        castle: CastleId,
    ) -> Result<Vec<GameEvent>, DomainError> {
        turn::attack(&mut self.state, &mut self.dice, player, castle)
    }

    /// `line` is 0-based.
    pub fn complete_line(
        &mut self,
        player: PlayerId,
        line: usize,
    ) -> Result<Vec<GameEvent>, DomainError> {
        turn::complete_line(&mut self.state, &mut self.dice, player, line)
    }

    pub fn roll(&mut self, player: PlayerId) -> Result<Vec<GameEvent>, DomainError> {
        turn::roll(&mut self.state, &mut self.dice, player)
    }

    pub fn scores(&self) -> Vec<u32> {
        scoring::scores(&self.state)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn winners(&self) -> Vec<PlayerId> {
        scoring::winners(&self.state)
    }

    pub fn whose_turn(&self) -> Vec<PlayerId> {
        vec![self.state.current_player]
    }

    pub fn view(&self, player: PlayerId) -> Result<PlayerView, DomainError> {
        PlayerView::for_player(&self.state, player)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
