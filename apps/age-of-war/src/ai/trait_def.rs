//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::{Move, PlayerView};

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI was asked to move with nothing legal to do
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// Trait for AI players.
///
/// Implementations receive the game as seen by one player and must pick one
/// of `view.legal_moves()`. The caller dispatches the returned [`Move`] onto
/// the matching engine action.
pub trait AiPlayer: Send + Sync {
    fn choose_move(&self, view: &PlayerView) -> Result<Move, AiError>;
}
