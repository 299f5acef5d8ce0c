#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod errors;
pub mod telemetry;

// Re-exports for public API
pub use ai::{create_ai, AiConfig, AiError, AiPlayer};
pub use domain::{
    DiceRoller, Die, GameEvent, GameSession, GameState, Move, Phase, PlayerId, PlayerView,
    ScriptedDice, SeededDice, ThreadRngDice,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    game_test_support::logging::init();
}
