//! Domain layer: pure game logic types and helpers.

pub mod catalog;
pub mod conquest;
pub mod dice;
pub mod end_of_turn;
pub mod events;
pub mod lines;
pub mod player_view;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod turn;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_end_of_turn;
#[cfg(test)]
mod tests_turn;

// Re-exports for ergonomics
pub use catalog::{Castle, CastleId, Clan, ClanId, CASTLES, CASTLE_COUNT, CLANS};
pub use dice::{DiceRoller, Die, ScriptedDice, SeededDice, ThreadRngDice, START_DICE};
pub use end_of_turn::TurnOutcome;
pub use events::GameEvent;
pub use lines::{Affordability, Line, Symbol};
pub use player_view::{Move, PlayerView};
pub use scoring::{clan_conqueror, scores, winners};
pub use session::GameSession;
pub use state::{GameState, LineSet, Phase, PlayerId};
