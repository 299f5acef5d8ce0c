//! AI player module - handles automated game decisions.
//!
//! This module provides:
//! - AI trait for different AI implementations
//! - RandomPlayer: makes random legal moves (seedable for tests)
//! - Heuristic: deterministic greedy baseline
//! - A registry of named factories used by the simulator

mod config;
mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use config::AiConfig;
pub use heuristic::Heuristic;
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player from a registered name and optional JSON config.
///
/// `"random"` and `"heuristic"` are accepted as short names. Returns `None`
/// if `ai_type` is not registered.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let name = match ai_type {
        "random" => RandomPlayer::NAME,
        other => other,
    };
    let factory = registry::by_name(name)?;
    let config = AiConfig::from_json(config);
    Some((factory.make)(&config))
}
