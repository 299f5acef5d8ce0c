//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, written as games finish.
    Jsonl,
    /// A single JSON array, written when the run ends.
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    /// Also keep each game's full event log.
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    pub fn name(&self) -> &'static str {
        match self {
            AiType::Heuristic => "Heuristic",
            AiType::Random => "RandomPlayer", // Actual name in registry
        }
    }
}
