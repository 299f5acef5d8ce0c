//! Per-seat AI settings, read from the JSON the simulator builds.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Knobs understood by the registered AIs.
///
/// ```json
/// {"seed": 12345, "aggression": 0.8}
/// ```
///
/// `seed` makes [`RandomPlayer`](super::RandomPlayer) reproducible;
/// `aggression` tunes [`Heuristic`](super::Heuristic). Each AI ignores the
/// field it has no use for, and unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Weight on castle value versus spare dice, 0.0..=1.0. Clamped by the AI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggression: Option<f64>,
}

impl AiConfig {
    /// Parse `config`, or an empty config when it is absent or ill-typed.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn aggression(&self) -> Option<f64> {
        self.aggression
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
