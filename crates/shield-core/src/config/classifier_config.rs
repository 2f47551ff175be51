//! Scoring settings.

use serde::{Deserialize, Serialize};

use crate::constants::FLOOR_PROBABILITY;

/// Configuration for the classification engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Probability substituted for unseen words. Default: 1e-11.
    pub floor_probability: Option<f64>,
}

impl ClassifierConfig {
    pub fn effective_floor_probability(&self) -> f64 {
        self.floor_probability.unwrap_or(FLOOR_PROBABILITY)
    }
}
