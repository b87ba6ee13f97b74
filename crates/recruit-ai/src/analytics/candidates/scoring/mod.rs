mod config;
mod intent;

pub use config::IntentScoreConfig;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::IntentInput;

/// Stateless scorer that applies the configured weights to a candidate's
/// reapplication signals. "Today" is always supplied by the caller so scoring
/// stays deterministic under test.
#[derive(Debug, Clone)]
pub struct IntentScorer {
    config: IntentScoreConfig,
}

impl IntentScorer {
    pub fn new(config: IntentScoreConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, input: &IntentInput, today: NaiveDate) -> IntentScore {
        intent::score_intent(input, today, &self.config)
    }

    pub fn config(&self) -> &IntentScoreConfig {
        &self.config
    }
}

impl Default for IntentScorer {
    fn default() -> Self {
        Self::new(IntentScoreConfig::default())
    }
}

/// Sub-score breakdown so dashboards can show why a candidate ranked where
/// they did. `total` is rounded to one decimal place and is intentionally not
/// clamped to 100: a future last-applied date inflates recency past the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    pub recency: f64,
    pub resume: f64,
    pub frequency: f64,
    pub total: f64,
}
