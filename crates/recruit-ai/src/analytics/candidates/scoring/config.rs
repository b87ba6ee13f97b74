use serde::{Deserialize, Serialize};

/// Named weights and constants for the reapplication intent score. Weights are
/// expressed in percent and must sum to 100 for the score to stay on the
/// historical 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScoreConfig {
    pub recency_weight_pct: u32,
    pub resume_weight_pct: u32,
    pub frequency_weight_pct: u32,
    /// Recency starts here and loses one point per day since the last application.
    pub recency_base: i64,
    pub updated_resume_score: f64,
    pub stale_resume_score: f64,
    pub points_per_application: f64,
    pub frequency_cap: f64,
}

impl Default for IntentScoreConfig {
    fn default() -> Self {
        Self {
            recency_weight_pct: 40,
            resume_weight_pct: 35,
            frequency_weight_pct: 25,
            recency_base: 100,
            updated_resume_score: 100.0,
            stale_resume_score: 30.0,
            points_per_application: 25.0,
            frequency_cap: 100.0,
        }
    }
}
