use chrono::NaiveDate;

use super::super::domain::IntentInput;
use super::config::IntentScoreConfig;
use super::IntentScore;

pub(crate) fn score_intent(
    input: &IntentInput,
    today: NaiveDate,
    config: &IntentScoreConfig,
) -> IntentScore {
    // Whole days between "today" and the last application. A future
    // last-applied date makes this negative, which pushes recency above the
    // base; only the lower bound is enforced.
    let days_since_last = (today - input.last_applied).num_days();
    let recency = (config.recency_base - days_since_last).max(0) as f64;

    let resume = if input.resume_updated {
        config.updated_resume_score
    } else {
        config.stale_resume_score
    };

    let frequency =
        (f64::from(input.times_applied) * config.points_per_application).min(config.frequency_cap);

    // Percent weights keep the weighted sum exact for integer-valued
    // sub-scores, so the rounded total matches the historical outputs.
    let weighted = recency * f64::from(config.recency_weight_pct)
        + resume * f64::from(config.resume_weight_pct)
        + frequency * f64::from(config.frequency_weight_pct);
    let total = round_to_tenth(weighted / 100.0);

    IntentScore {
        recency,
        resume,
        frequency,
        total,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
