use super::common::date;
use crate::analytics::candidates::domain::IntentInput;
use crate::analytics::candidates::scoring::{IntentScoreConfig, IntentScorer};
use chrono::Duration;

fn input(times_applied: u32, last_applied: chrono::NaiveDate, resume_updated: bool) -> IntentInput {
    IntentInput {
        times_applied,
        first_applied: last_applied - Duration::days(90),
        last_applied,
        resume_updated,
    }
}

#[test]
fn perfect_signals_score_exactly_one_hundred() {
    let scorer = IntentScorer::default();
    let today = date(2025, 6, 1);

    let score = scorer.score(&input(4, today, true), today);

    assert_eq!(score.recency, 100.0);
    assert_eq!(score.resume, 100.0);
    assert_eq!(score.frequency, 100.0);
    assert_eq!(score.total, 100.0);
}

#[test]
fn stale_single_applicant_rounds_to_sixteen_point_eight() {
    let scorer = IntentScorer::default();
    let today = date(2025, 6, 1);
    let last_applied = today - Duration::days(200);

    let score = scorer.score(&input(1, last_applied, false), today);

    assert_eq!(score.recency, 0.0);
    assert_eq!(score.resume, 30.0);
    assert_eq!(score.frequency, 25.0);
    assert_eq!(score.total, 16.8);
}

#[test]
fn frequency_saturates_at_four_applications() {
    let scorer = IntentScorer::default();
    let today = date(2025, 6, 1);
    let last_applied = today - Duration::days(10);

    let mut previous = f64::MIN;
    for times in 1..=6 {
        let score = scorer.score(&input(times, last_applied, true), today);
        assert!(
            score.total >= previous,
            "score decreased at times_applied={times}: {} < {previous}",
            score.total
        );
        previous = score.total;
    }

    let at_cap = scorer.score(&input(4, last_applied, true), today);
    let beyond_cap = scorer.score(&input(9, last_applied, true), today);
    assert_eq!(at_cap.total, beyond_cap.total);
}

#[test]
fn future_last_applied_dates_push_the_total_above_one_hundred() {
    let scorer = IntentScorer::default();
    let today = date(2025, 6, 1);
    let future = today + Duration::days(50);

    let score = scorer.score(&input(4, future, true), today);

    assert_eq!(score.recency, 150.0);
    assert_eq!(score.total, 120.0);
}

#[test]
fn recency_floors_at_zero_for_very_old_applications() {
    let scorer = IntentScorer::default();
    let today = date(2025, 6, 1);
    let ancient = today - Duration::days(5000);

    let score = scorer.score(&input(2, ancient, true), today);

    assert_eq!(score.recency, 0.0);
    assert_eq!(score.total, 47.5);
}

#[test]
fn scoring_is_idempotent() {
    let scorer = IntentScorer::new(IntentScoreConfig::default());
    let today = date(2025, 6, 1);
    let candidate = input(3, today - Duration::days(42), true);

    let first = scorer.score(&candidate, today);
    let second = scorer.score(&candidate, today);

    assert_eq!(first, second);
}
