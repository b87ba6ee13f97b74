use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};

use super::super::domain::{CandidateApplication, IntentInput};
use super::super::scoring::IntentScorer;
use super::views::{
    CandidateRosterEntry, DashboardSummary, RepeatApplicantReport, RepeatApplicantView,
};

pub(crate) fn dashboard_summary(applications: &[CandidateApplication]) -> DashboardSummary {
    let mut jobs = BTreeSet::new();
    let mut per_email: BTreeMap<&str, usize> = BTreeMap::new();

    for app in applications {
        jobs.insert(app.record.job_id.as_str());
        *per_email.entry(app.record.email.as_str()).or_default() += 1;
    }

    DashboardSummary {
        job_openings: jobs.len(),
        total_applications: applications.len(),
        unique_candidates: per_email.len(),
        repeat_applicants: per_email.values().filter(|count| **count > 1).count(),
    }
}

/// Groups applications by email. Profile fields come from the first ingested
/// application per candidate; output is ordered by email.
pub(crate) fn roster(applications: &[CandidateApplication]) -> Vec<CandidateRosterEntry> {
    let mut entries: BTreeMap<&str, CandidateRosterEntry> = BTreeMap::new();

    for app in applications {
        entries
            .entry(app.record.email.as_str())
            .and_modify(|entry| entry.applications += 1)
            .or_insert_with(|| CandidateRosterEntry {
                email: app.record.email.clone(),
                full_name: app.record.full_name.clone(),
                education: app.snapshot.education,
                education_label: app.snapshot.education.label(),
                experience: app.snapshot.experience_bucket,
                experience_label: app.snapshot.experience_bucket.label(),
                applications: 1,
            });
    }

    entries.into_values().collect()
}

/// Derives the intent scorer's per-candidate aggregate, keyed by email.
pub(crate) fn intent_inputs(
    applications: &[CandidateApplication],
) -> BTreeMap<String, IntentInput> {
    let mut inputs: BTreeMap<String, IntentInput> = BTreeMap::new();

    for app in applications {
        let date = app.record.application_date;
        inputs
            .entry(app.record.email.clone())
            .and_modify(|input| {
                input.times_applied += 1;
                input.first_applied = input.first_applied.min(date);
                input.last_applied = input.last_applied.max(date);
            })
            .or_insert_with(|| IntentInput {
                times_applied: 1,
                first_applied: date,
                last_applied: date,
                resume_updated: false,
            });
    }

    for input in inputs.values_mut() {
        input.resume_updated = input.times_applied > 1;
    }

    inputs
}

pub(crate) fn repeat_applicants(
    applications: &[CandidateApplication],
    scorer: &IntentScorer,
    today: NaiveDate,
    recent_window_days: i64,
) -> RepeatApplicantReport {
    let mut names: BTreeMap<&str, &str> = BTreeMap::new();
    for app in applications {
        names
            .entry(app.record.email.as_str())
            .or_insert(app.record.full_name.as_str());
    }

    let window_start = today - Duration::days(recent_window_days);
    let mut recent = Vec::new();
    let mut older = Vec::new();

    for (email, input) in intent_inputs(applications) {
        if input.times_applied <= 1 {
            continue;
        }

        let applied_recently = input.last_applied >= window_start;
        let view = RepeatApplicantView {
            full_name: names.get(email.as_str()).copied().unwrap_or("").to_string(),
            email,
            times_applied: input.times_applied,
            first_applied: input.first_applied,
            last_applied: input.last_applied,
            applied_recently,
            resume_updated: input.resume_updated,
            intent: scorer.score(&input, today),
        };

        if applied_recently {
            recent.push(view);
        } else {
            older.push(view);
        }
    }

    recent.sort_by(|a, b| b.intent.total.total_cmp(&a.intent.total));
    older.sort_by(|a, b| b.intent.total.total_cmp(&a.intent.total));

    RepeatApplicantReport {
        today,
        recent_window_days,
        recent,
        older,
    }
}
