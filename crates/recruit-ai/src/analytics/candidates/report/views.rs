use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::{EducationLevel, ExperienceBucket};
use super::super::scoring::IntentScore;

/// Headline KPIs for the dashboard landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub job_openings: usize,
    pub total_applications: usize,
    pub unique_candidates: usize,
    pub repeat_applicants: usize,
}

/// One candidate row in the overview/segmentation roster. Profile fields come
/// from the candidate's first ingested application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRosterEntry {
    pub email: String,
    pub full_name: String,
    pub education: EducationLevel,
    pub education_label: &'static str,
    pub experience: ExperienceBucket,
    pub experience_label: &'static str,
    pub applications: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub summary: DashboardSummary,
    pub roster: Vec<CandidateRosterEntry>,
}

/// A repeat applicant ranked for re-engagement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatApplicantView {
    pub email: String,
    pub full_name: String,
    pub times_applied: u32,
    pub first_applied: NaiveDate,
    pub last_applied: NaiveDate,
    pub applied_recently: bool,
    pub resume_updated: bool,
    pub intent: IntentScore,
}

/// Repeat applicants partitioned by the recency window, each partition sorted
/// by intent score descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatApplicantReport {
    pub today: NaiveDate,
    pub recent_window_days: i64,
    pub recent: Vec<RepeatApplicantView>,
    pub older: Vec<RepeatApplicantView>,
}

/// Diff between a candidate's last two snapshots. `applications` below two
/// means there was nothing to compare; empty `changes` with two or more means
/// no material change was detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeChangesView {
    pub email: String,
    pub full_name: String,
    pub applications: usize,
    pub changes: Vec<String>,
}

/// One applicant row in the skill-alignment ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillMatchEntry {
    pub email: String,
    pub full_name: String,
    pub matched_skills: Vec<String>,
    pub match_count: usize,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillAlignmentView {
    pub job_id: String,
    pub required_skills: Vec<String>,
    pub candidates: Vec<SkillMatchEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationHistoryEntry {
    pub application_platform: String,
    pub job_id: String,
    pub application_date: NaiveDate,
    pub source_system: String,
}

/// Lookup result: profile fields plus the candidate's full application
/// history ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMatchView {
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub education_label: &'static str,
    pub experience_label: &'static str,
    pub history: Vec<ApplicationHistoryEntry>,
}

/// Outcome of one feed ingest call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub source_system: String,
    pub records_ingested: usize,
    pub total_records: usize,
}
