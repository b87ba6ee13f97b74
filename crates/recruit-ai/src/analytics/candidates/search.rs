use std::collections::BTreeSet;

use serde::Deserialize;

use super::domain::{CandidateApplication, EducationLevel, ExperienceBucket};
use super::report::views::{
    ApplicationHistoryEntry, CandidateMatchView, CandidateRosterEntry, SkillAlignmentView,
    SkillMatchEntry,
};

/// Roster filter for the segmentation view. An empty list leaves that
/// dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SegmentFilter {
    #[serde(default)]
    pub education: Vec<EducationLevel>,
    #[serde(default)]
    pub experience: Vec<ExperienceBucket>,
}

impl SegmentFilter {
    fn matches(&self, entry: &CandidateRosterEntry) -> bool {
        let education_ok = self.education.is_empty() || self.education.contains(&entry.education);
        let experience_ok =
            self.experience.is_empty() || self.experience.contains(&entry.experience);
        education_ok && experience_ok
    }
}

pub(crate) fn filter_roster(
    roster: Vec<CandidateRosterEntry>,
    filter: &SegmentFilter,
) -> Vec<CandidateRosterEntry> {
    roster
        .into_iter()
        .filter(|entry| filter.matches(entry))
        .collect()
}

/// Substring search over candidate fields. Name, email, and job id are
/// matched case-insensitively; phone is matched verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
}

impl LookupQuery {
    fn matches(&self, app: &CandidateApplication) -> bool {
        contains_ci(&app.record.full_name, self.name.as_deref())
            && contains_ci(&app.record.email, self.email.as_deref())
            && self
                .phone
                .as_deref()
                .map_or(true, |needle| app.record.phone.contains(needle))
            && contains_ci(&app.record.job_id, self.job_id.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    }
}

/// Applies the lookup filters, then expands each matching candidate into a
/// profile with their full application history ordered by date. Candidates
/// appear in the order of their first matching application.
pub(crate) fn lookup(
    applications: &[CandidateApplication],
    query: &LookupQuery,
) -> Vec<CandidateMatchView> {
    let mut matches = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for app in applications.iter().filter(|app| query.matches(app)) {
        let email = app.record.email.as_str();
        if !seen.insert(email) {
            continue;
        }

        let mut history: Vec<ApplicationHistoryEntry> = applications
            .iter()
            .filter(|other| other.record.email == email)
            .map(|other| ApplicationHistoryEntry {
                application_platform: other.record.application_platform.clone(),
                job_id: other.record.job_id.clone(),
                application_date: other.record.application_date,
                source_system: other.record.source_system.clone(),
            })
            .collect();
        history.sort_by_key(|entry| entry.application_date);

        matches.push(CandidateMatchView {
            email: app.record.email.clone(),
            full_name: app.record.full_name.clone(),
            phone: app.record.phone.clone(),
            education_label: app.snapshot.education.label(),
            experience_label: app.snapshot.experience_bucket.label(),
            history,
        });
    }

    matches
}

/// Ranks a job's applicants by overlap with the required skill set,
/// descending; ties keep ingestion order.
pub(crate) fn skill_alignment(
    applications: &[CandidateApplication],
    job_id: &str,
    required: &BTreeSet<String>,
) -> SkillAlignmentView {
    let mut candidates: Vec<SkillMatchEntry> = applications
        .iter()
        .filter(|app| app.record.job_id == job_id)
        .map(|app| {
            let matched_skills: Vec<String> =
                app.snapshot.skills.intersection(required).cloned().collect();
            SkillMatchEntry {
                email: app.record.email.clone(),
                full_name: app.record.full_name.clone(),
                match_count: matched_skills.len(),
                matched_skills,
                skills: app.snapshot.skills.iter().cloned().collect(),
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    SkillAlignmentView {
        job_id: job_id.to_string(),
        required_skills: required.iter().cloned().collect(),
        candidates,
    }
}
