use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidate records as assigned by the source feeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateRecordId(pub String);

/// One submission event as ingested from a source feed. Immutable once ingested;
/// (candidate record, job, date) identifies a submission in practice but the
/// store does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub candidate_record_id: CandidateRecordId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub job_id: String,
    pub application_date: NaiveDate,
    pub application_platform: String,
    pub source_system: String,
}

/// Education levels assigned during enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Graduate,
    PostGraduate,
}

impl EducationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Graduate => "Graduate",
            Self::PostGraduate => "Post-Graduate",
        }
    }
}

/// Ordered experience categories derived from years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBucket {
    Fresher,
    EarlyCareer,
    Experienced,
    Senior,
}

impl ExperienceBucket {
    /// Total partition over unsigned years: 0, 1-3, 4-7, 8+.
    pub const fn for_years(years: u8) -> Self {
        match years {
            0 => Self::Fresher,
            1..=3 => Self::EarlyCareer,
            4..=7 => Self::Experienced,
            _ => Self::Senior,
        }
    }

    /// Validating constructor for untrusted integer input.
    pub fn from_years(years: i64) -> Result<Self, InvalidInput> {
        let years = u8::try_from(years)
            .map_err(|_| InvalidInput::ExperienceYearsOutOfRange(years))?;
        Ok(Self::for_years(years))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fresher => "Fresher",
            Self::EarlyCareer => "Early Career (1–3 yrs)",
            Self::Experienced => "Experienced (4–7 yrs)",
            Self::Senior => "Senior (8+ yrs)",
        }
    }
}

/// Point-in-time view of a candidate's enriched attributes, attached to one
/// application record. Skills are kept in a sorted set so listings derived
/// from them are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    pub education: EducationLevel,
    pub experience_years: u8,
    pub experience_bucket: ExperienceBucket,
    pub skills: BTreeSet<String>,
    pub current_role: String,
}

impl CandidateSnapshot {
    pub fn new(
        education: EducationLevel,
        experience_years: u8,
        skills: BTreeSet<String>,
        current_role: String,
    ) -> Self {
        Self {
            education,
            experience_years,
            experience_bucket: ExperienceBucket::for_years(experience_years),
            skills,
            current_role,
        }
    }
}

/// Application record paired with its enrichment snapshot as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateApplication {
    pub record: ApplicationRecord,
    pub snapshot: CandidateSnapshot,
}

/// Per-candidate aggregate consumed by the intent scorer. `resume_updated` is
/// operationalized as more than one application on record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentInput {
    pub times_applied: u32,
    pub first_applied: NaiveDate,
    pub last_applied: NaiveDate,
    pub resume_updated: bool,
}

/// Raised when required fields are missing or out of range.
#[derive(Debug, thiserror::Error)]
pub enum InvalidInput {
    #[error("experience years must be a non-negative value up to 255, got {0}")]
    ExperienceYearsOutOfRange(i64),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
