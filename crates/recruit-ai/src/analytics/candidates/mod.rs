//! Candidate analytics: the enriched domain model, the reapplication intent
//! scorer, resume differ, duplicate matcher, and the reporting facade the
//! dashboard consumes.

pub mod dedupe;
pub mod diff;
pub mod domain;
pub mod enrichment;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod search;
pub mod service;

#[cfg(test)]
mod tests;

pub use dedupe::{DuplicateMatcher, DuplicatePair, MatchWeights};
pub use diff::{diff_snapshots, ResumeChange};
pub use domain::{
    ApplicationRecord, CandidateApplication, CandidateRecordId, CandidateSnapshot, EducationLevel,
    ExperienceBucket, IntentInput, InvalidInput,
};
pub use enrichment::SnapshotEnricher;
pub use report::{
    CandidateMatchView, CandidateRosterEntry, DashboardOverview, DashboardSummary, IngestSummary,
    RepeatApplicantReport, RepeatApplicantView, ResumeChangesView, SkillAlignmentView,
    SkillMatchEntry,
};
pub use repository::{ApplicationStore, StoreError};
pub use router::analytics_router;
pub use scoring::{IntentScore, IntentScoreConfig, IntentScorer};
pub use search::{LookupQuery, SegmentFilter};
pub use service::{AnalyticsConfig, AnalyticsServiceError, CandidateAnalyticsService};
