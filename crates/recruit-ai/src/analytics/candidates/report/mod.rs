pub(crate) mod summary;
pub mod views;

pub use views::{
    ApplicationHistoryEntry, CandidateMatchView, CandidateRosterEntry, DashboardOverview,
    DashboardSummary, IngestSummary, RepeatApplicantReport, RepeatApplicantView,
    ResumeChangesView, SkillAlignmentView, SkillMatchEntry,
};
