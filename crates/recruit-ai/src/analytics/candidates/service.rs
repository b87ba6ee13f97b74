use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use tracing::info;

use super::dedupe::{DuplicateMatcher, DuplicatePair, MatchWeights};
use super::diff::diff_snapshots;
use super::domain::CandidateApplication;
use super::enrichment::SnapshotEnricher;
use super::report::summary;
use super::report::views::{
    CandidateMatchView, CandidateRosterEntry, DashboardOverview, IngestSummary,
    RepeatApplicantReport, ResumeChangesView, SkillAlignmentView,
};
use super::repository::{ApplicationStore, StoreError};
use super::scoring::{IntentScoreConfig, IntentScorer};
use super::search::{self, LookupQuery, SegmentFilter};
use crate::analytics::feeds::{FeedIngestError, FeedIngestor};

/// Dials for the analytics service: scoring weights, duplicate weights, the
/// enrichment seed, and the repeat-applicant recency window.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub intent: IntentScoreConfig,
    pub match_weights: MatchWeights,
    pub enrichment_seed: u64,
    pub recent_window_days: i64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            intent: IntentScoreConfig::default(),
            match_weights: MatchWeights::default(),
            enrichment_seed: 42,
            recent_window_days: 180,
        }
    }
}

/// Facade composing feed ingestion, enrichment, the store, and the scoring,
/// diffing, and matching engines. Every time-sensitive operation takes an
/// explicit `today`.
pub struct CandidateAnalyticsService<S> {
    store: Arc<S>,
    scorer: IntentScorer,
    matcher: DuplicateMatcher,
    enricher: Mutex<SnapshotEnricher<StdRng>>,
    recent_window_days: i64,
}

impl<S> CandidateAnalyticsService<S>
where
    S: ApplicationStore + 'static,
{
    pub fn new(store: Arc<S>, config: AnalyticsConfig) -> Self {
        Self {
            store,
            scorer: IntentScorer::new(config.intent),
            matcher: DuplicateMatcher::new(config.match_weights),
            enricher: Mutex::new(SnapshotEnricher::seeded(config.enrichment_seed)),
            recent_window_days: config.recent_window_days,
        }
    }

    /// Ingest one feed payload, enriching each record before it is stored.
    pub fn ingest_reader<R: Read>(
        &self,
        reader: R,
        source_system: &str,
    ) -> Result<IngestSummary, AnalyticsServiceError> {
        let records = FeedIngestor::from_reader(reader, source_system)?;
        self.store_enriched(source_system, records)
    }

    /// Ingest every feed in a sources directory.
    pub fn ingest_dir<P: AsRef<Path>>(
        &self,
        dir: P,
    ) -> Result<IngestSummary, AnalyticsServiceError> {
        let dir = dir.as_ref();
        let records = FeedIngestor::from_dir(dir)?;
        self.store_enriched(&dir.display().to_string(), records)
    }

    fn store_enriched(
        &self,
        source_system: &str,
        records: Vec<super::domain::ApplicationRecord>,
    ) -> Result<IngestSummary, AnalyticsServiceError> {
        let enriched: Vec<CandidateApplication> = {
            let mut enricher = self
                .enricher
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            records
                .into_iter()
                .map(|record| enricher.enrich(record))
                .collect()
        };

        let records_ingested = self.store.append(enriched)?;
        let total_records = self.store.count()?;
        info!(source = source_system, records = records_ingested, "feed ingested");

        Ok(IngestSummary {
            source_system: source_system.to_string(),
            records_ingested,
            total_records,
        })
    }

    /// Headline KPIs plus the per-candidate roster.
    pub fn overview(&self) -> Result<DashboardOverview, AnalyticsServiceError> {
        let applications = self.store.all()?;
        Ok(DashboardOverview {
            summary: summary::dashboard_summary(&applications),
            roster: summary::roster(&applications),
        })
    }

    /// Roster filtered by education and experience segments.
    pub fn segments(
        &self,
        filter: &SegmentFilter,
    ) -> Result<Vec<CandidateRosterEntry>, AnalyticsServiceError> {
        let applications = self.store.all()?;
        Ok(search::filter_roster(
            summary::roster(&applications),
            filter,
        ))
    }

    /// Repeat applicants split into recent/older partitions and ranked by
    /// intent score.
    pub fn repeat_applicants(
        &self,
        today: NaiveDate,
    ) -> Result<RepeatApplicantReport, AnalyticsServiceError> {
        let applications = self.store.all()?;
        Ok(summary::repeat_applicants(
            &applications,
            &self.scorer,
            today,
            self.recent_window_days,
        ))
    }

    /// Diff of the candidate's last two snapshots by application date. A
    /// single application on record yields an empty change list rather than
    /// an error; an unknown email is an error.
    pub fn resume_changes(&self, email: &str) -> Result<ResumeChangesView, AnalyticsServiceError> {
        let mut history = self.store.by_email(email)?;
        if history.is_empty() {
            return Err(AnalyticsServiceError::UnknownCandidate(email.to_string()));
        }
        history.sort_by_key(|app| app.record.application_date);

        let full_name = history[0].record.full_name.clone();
        let applications = history.len();

        let changes = if applications < 2 {
            Vec::new()
        } else {
            let previous = &history[applications - 2].snapshot;
            let latest = &history[applications - 1].snapshot;
            diff_snapshots(previous, latest)
                .iter()
                .map(|change| change.summary())
                .collect()
        };

        Ok(ResumeChangesView {
            email: email.to_string(),
            full_name,
            applications,
            changes,
        })
    }

    /// Ranks applicants for one job by required-skill overlap.
    pub fn skill_alignment(
        &self,
        job_id: &str,
        required: &BTreeSet<String>,
    ) -> Result<SkillAlignmentView, AnalyticsServiceError> {
        let applications = self.store.all()?;
        Ok(search::skill_alignment(&applications, job_id, required))
    }

    /// Substring lookup over name/email/phone/job id.
    pub fn lookup(
        &self,
        query: &LookupQuery,
    ) -> Result<Vec<CandidateMatchView>, AnalyticsServiceError> {
        let applications = self.store.all()?;
        Ok(search::lookup(&applications, query))
    }

    /// Pairwise duplicate scan over every stored application record.
    pub fn duplicates(&self) -> Result<Vec<DuplicatePair>, AnalyticsServiceError> {
        let applications = self.store.all()?;
        let records: Vec<_> = applications.into_iter().map(|app| app.record).collect();
        Ok(self.matcher.scan(&records))
    }
}

/// Error raised by the analytics service.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsServiceError {
    #[error(transparent)]
    Ingest(#[from] FeedIngestError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no applications on record for {0}")]
    UnknownCandidate(String),
}
