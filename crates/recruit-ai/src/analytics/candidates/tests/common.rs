use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::analytics::candidates::domain::{
    ApplicationRecord, CandidateApplication, CandidateRecordId, CandidateSnapshot, EducationLevel,
};
use crate::analytics::candidates::repository::{ApplicationStore, StoreError};
use crate::analytics::candidates::service::{AnalyticsConfig, CandidateAnalyticsService};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn record(
    id: &str,
    full_name: &str,
    email: &str,
    phone: &str,
    job_id: &str,
    application_date: NaiveDate,
) -> ApplicationRecord {
    ApplicationRecord {
        candidate_record_id: CandidateRecordId(id.to_string()),
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        job_id: job_id.to_string(),
        application_date,
        application_platform: "ATS".to_string(),
        source_system: "ats".to_string(),
    }
}

pub(super) fn snapshot(
    education: EducationLevel,
    experience_years: u8,
    skills: &[&str],
    current_role: &str,
) -> CandidateSnapshot {
    let skills: BTreeSet<String> = skills.iter().map(|skill| skill.to_string()).collect();
    CandidateSnapshot::new(education, experience_years, skills, current_role.to_string())
}

pub(super) fn application(
    record: ApplicationRecord,
    snapshot: CandidateSnapshot,
) -> CandidateApplication {
    CandidateApplication { record, snapshot }
}

pub(super) const FEED_HEADER: &str =
    "candidate_record_id,full_name,email,phone,job_id,application_platform,application_date\n";

/// Feed with one repeat applicant (asha applies twice) and one single-shot.
pub(super) fn sample_feed() -> String {
    format!(
        "{FEED_HEADER}\
c-001,Asha Rao,asha@example.com,5550001111,JOB-101,ATS,2025-01-10\n\
c-001,Asha Rao,asha@example.com,5550001111,JOB-102,ATS,2025-05-20\n\
c-002,Ben Okafor,ben@example.com,5550002222,JOB-101,ATS,2025-03-05\n"
    )
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) rows: Arc<Mutex<Vec<CandidateApplication>>>,
}

impl ApplicationStore for MemoryStore {
    fn append(&self, batch: Vec<CandidateApplication>) -> Result<usize, StoreError> {
        let mut rows = self.rows.lock().expect("store mutex poisoned");
        let appended = batch.len();
        rows.extend(batch);
        Ok(appended)
    }

    fn all(&self) -> Result<Vec<CandidateApplication>, StoreError> {
        Ok(self.rows.lock().expect("store mutex poisoned").clone())
    }

    fn by_email(&self, email: &str) -> Result<Vec<CandidateApplication>, StoreError> {
        Ok(self
            .rows
            .lock()
            .expect("store mutex poisoned")
            .iter()
            .filter(|app| app.record.email == email)
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.rows.lock().expect("store mutex poisoned").len())
    }
}

pub(super) struct UnavailableStore;

impl ApplicationStore for UnavailableStore {
    fn append(&self, _batch: Vec<CandidateApplication>) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<CandidateApplication>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn by_email(&self, _email: &str) -> Result<Vec<CandidateApplication>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn count(&self) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (CandidateAnalyticsService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = CandidateAnalyticsService::new(store.clone(), AnalyticsConfig::default());
    (service, store)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
