use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use recruit_ai::analytics::candidates::{
    AnalyticsConfig, ApplicationStore, CandidateApplication, StoreError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Append-only in-memory store backing the service until a real database is
/// wired in. Duplicate submissions are kept; the dashboard treats them as
/// separate application events.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationStore {
    rows: Arc<Mutex<Vec<CandidateApplication>>>,
}

impl ApplicationStore for InMemoryApplicationStore {
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

pub(crate) fn analytics_config(enrichment_seed: u64) -> AnalyticsConfig {
    AnalyticsConfig {
        enrichment_seed,
        ..AnalyticsConfig::default()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
