use super::domain::CandidateApplication;

/// Storage abstraction over the tabular application store so the service can
/// be exercised in isolation. Records are append-only; the store never
/// enforces uniqueness of (candidate, job, date).
pub trait ApplicationStore: Send + Sync {
    fn append(&self, batch: Vec<CandidateApplication>) -> Result<usize, StoreError>;
    fn all(&self) -> Result<Vec<CandidateApplication>, StoreError>;
    fn by_email(&self, email: &str) -> Result<Vec<CandidateApplication>, StoreError>;
    fn count(&self) -> Result<usize, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("application store unavailable: {0}")]
    Unavailable(String),
}
