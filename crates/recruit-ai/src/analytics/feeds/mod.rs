mod parser;

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::analytics::candidates::domain::ApplicationRecord;

#[derive(Debug)]
pub enum FeedIngestError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidField { field: &'static str, value: String },
    NoValidFeeds(String),
}

impl std::fmt::Display for FeedIngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedIngestError::Io(err) => write!(f, "failed to read application feed: {}", err),
            FeedIngestError::Csv(err) => write!(f, "invalid feed CSV data: {}", err),
            FeedIngestError::InvalidField { field, value } => {
                write!(f, "feed field {} could not be parsed from '{}'", field, value)
            }
            FeedIngestError::NoValidFeeds(dir) => {
                write!(f, "no valid CSV feeds found in {}", dir)
            }
        }
    }
}

impl std::error::Error for FeedIngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedIngestError::Io(err) => Some(err),
            FeedIngestError::Csv(err) => Some(err),
            FeedIngestError::InvalidField { .. } | FeedIngestError::NoValidFeeds(_) => None,
        }
    }
}

impl From<std::io::Error> for FeedIngestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for FeedIngestError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads candidate application feeds. Each feed is one CSV export from a
/// source system; every parsed record is tagged with the feed's source name.
pub struct FeedIngestor;

impl FeedIngestor {
    pub fn from_reader<R: Read>(
        reader: R,
        source_system: &str,
    ) -> Result<Vec<ApplicationRecord>, FeedIngestError> {
        parser::parse_records(reader, source_system)
    }

    /// Reads one feed file; the file stem becomes the source system name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicationRecord>, FeedIngestError> {
        let path = path.as_ref();
        let source_system = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("unknown")
            .to_string();
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, &source_system)
    }

    /// Ingests every `*.csv` feed in a directory. Files that are empty or fail
    /// to parse are skipped with a warning, matching how operators drop a bad
    /// export without blocking the rest of the batch; a directory yielding no
    /// records at all is an error.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<ApplicationRecord>, FeedIngestError> {
        let dir = dir.as_ref();
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            })
            .collect();
        paths.sort();

        let mut records = Vec::new();
        for path in &paths {
            match Self::from_path(path) {
                Ok(batch) if batch.is_empty() => {
                    warn!(path = %path.display(), "skipping empty feed");
                }
                Ok(batch) => {
                    info!(path = %path.display(), records = batch.len(), "ingested feed");
                    records.extend(batch);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable feed");
                }
            }
        }

        if records.is_empty() {
            return Err(FeedIngestError::NoValidFeeds(dir.display().to_string()));
        }

        Ok(records)
    }
}
