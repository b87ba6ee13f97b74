use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

use super::FeedIngestError;
use crate::analytics::candidates::domain::{ApplicationRecord, CandidateRecordId};

pub(crate) fn parse_records<R: Read>(
    reader: R,
    source_system: &str,
) -> Result<Vec<ApplicationRecord>, FeedIngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<FeedRow>() {
        let row = row?;
        records.push(row.into_record(source_system)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct FeedRow {
    candidate_record_id: String,
    full_name: String,
    email: String,
    phone: String,
    job_id: String,
    application_platform: String,
    application_date: String,
}

impl FeedRow {
    fn into_record(self, source_system: &str) -> Result<ApplicationRecord, FeedIngestError> {
        let application_date = parse_date(&self.application_date)?;

        Ok(ApplicationRecord {
            candidate_record_id: CandidateRecordId(self.candidate_record_id),
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            job_id: self.job_id,
            application_date,
            application_platform: self.application_platform,
            source_system: source_system.to_string(),
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, FeedIngestError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FeedIngestError::InvalidField {
        field: "application_date",
        value: value.to_string(),
    })
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Result<NaiveDate, FeedIngestError> {
    parse_date(value)
}
