use std::collections::BTreeSet;
use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::repository::ApplicationStore;
use super::search::{LookupQuery, SegmentFilter};
use super::service::{AnalyticsServiceError, CandidateAnalyticsService};

/// Router builder exposing the analytics endpoints over HTTP.
pub fn analytics_router<S>(service: Arc<CandidateAnalyticsService<S>>) -> Router
where
    S: ApplicationStore + 'static,
{
    Router::new()
        .route("/api/v1/analytics/feeds", post(ingest_handler::<S>))
        .route("/api/v1/analytics/overview", get(overview_handler::<S>))
        .route("/api/v1/analytics/segments", post(segments_handler::<S>))
        .route(
            "/api/v1/analytics/repeat-applicants",
            post(repeat_applicants_handler::<S>),
        )
        .route(
            "/api/v1/analytics/candidates/:email/resume-changes",
            get(resume_changes_handler::<S>),
        )
        .route(
            "/api/v1/analytics/skill-alignment",
            post(skill_alignment_handler::<S>),
        )
        .route("/api/v1/analytics/lookup", post(lookup_handler::<S>))
        .route("/api/v1/analytics/duplicates", get(duplicates_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct IngestFeedRequest {
    pub(crate) source_system: String,
    pub(crate) csv: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RepeatApplicantsRequest {
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SkillAlignmentRequest {
    pub(crate) job_id: String,
    pub(crate) required_skills: Vec<String>,
}

pub(crate) async fn ingest_handler<S>(
    State(service): State<Arc<CandidateAnalyticsService<S>>>,
    axum::Json(request): axum::Json<IngestFeedRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let reader = Cursor::new(request.csv.into_bytes());
    match service.ingest_reader(reader, &request.source_system) {
        Ok(summary) => (StatusCode::ACCEPTED, axum::Json(summary)).into_response(),
        Err(AnalyticsServiceError::Ingest(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn overview_handler<S>(
    State(service): State<Arc<CandidateAnalyticsService<S>>>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.overview() {
        Ok(overview) => (StatusCode::OK, axum::Json(overview)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn segments_handler<S>(
    State(service): State<Arc<CandidateAnalyticsService<S>>>,
    axum::Json(filter): axum::Json<SegmentFilter>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.segments(&filter) {
        Ok(roster) => (StatusCode::OK, axum::Json(roster)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn repeat_applicants_handler<S>(
    State(service): State<Arc<CandidateAnalyticsService<S>>>,
    axum::Json(request): axum::Json<RepeatApplicantsRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    match service.repeat_applicants(today) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn resume_changes_handler<S>(
    State(service): State<Arc<CandidateAnalyticsService<S>>>,
    Path(email): Path<String>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.resume_changes(&email) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(AnalyticsServiceError::UnknownCandidate(email)) => {
            let payload = json!({ "error": format!("no applications on record for {email}") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn skill_alignment_handler<S>(
    State(service): State<Arc<CandidateAnalyticsService<S>>>,
    axum::Json(request): axum::Json<SkillAlignmentRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let required: BTreeSet<String> = request.required_skills.into_iter().collect();
    match service.skill_alignment(&request.job_id, &required) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn lookup_handler<S>(
    State(service): State<Arc<CandidateAnalyticsService<S>>>,
    axum::Json(query): axum::Json<LookupQuery>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.lookup(&query) {
        Ok(matches) => (StatusCode::OK, axum::Json(matches)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn duplicates_handler<S>(
    State(service): State<Arc<CandidateAnalyticsService<S>>>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.duplicates() {
        Ok(pairs) => (StatusCode::OK, axum::Json(pairs)).into_response(),
        Err(error) => internal_error(error),
    }
}

fn internal_error(error: AnalyticsServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
