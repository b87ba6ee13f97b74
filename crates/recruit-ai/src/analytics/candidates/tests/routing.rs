use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use super::common::*;
use crate::analytics::candidates::repository::ApplicationStore;
use crate::analytics::candidates::router::analytics_router;
use crate::analytics::candidates::domain::EducationLevel;

fn json_request(uri: &str, body: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn feed_ingest_route_accepts_csv_payloads() {
    let (service, _store) = build_service();
    let router = analytics_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "/api/v1/analytics/feeds",
            serde_json::json!({ "source_system": "ats", "csv": sample_feed() }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("records_ingested").and_then(serde_json::Value::as_u64),
        Some(3)
    );
}

#[tokio::test]
async fn feed_ingest_route_rejects_malformed_csv() {
    let (service, _store) = build_service();
    let router = analytics_router(Arc::new(service));

    let csv = format!("{FEED_HEADER}c-1,Asha Rao,asha@example.com,555,JOB-1,ATS,not-a-date\n");
    let response = router
        .oneshot(json_request(
            "/api/v1/analytics/feeds",
            serde_json::json!({ "source_system": "ats", "csv": csv }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("application_date"));
}

#[tokio::test]
async fn overview_route_reports_kpis() {
    let (service, store) = build_service();
    store
        .append(vec![application(
            record("c-1", "Asha Rao", "asha@example.com", "555-0001", "JOB-101", date(2025, 1, 10)),
            snapshot(EducationLevel::Graduate, 2, &["SQL"], "Analyst"),
        )])
        .expect("seed store");
    let router = analytics_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/analytics/overview")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .pointer("/summary/total_applications")
            .and_then(serde_json::Value::as_u64),
        Some(1)
    );
    assert_eq!(
        payload
            .pointer("/roster/0/experience_label")
            .and_then(serde_json::Value::as_str),
        Some("Early Career (1–3 yrs)")
    );
}

#[tokio::test]
async fn repeat_applicants_route_accepts_injected_today() {
    let (service, store) = build_service();
    store
        .append(vec![
            application(
                record("c-1", "Asha Rao", "asha@example.com", "555-0001", "JOB-101", date(2025, 1, 10)),
                snapshot(EducationLevel::Graduate, 2, &["SQL"], "Analyst"),
            ),
            application(
                record("c-1", "Asha Rao", "asha@example.com", "555-0001", "JOB-102", date(2025, 5, 20)),
                snapshot(EducationLevel::Graduate, 2, &["SQL"], "Analyst"),
            ),
        ])
        .expect("seed store");
    let router = analytics_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "/api/v1/analytics/repeat-applicants",
            serde_json::json!({ "today": "2025-06-01" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .pointer("/recent/0/intent/total")
            .and_then(serde_json::Value::as_f64),
        Some(82.7)
    );
}

#[tokio::test]
async fn resume_changes_route_returns_not_found_for_unknown_candidates() {
    let (service, _store) = build_service();
    let router = analytics_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::get(
                "/api/v1/analytics/candidates/missing@example.com/resume-changes",
            )
            .body(axum::body::Body::empty())
            .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lookup_route_filters_candidates() {
    let (service, store) = build_service();
    store
        .append(vec![
            application(
                record("c-1", "Asha Rao", "asha@example.com", "5550001111", "JOB-101", date(2025, 1, 10)),
                snapshot(EducationLevel::Graduate, 2, &["SQL"], "Analyst"),
            ),
            application(
                record("c-2", "Ben Okafor", "ben@example.com", "5550002222", "JOB-101", date(2025, 3, 5)),
                snapshot(EducationLevel::PostGraduate, 8, &["Excel"], "Manager"),
            ),
        ])
        .expect("seed store");
    let router = analytics_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "/api/v1/analytics/lookup",
            serde_json::json!({ "name": "BEN" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let matches = payload.as_array().expect("array payload");
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].get("email").and_then(serde_json::Value::as_str),
        Some("ben@example.com")
    );
}
