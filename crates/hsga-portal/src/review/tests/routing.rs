use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use super::common::*;
use crate::memory::{InMemoryInstitutionRepository, InMemoryReviewerRepository};
use crate::review::router::{approved_reviewers_handler, review_router};

fn patch_json(uri: &str, body: &str) -> Request<Body> {
    Request::patch(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn approved_trainers_are_listed_as_summaries() {
    let (service, _, _) = build_service();
    let response = approved_reviewers_handler::<
        InMemoryInstitutionRepository,
        InMemoryReviewerRepository,
    >(State(Arc::new(service)))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        serde_json::json!([{
            "uniqueId": "HSGA-TR-0001",
            "fullName": "Trainer 1",
            "district": "Khammam"
        }])
    );
}

#[tokio::test]
async fn status_route_updates_and_returns_the_record() {
    let (service, _, _) = build_service();
    let router = review_router(Arc::new(service));

    let response = router
        .oneshot(patch_json(
            "/admin/insti/inst-000001/status",
            r#"{"status":"APPROVED"}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], serde_json::json!("APPROVED"));
    assert_eq!(payload["type"], serde_json::json!("SCHOOL"));
    assert!(payload.get("credentialHash").is_none());
}

#[tokio::test]
async fn assign_route_enforces_the_approval_precondition() {
    let (service, _, _) = build_service();
    let router = review_router(Arc::new(service));

    let response = router
        .oneshot(patch_json(
            "/admin/insti/inst-000001/assign-trainer",
            r#"{"trainerId":"HSGA-TR-0001"}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("must be APPROVED"));
}

#[tokio::test]
async fn assign_route_clears_with_an_empty_trainer_id() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    service
        .assign_reviewer(&record_id("inst-000002"), Some(unique_id("HSGA-TR-0001")))
        .expect("assigned");

    let response = review_router(service)
        .oneshot(patch_json(
            "/admin/insti/inst-000002/assign-trainer",
            r#"{"trainerId":""}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("trainerId").is_none());
}

#[tokio::test]
async fn unknown_institutions_return_not_found() {
    let (service, _, _) = build_service();
    let response = crate::review::router::status_handler::<
        InMemoryInstitutionRepository,
        InMemoryReviewerRepository,
    >(
        State(Arc::new(service)),
        Path("inst-999999".to_string()),
        crate::extract::FormJson(serde_json::from_str(r#"{"status":"DECLINED"}"#).expect("status body")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trainer_status_route_changes_trainer_records() {
    let (service, _, _) = build_service();
    let router = review_router(Arc::new(service));

    let response = router
        .oneshot(patch_json(
            "/admin/trainers/trn-000002/status",
            r#"{"status":"DECLINED"}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["uniqueId"], serde_json::json!("HSGA-TR-0002"));
    assert_eq!(payload["status"], serde_json::json!("DECLINED"));
}

#[tokio::test]
async fn unknown_status_values_are_bad_requests() {
    let (service, _, _) = build_service();
    let router = review_router(Arc::new(service));

    let response = router
        .oneshot(patch_json(
            "/admin/insti/inst-000001/status",
            r#"{"status":"ARCHIVED"}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("status"));
}
