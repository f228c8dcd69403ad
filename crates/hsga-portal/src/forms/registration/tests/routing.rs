use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use super::common::*;
use crate::extract::FormJson;
use crate::forms::registration::router::{registration_router, trainer_handler};
use crate::memory::{InMemoryInstitutionRepository, InMemoryReviewerRepository};

#[tokio::test]
async fn trainer_handler_returns_created_unique_id() {
    let (service, _, _) = build_service();
    let response = trainer_handler::<InMemoryInstitutionRepository, InMemoryReviewerRepository>(
        State(Arc::new(service)),
        FormJson(trainer()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["uniqueId"], serde_json::json!("HSGA-TR-0001"));
}

#[tokio::test]
async fn trainer_handler_returns_unprocessable_with_message() {
    let (service, _, _) = build_service();
    let mut form = trainer();
    form.district = "Zone-4".to_string();

    let response = trainer_handler::<InMemoryInstitutionRepository, InMemoryReviewerRepository>(
        State(Arc::new(service)),
        FormJson(form),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        serde_json::json!("District should contain only letters.")
    );
}

#[tokio::test]
async fn institution_route_accepts_legacy_field_names() {
    let (service, institutions, _) = build_service();
    let router = registration_router(Arc::new(service));

    let body = serde_json::json!({
        "instiName": "Government Junior College",
        "instiType": "COLLEGE",
        "headName": "P. Srinivas",
        "phoneNo": "7012345678",
        "email": "gjc.nalgonda@example.org",
        "district": "Nalgonda",
        "password": "scout-promise"
    });

    let response = router
        .oneshot(
            Request::post("/forms/insti-registration")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["uniqueId"], serde_json::json!("HSGA-INST-0001"));

    let stored = crate::forms::registration::InstitutionRepository::list(institutions.as_ref())
        .expect("list");
    assert_eq!(stored[0].contact_name, "P. Srinivas");
}

#[tokio::test]
async fn unselected_institution_category_reads_as_a_validation_error() {
    let (service, institutions, _) = build_service();
    let router = registration_router(Arc::new(service));

    let body = serde_json::json!({
        "instiName": "Government Junior College",
        "instiType": "",
        "headName": "P. Srinivas",
        "phoneNo": "7012345678",
        "email": "gjc.nalgonda@example.org",
        "district": "Nalgonda",
        "password": "scout-promise"
    });

    let response = router
        .oneshot(
            Request::post("/forms/insti-registration")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        serde_json::json!("Please select an institution category.")
    );
    let stored = crate::forms::registration::InstitutionRepository::list(institutions.as_ref())
        .expect("list");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn unparseable_bodies_are_bad_requests_with_an_error_field() {
    let (service, _, _) = build_service();
    let router = registration_router(Arc::new(service));

    let response = router
        .oneshot(
            Request::post("/forms/trainer-registration")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"fullName\": \"Ravi Kumar\","))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"].is_string());
}
