use crate::infra::{AppState, Services};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use hsga_portal::calendar::calendar_router;
use hsga_portal::config::AdminConfig;
use hsga_portal::forms::admission::admission_router;
use hsga_portal::forms::registration::registration_router;
use hsga_portal::review::{review_router, session_router};
use serde_json::json;

/// Every portal router plus the health, readiness and metrics probes. The probes read
/// [`AppState`] from an `Extension` layer added by the server.
pub(crate) fn portal_routes(services: &Services, admin: AdminConfig) -> Router {
    Router::new()
        .merge(admission_router(services.admissions.clone()))
        .merge(registration_router(services.registrations.clone()))
        .merge(review_router(services.review.clone()))
        .merge(session_router(admin))
        .merge(calendar_router(services.calendar.clone()))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(ready: bool) -> Router {
        portal_routes(&Services::in_memory(), AdminConfig::default()).layer(Extension(state(ready)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ready" }));
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let response = app(false)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn registered_trainers_appear_on_the_admin_list() {
        let app = app(true);
        let body = json!({
            "fullName": "Sai Teja",
            "phoneNo": "9000012345",
            "email": "sai.teja@example.org",
            "district": "Nizamabad",
            "password": "scouts-honour"
        });

        let created = app
            .clone()
            .oneshot(
                Request::post("/forms/trainer-registration")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(created.status(), StatusCode::CREATED);

        let listed = app
            .oneshot(Request::get("/admin/trainers").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        let payload = body_json(listed).await;
        assert_eq!(payload[0]["fullName"], json!("Sai Teja"));
        assert_eq!(payload[0]["status"], json!("PENDING"));
    }

    #[tokio::test]
    async fn calendar_month_is_served_alongside_the_forms() {
        let response = app(true)
            .oneshot(Request::get("/calendar/2026/8").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload["label"], json!("August 2026"));
    }
}
