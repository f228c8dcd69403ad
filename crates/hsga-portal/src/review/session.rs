use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::info;

use crate::config::AdminConfig;

/// `POST /admin/logout`: expires the admin session cookie.
pub fn session_router(config: AdminConfig) -> Router {
    Router::new()
        .route("/admin/logout", post(logout_handler))
        .with_state(Arc::new(config))
}

pub(crate) async fn logout_handler(State(config): State<Arc<AdminConfig>>) -> Response {
    let cookie = expired_cookie(&config.session_cookie);
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            info!(cookie = %config.session_cookie, "admin session cleared");
            let mut response = (StatusCode::OK, Json(json!({ "success": true }))).into_response();
            response.headers_mut().insert(header::SET_COOKIE, value);
            response
        }
        Err(_) => {
            let payload = json!({ "error": "session cookie name is not a valid header value" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}
