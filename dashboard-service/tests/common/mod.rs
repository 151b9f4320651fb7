//! Shared in-process test harness for dashboard-service.
//!
//! Tests drive the real router with `tower::ServiceExt::oneshot` instead of
//! a spawned server. The database pool is created lazily, so everything that
//! does not touch Postgres runs without external infrastructure.

use axum::Router;
use axum::body::Body;
use dashboard_core::config::Settings;
use dashboard_service::AppState;
use dashboard_service::services::database::Database;
use dashboard_service::startup::build_router;
use http::{Request, StatusCode, header};
use tower::ServiceExt;

/// Build the full application router against a lazily-connected pool.
pub fn test_app() -> Router {
    let settings: Settings = serde_json::from_str("{}").expect("default settings deserialize");
    let db = Database::connect_lazy(&settings.database.url).expect("lazy pool");
    build_router(AppState::new(settings, db))
}

/// Log in with the demo credential and return the session cookie.
pub async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from("email=user%40nextmail.com&password=123456"))
                .expect("login request"),
        )
        .await
        .expect("login response");

    assert_eq!(response.status(), StatusCode::OK);

    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie on login")
        .to_str()
        .expect("cookie is ascii")
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

/// Issue a GET with an established session.
pub async fn get_json(
    app: &Router,
    cookie: &str,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    (status, body_json(response.into_body()).await)
}

/// Collect a response body as JSON.
pub async fn body_json(body: Body) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(body)
        .await
        .expect("body collects")
        .to_bytes();
    if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    }
}
