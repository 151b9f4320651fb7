use axum::{
    Router,
    middleware::from_fn,
    routing::{get, patch, post},
};
use dashboard_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::AppState;
use crate::handlers::{
    app::health_check,
    auth::{login_handler, logout_handler},
    cart::{get_cart, remove_cart_item, update_cart_item},
    customers::{customer_detail, list_customers},
    invoices::{create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice},
    metrics::metrics,
    vendors::{list_vendors, vendor_detail},
};
use crate::middleware::auth::auth_middleware;

pub fn build_router(state: AppState) -> Router {
    // Session setup
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    let dashboard = Router::new()
        .route("/dashboard/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/dashboard/invoices/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
        .route("/dashboard/customers", get(list_customers))
        .route("/dashboard/customers/:id", get(customer_detail))
        .route("/dashboard/vendors", get(list_vendors))
        .route("/dashboard/vendors/:id", get(vendor_detail))
        .route("/dashboard/cart/:key", get(get_cart))
        .route(
            "/dashboard/cart/:key/items/:item_id",
            patch(update_cart_item).delete(remove_cart_item),
        )
        .layer(from_fn(auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/login", post(login_handler))
        .route("/logout", get(logout_handler))
        .merge(dashboard)
        .layer(session_layer)
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
