mod common;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

async fn post_invoice(
    app: &Router,
    cookie: &str,
    payload: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/dashboard/invoices")
                .header(header::COOKIE, cookie)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, common::body_json(response.into_body()).await)
}

#[tokio::test]
async fn missing_customer_is_rejected() {
    let app = common::test_app();
    let cookie = common::login(&app).await;

    let (status, body) = post_invoice(
        &app,
        &cookie,
        json!({ "amount": 500.0, "status": "pending" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["details"]
            .as_str()
            .unwrap()
            .contains("Please select a customer.")
    );
}

#[tokio::test]
async fn zero_amount_is_rejected() {
    let app = common::test_app();
    let cookie = common::login(&app).await;

    let (status, body) = post_invoice(
        &app,
        &cookie,
        json!({
            "customer_id": "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            "amount": 0.0,
            "status": "pending"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["details"]
            .as_str()
            .unwrap()
            .contains("greater than ₹0")
    );
}

#[tokio::test]
async fn missing_status_is_rejected() {
    let app = common::test_app();
    let cookie = common::login(&app).await;

    let (status, body) = post_invoice(
        &app,
        &cookie,
        json!({
            "customer_id": "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            "amount": 120.5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["details"]
            .as_str()
            .unwrap()
            .contains("Please select an invoice status.")
    );
}

#[tokio::test]
async fn unknown_status_values_fail_deserialization() {
    let app = common::test_app();
    let cookie = common::login(&app).await;

    let (status, _) = post_invoice(
        &app,
        &cookie,
        json!({
            "customer_id": "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            "amount": 120.5,
            "status": "cancelled"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
