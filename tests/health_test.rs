//! Health route integration tests.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{response_json, test_app};
use tower::util::ServiceExt;

#[tokio::test]
async fn health_returns_200_without_auth() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/InvoiceWS/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "status": "UP", "service": "Mock SInvoice API" })
    );
}

#[tokio::test]
async fn health_ignores_garbage_auth_header() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/InvoiceWS/health")
                .header("Authorization", "Basic not-even-base64")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "UP");
}
