//! Shared helpers for sinvoice-mock integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use base64::{engine::general_purpose::STANDARD, Engine};
use http_body_util::BodyExt;
use sinvoice_mock::{build_router, config::MockConfig, services::CredentialStore, AppState};

/// Builds the full application router with the seeded credential store.
pub fn test_app() -> Router {
    let state = AppState {
        config: MockConfig::default(),
        credentials: Arc::new(CredentialStore::seeded().expect("failed to seed credentials")),
    };
    build_router(state)
}

/// `Authorization` header value for the given account.
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// POST request to an invoice route with an empty body and optional auth.
pub fn post_request(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(value) = auth {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

/// Collects a response body into JSON.
pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}
