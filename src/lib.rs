pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::MockConfig;
use crate::services::CredentialStore;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct AppState {
    pub config: MockConfig,
    pub credentials: Arc<CredentialStore>,
}

pub fn build_router(state: AppState) -> Router {
    // Axum matches literal segments before the capture, so the fixed and
    // error fixtures are never shadowed by the parameterized route.
    let invoice_routes = Router::new()
        .route(
            "/createInvoice/fixed",
            post(handlers::invoice::create_invoice_fixed),
        )
        .route(
            "/createInvoice/error",
            post(handlers::invoice::create_invoice_error),
        )
        .route(
            "/createInvoice/:supplier_tax_code",
            post(handlers::invoice::create_invoice_random),
        )
        .layer(from_fn_with_state(
            state,
            middleware::basic_auth_middleware,
        ));

    // Health is mounted outside the auth layer; it is the one route
    // reachable without credentials.
    //
    // Layer order (outermost first): set x-request-id, trace, propagate
    // the id onto the response. The span therefore always sees the header.
    Router::new()
        .nest(
            "/InvoiceWS",
            Router::new()
                .route("/health", get(handlers::health::health))
                .merge(invoice_routes),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
