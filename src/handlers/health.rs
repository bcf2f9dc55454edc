use axum::Json;

use crate::models::HealthStatus;

/// Health check for the mock SInvoice service. Reachable without credentials.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP".to_string(),
        service: "Mock SInvoice API".to_string(),
    })
}
