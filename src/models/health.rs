use serde::{Deserialize, Serialize};

/// Payload returned by the unauthenticated health route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}
