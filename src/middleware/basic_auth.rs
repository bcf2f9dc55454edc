//! HTTP Basic authentication gate.
//!
//! Applied to every invoice route; the health route is mounted outside this
//! layer. Rejections happen here, before any handler runs.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::AppError;
use crate::services::Role;
use crate::AppState;

/// Identity of the authenticated account, stored in request extensions so
/// handlers can log who called them.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: Role,
}

pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let decoded = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Basic "))
        .and_then(|encoded| STANDARD.decode(encoded).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok());

    let verified = decoded.as_deref().and_then(|pair| {
        let (username, password) = pair.split_once(':')?;
        state.credentials.verify(username, password)
    });

    match verified {
        Some(credential) => {
            let user = AuthenticatedUser {
                username: credential.username.clone(),
                role: credential.role,
            };
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => {
            tracing::warn!(uri = %request.uri(), "Rejected request with missing or invalid credentials");
            AppError::Unauthorized(anyhow::anyhow!("Invalid or missing credentials"))
                .into_response()
        }
    }
}
