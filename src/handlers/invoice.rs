//! Mock createInvoice handlers.
//!
//! Request bodies are accepted but never read; no handler takes a body
//! extractor, so unparseable payloads cannot fail a request.

use axum::{extract::Path, http::StatusCode, Extension, Json};
use chrono::Utc;
use uuid::Uuid;

use crate::middleware::AuthenticatedUser;
use crate::models::{InvoiceResponse, InvoiceResult};

/// Supplier tax code the upstream mock returns for every invoice. The
/// parameterized route deliberately does NOT echo its path value back;
/// clients integrate against this constant.
const SUPPLIER_TAX_CODE: &str = "3703135239";

/// Fixed fixture: the same invoice on every call.
pub async fn create_invoice_fixed(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<InvoiceResponse> {
    tracing::info!(username = %user.username, "Mock SInvoice createInvoice (fixed) called");

    Json(InvoiceResponse::success(InvoiceResult {
        supplier_tax_code: SUPPLIER_TAX_CODE.to_string(),
        invoice_no: "C25MNP56".to_string(),
        transaction_id: "176559280633249835".to_string(),
        reservation_code: "94L3DJLCHHYFVJC".to_string(),
        code_of_tax: "M2-25-BNFQQ-00000000059".to_string(),
    }))
}

/// Randomized fixture: fresh invoice identifiers on every call. Useful for
/// exercising repeated invoice creation on the client side.
pub async fn create_invoice_random(
    Extension(user): Extension<AuthenticatedUser>,
    Path(supplier_tax_code): Path<String>,
) -> Json<InvoiceResponse> {
    tracing::info!(
        username = %user.username,
        supplier_tax_code = %supplier_tax_code,
        "Mock SInvoice createInvoice (random) called"
    );

    Json(InvoiceResponse::success(InvoiceResult {
        supplier_tax_code: SUPPLIER_TAX_CODE.to_string(),
        invoice_no: random_invoice_no(),
        transaction_id: random_transaction_id(),
        reservation_code: random_reservation_code(),
        code_of_tax: random_code_of_tax(),
    }))
}

/// Error fixture: a stable business-level failure payload with HTTP 400.
pub async fn create_invoice_error(
    Extension(user): Extension<AuthenticatedUser>,
) -> (StatusCode, Json<InvoiceResponse>) {
    tracing::warn!(username = %user.username, "Mock SInvoice createInvoice (error) called");

    (
        StatusCode::BAD_REQUEST,
        Json(InvoiceResponse::error(
            "ERR001",
            "INVALID_INVOICE",
            "Invalid invoice data",
            "Failed to create invoice: Invalid tax code",
        )),
    )
}

fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// `C25MNP` followed by up to three digits, no zero padding.
fn random_invoice_no() -> String {
    format!("C25MNP{}", epoch_millis() % 1000)
}

/// 32 lowercase hex characters (a UUIDv4 with the hyphens stripped).
fn random_transaction_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// First 14 hex characters of a fresh UUIDv4, upper-cased.
fn random_reservation_code() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..14].to_uppercase()
}

/// `M2-25-`, six uppercase hex characters, then epoch millis mod 10^8
/// zero-padded to eight digits.
fn random_code_of_tax() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!(
        "M2-25-{}-{:08}",
        hex[..6].to_uppercase(),
        epoch_millis() % 100_000_000
    )
}
