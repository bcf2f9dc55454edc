//! SInvoice response envelope, mirroring the upstream API's JSON shape.

use serde::{Deserialize, Serialize};

/// Envelope returned by every createInvoice route. All five fields are
/// always serialized, with explicit nulls, so clients see a stable shape
/// whether the call succeeded or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub error_code: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub message: Option<String>,
    pub result: Option<InvoiceResult>,
}

/// Details of a simulated successfully-issued invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResult {
    pub supplier_tax_code: String,
    pub invoice_no: String,
    // Upstream spells this one with a capital ID, not camelCase.
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    pub reservation_code: String,
    pub code_of_tax: String,
}

impl InvoiceResponse {
    pub fn success(result: InvoiceResult) -> Self {
        Self {
            error_code: None,
            code: None,
            description: None,
            message: None,
            result: Some(result),
        }
    }

    pub fn error(error_code: &str, code: &str, description: &str, message: &str) -> Self {
        Self {
            error_code: Some(error_code.to_string()),
            code: Some(code.to_string()),
            description: Some(description.to_string()),
            message: Some(message.to_string()),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_serializes_nulls_and_upstream_field_names() {
        let response = InvoiceResponse::success(InvoiceResult {
            supplier_tax_code: "3703135239".to_string(),
            invoice_no: "C25MNP56".to_string(),
            transaction_id: "176559280633249835".to_string(),
            reservation_code: "94L3DJLCHHYFVJC".to_string(),
            code_of_tax: "M2-25-BNFQQ-00000000059".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["errorCode"].is_null());
        assert!(json["code"].is_null());
        assert!(json["description"].is_null());
        assert!(json["message"].is_null());
        assert_eq!(json["result"]["supplierTaxCode"], "3703135239");
        assert_eq!(json["result"]["invoiceNo"], "C25MNP56");
        assert_eq!(json["result"]["transactionID"], "176559280633249835");
        assert_eq!(json["result"]["reservationCode"], "94L3DJLCHHYFVJC");
        assert_eq!(json["result"]["codeOfTax"], "M2-25-BNFQQ-00000000059");
    }

    #[test]
    fn error_envelope_keeps_result_null() {
        let response = InvoiceResponse::error(
            "ERR001",
            "INVALID_INVOICE",
            "Invalid invoice data",
            "Failed to create invoice: Invalid tax code",
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errorCode"], "ERR001");
        assert_eq!(json["code"], "INVALID_INVOICE");
        assert!(json["result"].is_null());
    }
}
