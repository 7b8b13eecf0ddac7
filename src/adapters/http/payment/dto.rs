//! HTTP DTOs (Data Transfer Objects) for payment endpoints.
//!
//! These types define the JSON request/response structure for the payment API.
//! They serve as the boundary between HTTP and the application layer.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::payment::{GatewayCallback, PaymentRequestDraft};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Donation form submission.
///
/// Each field accepts a JSON string or number. Numbers are rendered as text
/// (`500` and `500.0` both become `"500"`). `null`, `false`, `0` and `""`
/// count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentRequest {
    #[serde(default, deserialize_with = "form_value")]
    pub reference_no: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub sub_merchant_id: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub pincode: Option<String>,
    /// Gateway paymode; the configured default applies when absent.
    #[serde(default, deserialize_with = "form_value")]
    pub paymode: Option<String>,
}

impl From<InitiatePaymentRequest> for PaymentRequestDraft {
    fn from(request: InitiatePaymentRequest) -> Self {
        Self {
            reference_no: request.reference_no,
            sub_merchant_id: request.sub_merchant_id,
            amount: request.amount,
            name: request.name,
            mobile: request.mobile,
            email: request.email,
            city: request.city,
            state: request.state,
            address: request.address,
            pincode: request.pincode,
            paymode: request.paymode,
        }
    }
}

/// Largest integer an IEEE-754 double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl InitiatePaymentRequest {
    /// Parse a request body.
    ///
    /// Fields are read by name only. A JSON array carries no named fields and
    /// yields an empty form; any other non-object document is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(map) => serde_json::from_value(Value::Object(map)),
            Value::Array(_) => Ok(Self::default()),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Render a JSON number the way the donation form's own runtime prints it:
/// whole floats lose their fractional part.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

fn form_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(number_text(&n))),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Array(_)) => Err(D::Error::custom(
            "invalid type: sequence, expected a string or number",
        )),
        Some(Value::Object(_)) => Err(D::Error::custom(
            "invalid type: map, expected a string or number",
        )),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response carrying the gateway redirect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentResponse {
    pub success: bool,
    pub payment_url: String,
}

impl InitiatePaymentResponse {
    pub fn new(payment_url: impl Into<String>) -> Self {
        Self {
            success: true,
            payment_url: payment_url.into(),
        }
    }
}

/// Response for the gateway callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCallbackResponse {
    pub success: bool,
    /// Parameters exactly as received.
    pub raw: BTreeMap<String, String>,
    /// Parameters after best-effort decryption.
    pub decrypted: BTreeMap<String, String>,
}

impl From<GatewayCallback> for PaymentCallbackResponse {
    fn from(callback: GatewayCallback) -> Self {
        Self {
            success: true,
            raw: callback.raw,
            decrypted: callback.decrypted,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
    /// Mandatory fields that were absent (validation errors only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            missing_fields: None,
        }
    }

    /// Create an error response listing missing fields.
    pub fn with_missing_fields(error: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            success: false,
            error: error.into(),
            missing_fields: Some(fields.iter().map(|f| f.to_string()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ════════════════════════════════════════════════════════════════════════════
    // Request Deserialization
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn numeric_amount_is_kept_as_text() {
        let request: InitiatePaymentRequest =
            serde_json::from_value(json!({ "amount": 500, "pincode": 342001 })).unwrap();
        assert_eq!(request.amount.as_deref(), Some("500"));
        assert_eq!(request.pincode.as_deref(), Some("342001"));
    }

    #[test]
    fn whole_float_amount_drops_fraction() {
        let request: InitiatePaymentRequest =
            serde_json::from_str(r#"{"amount": 500.0, "pincode": 1e3}"#).unwrap();
        assert_eq!(request.amount.as_deref(), Some("500"));
        assert_eq!(request.pincode.as_deref(), Some("1000"));
    }

    #[test]
    fn fractional_amount_keeps_fraction() {
        let request: InitiatePaymentRequest =
            serde_json::from_str(r#"{"amount": 500.5}"#).unwrap();
        assert_eq!(request.amount.as_deref(), Some("500.5"));
    }

    #[test]
    fn from_json_reads_object_fields() {
        let request =
            InitiatePaymentRequest::from_json(br#"{"referenceNo": "TXN1", "amount": 500}"#).unwrap();
        assert_eq!(request.reference_no.as_deref(), Some("TXN1"));
        assert_eq!(request.amount.as_deref(), Some("500"));
    }

    #[test]
    fn from_json_ignores_positional_array_values() {
        let body = json!(["TXN1", "45", "500", "n", "m", "e", "c", "s", "a", "p"]).to_string();
        let request = InitiatePaymentRequest::from_json(body.as_bytes()).unwrap();
        let draft = PaymentRequestDraft::from(request);
        assert_eq!(draft.missing_fields().len(), 10);
    }

    #[test]
    fn from_json_rejects_scalar_documents() {
        assert!(InitiatePaymentRequest::from_json(b"\"TXN1\"").is_err());
        assert!(InitiatePaymentRequest::from_json(b"null").is_err());
        assert!(InitiatePaymentRequest::from_json(b"{not json").is_err());
    }

    #[test]
    fn string_values_are_verbatim() {
        let request: InitiatePaymentRequest = serde_json::from_value(json!({
            "referenceNo": "TXN1",
            "pincode": "034200",
            "name": " Test "
        }))
        .unwrap();
        assert_eq!(request.reference_no.as_deref(), Some("TXN1"));
        assert_eq!(request.pincode.as_deref(), Some("034200"));
        assert_eq!(request.name.as_deref(), Some(" Test "));
    }

    #[test]
    fn falsy_values_count_as_absent() {
        let request: InitiatePaymentRequest = serde_json::from_value(json!({
            "amount": 0,
            "email": "",
            "city": null,
            "state": false
        }))
        .unwrap();
        assert!(request.amount.is_none());
        assert!(request.email.is_none());
        assert!(request.city.is_none());
        assert!(request.state.is_none());
    }

    #[test]
    fn missing_keys_deserialize_to_none() {
        let request: InitiatePaymentRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.reference_no.is_none());
        assert!(request.paymode.is_none());
    }

    #[test]
    fn nested_values_are_rejected() {
        let result: Result<InitiatePaymentRequest, _> =
            serde_json::from_value(json!({ "amount": { "value": 500 } }));
        assert!(result.is_err());
    }

    #[test]
    fn converts_into_draft() {
        let request: InitiatePaymentRequest = serde_json::from_value(json!({
            "referenceNo": "TXN1",
            "subMerchantId": "45",
            "paymode": "2"
        }))
        .unwrap();
        let draft = PaymentRequestDraft::from(request);
        assert_eq!(draft.reference_no.as_deref(), Some("TXN1"));
        assert_eq!(draft.sub_merchant_id.as_deref(), Some("45"));
        assert_eq!(draft.paymode.as_deref(), Some("2"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Response Serialization
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn initiate_response_uses_camel_case() {
        let response = InitiatePaymentResponse::new("https://eazypay.icicibank.com/EazyPG?x=1");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({ "success": true, "paymentUrl": "https://eazypay.icicibank.com/EazyPG?x=1" })
        );
    }

    #[test]
    fn callback_response_carries_both_maps() {
        let mut callback = GatewayCallback::default();
        callback.raw.insert("amount".to_string(), "abc=".to_string());
        callback.decrypted.insert("amount".to_string(), "500".to_string());

        let json = serde_json::to_value(PaymentCallbackResponse::from(callback)).unwrap();
        assert_eq!(
            json,
            json!({ "success": true, "raw": { "amount": "abc=" }, "decrypted": { "amount": "500" } })
        );
    }

    #[test]
    fn error_response_serializes_without_missing_fields_when_none() {
        let json = serde_json::to_string(&ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"boom"}"#);
    }

    #[test]
    fn error_response_with_missing_fields() {
        let response = ErrorResponse::with_missing_fields("Missing required fields", &["amount"]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({
                "success": false,
                "error": "Missing required fields",
                "missingFields": ["amount"]
            })
        );
    }
}
