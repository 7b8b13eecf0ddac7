//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payment::{
    DecodeGatewayResponseHandler, DecodeGatewayResponseQuery, InitiatePaymentCommand,
    InitiatePaymentHandler,
};
use crate::domain::payment::{GatewaySettings, PaymentError};
use crate::ports::FieldCipher;

use super::dto::{ErrorResponse, InitiatePaymentRequest, InitiatePaymentResponse, PaymentCallbackResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for payment endpoints.
///
/// Built once at startup; cloned per request.
#[derive(Clone)]
pub struct PaymentAppState {
    pub cipher: Arc<dyn FieldCipher>,
    pub gateway: Arc<GatewaySettings>,
}

impl PaymentAppState {
    pub fn new(cipher: Arc<dyn FieldCipher>, gateway: GatewaySettings) -> Self {
        Self {
            cipher,
            gateway: Arc::new(gateway),
        }
    }

    pub fn initiate_payment_handler(&self) -> InitiatePaymentHandler {
        InitiatePaymentHandler::new(self.cipher.clone(), self.gateway.clone())
    }

    pub fn decode_gateway_response_handler(&self) -> DecodeGatewayResponseHandler {
        DecodeGatewayResponseHandler::new(self.cipher.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/initiate-payment - Build the encrypted gateway redirect URL
pub async fn initiate_payment(
    State(state): State<PaymentAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, PaymentApiError> {
    // An empty body is an empty form, not a parse failure
    let request: InitiatePaymentRequest = if body.iter().all(u8::is_ascii_whitespace) {
        InitiatePaymentRequest::default()
    } else {
        InitiatePaymentRequest::from_json(&body)
            .map_err(|e| PaymentError::malformed_request(e.to_string()))?
    };

    let handler = state.initiate_payment_handler();
    let cmd = InitiatePaymentCommand {
        draft: request.into(),
    };

    let result = handler.handle(cmd)?;
    tracing::info!(reference_no = %result.reference_no, "Payment redirect issued");

    Ok(Json(InitiatePaymentResponse::new(result.payment_url)))
}

/// GET /api/payment-response - Decode the gateway callback parameters
pub async fn payment_response(
    State(state): State<PaymentAppState>,
    RawQuery(query_string): RawQuery,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.decode_gateway_response_handler();
    let callback = handler.handle(DecodeGatewayResponseQuery { query_string })?;

    Ok(Json(PaymentCallbackResponse::from(callback)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts payment errors to HTTP responses.
#[derive(Debug)]
pub struct PaymentApiError(PaymentError);

impl From<PaymentError> for PaymentApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        if !self.0.is_validation() {
            tracing::error!(error = %self.0, "Payment request failed");
            let body = ErrorResponse::new(self.0.to_string());
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }

        let missing = self.0.missing();
        tracing::warn!(missing = ?missing, "Payment request rejected");
        let body = ErrorResponse::with_missing_fields(self.0.to_string(), missing);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
