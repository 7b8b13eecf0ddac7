//! Axum router configuration for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{initiate_payment, payment_response, PaymentAppState};

/// Create the payment API router.
///
/// # Routes
///
/// - `POST /api/initiate-payment` - Encrypt the donation and return the gateway URL
/// - `GET /api/payment-response` - Decode the gateway callback parameters
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new()
        .route("/api/initiate-payment", post(initiate_payment))
        .route("/api/payment-response", get(payment_response))
}
