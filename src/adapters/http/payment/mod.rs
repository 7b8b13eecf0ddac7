//! HTTP adapter for payment endpoints.
//!
//! Exposes the payment flow via REST API:
//! - `POST /api/initiate-payment` - Build the encrypted Eazypay redirect URL
//! - `GET /api/payment-response` - Decode the parameters the gateway sends back

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PaymentApiError, PaymentAppState};
pub use routes::payment_router;
