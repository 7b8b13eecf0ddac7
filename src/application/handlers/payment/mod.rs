//! Payment handlers.
//!
//! ## Commands
//! - Initiating a payment (encrypted gateway redirect)
//!
//! ## Queries
//! - Decoding the gateway callback parameters

mod decode_gateway_response;
mod initiate_payment;

// Commands
pub use initiate_payment::{InitiatePaymentCommand, InitiatePaymentHandler, InitiatePaymentResult};

// Queries
pub use decode_gateway_response::{DecodeGatewayResponseHandler, DecodeGatewayResponseQuery};
