//! Payment domain module.
//!
//! Models the donation payment hand-off to the Eazypay gateway.
//!
//! # Module Structure
//!
//! - `request` - Mandatory field set and validated payment request
//! - `gateway` - Redirect URL settings and gateway query keys
//! - `callback` - Best-effort decoding of gateway callback parameters
//! - `errors` - Payment error type

mod callback;
mod errors;
mod gateway;
mod request;

pub use callback::GatewayCallback;
pub use errors::PaymentError;
pub use gateway::{GatewayParam, GatewaySettings};
pub use request::{MandatoryField, PaymentRequest, PaymentRequestDraft, MANDATORY_FIELD_SEPARATOR};
