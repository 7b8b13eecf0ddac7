//! Payment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | MissingFields | 400 |
//! | MalformedRequest | 500 |
//! | MalformedCallback | 500 |
//! | InvalidGatewayUrl | 500 |

use thiserror::Error;

/// Errors raised while initiating a payment or decoding a gateway callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// One or more mandatory fields were absent or empty.
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),

    /// The request body could not be read as a payment request.
    #[error("{0}")]
    MalformedRequest(String),

    /// The gateway callback query string could not be parsed.
    #[error("{0}")]
    MalformedCallback(String),

    /// The gateway URL could not be assembled.
    #[error("Invalid gateway URL: {0}")]
    InvalidGatewayUrl(String),
}

impl PaymentError {
    pub fn missing_fields(fields: Vec<&'static str>) -> Self {
        PaymentError::MissingFields(fields)
    }

    pub fn malformed_request(message: impl Into<String>) -> Self {
        PaymentError::MalformedRequest(message.into())
    }

    pub fn malformed_callback(message: impl Into<String>) -> Self {
        PaymentError::MalformedCallback(message.into())
    }

    pub fn invalid_gateway_url(message: impl Into<String>) -> Self {
        PaymentError::InvalidGatewayUrl(message.into())
    }

    /// Returns true if the caller sent an incomplete request.
    pub fn is_validation(&self) -> bool {
        matches!(self, PaymentError::MissingFields(_))
    }

    /// Names of the missing mandatory fields; empty for other errors.
    pub fn missing(&self) -> &[&'static str] {
        match self {
            PaymentError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}
