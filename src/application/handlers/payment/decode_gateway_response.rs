//! DecodeGatewayResponseHandler - Query handler for gateway callback parameters.

use std::sync::Arc;

use crate::domain::payment::{GatewayCallback, PaymentError};
use crate::ports::FieldCipher;

/// Query carrying the raw callback query string.
#[derive(Debug, Clone, Default)]
pub struct DecodeGatewayResponseQuery {
    pub query_string: Option<String>,
}

/// Handler that decrypts whatever the gateway sent back.
///
/// Keys are not checked against any expected set; the gateway decides what
/// it returns and which values are encrypted.
pub struct DecodeGatewayResponseHandler {
    cipher: Arc<dyn FieldCipher>,
}

impl DecodeGatewayResponseHandler {
    pub fn new(cipher: Arc<dyn FieldCipher>) -> Self {
        Self { cipher }
    }

    pub fn handle(&self, query: DecodeGatewayResponseQuery) -> Result<GatewayCallback, PaymentError> {
        let params: Vec<(String, String)> = match query.query_string.as_deref() {
            Some(raw) => serde_urlencoded::from_str(raw)
                .map_err(|e| PaymentError::malformed_callback(e.to_string()))?,
            None => Vec::new(),
        };

        let callback = GatewayCallback::decode(params, |value| self.cipher.decrypt(value));

        for key in callback.undecrypted_keys() {
            tracing::debug!(key, "Callback value kept as received");
        }

        Ok(callback)
    }
}
