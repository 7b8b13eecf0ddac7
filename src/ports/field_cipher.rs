//! Field cipher port for gateway field encryption.
//!
//! The payment gateway requires every sensitive query parameter to be
//! encrypted individually and base64 encoded. Implementations must be
//! deterministic: the gateway decrypts each field on its side with the
//! shared merchant key, so there is no IV or nonce to transmit.

use thiserror::Error;

/// Port for encrypting and decrypting individual gateway fields.
pub trait FieldCipher: Send + Sync {
    /// Encrypt a UTF-8 string and return it base64 encoded.
    fn encrypt(&self, plaintext: &str) -> String;

    /// Decrypt a base64 encoded ciphertext.
    ///
    /// Returns `None` when the input is not valid base64, is not a whole
    /// number of cipher blocks, has bad padding, or does not decrypt to
    /// UTF-8. Callers treat `None` as "show the raw value".
    fn decrypt(&self, ciphertext: &str) -> Option<String>;
}

/// Errors raised while constructing a cipher from configured key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("encryption key must be at least {required} bytes, got {actual}")]
    KeyTooShort { required: usize, actual: usize },

    #[error("encryption key must contain only ASCII characters")]
    KeyNotAscii,
}
