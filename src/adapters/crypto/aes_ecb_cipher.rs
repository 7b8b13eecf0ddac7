//! AES-128-ECB field cipher.
//!
//! Implements the `FieldCipher` port with the encryption scheme mandated by
//! the ICICI Eazypay integration:
//! - AES-128 in ECB mode (no IV)
//! - PKCS#7 padding
//! - Standard base64 output with `=` padding
//!
//! The mode is fixed by the gateway; changing it breaks interoperability.

use std::fmt;

use aes::Aes128;
use base64::{engine::general_purpose, Engine};
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{GatewayConfig, AES_128_KEY_LENGTH};
use crate::ports::{CipherError, FieldCipher};

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;

/// AES-128-ECB cipher keyed with the merchant encryption key.
#[derive(Clone)]
pub struct AesEcbCipher {
    key: [u8; AES_128_KEY_LENGTH],
}

impl AesEcbCipher {
    /// Build a cipher from the configured key.
    ///
    /// Only the first 16 bytes of the key are used.
    ///
    /// # Errors
    ///
    /// - `KeyNotAscii` - the key contains non-ASCII characters
    /// - `KeyTooShort` - the key is shorter than 16 bytes
    pub fn new(key: &SecretString) -> Result<Self, CipherError> {
        let key = key.expose_secret();
        if !key.is_ascii() {
            return Err(CipherError::KeyNotAscii);
        }

        let bytes = key.as_bytes();
        let Some(prefix) = bytes.get(..AES_128_KEY_LENGTH) else {
            return Err(CipherError::KeyTooShort {
                required: AES_128_KEY_LENGTH,
                actual: bytes.len(),
            });
        };

        if bytes.len() > AES_128_KEY_LENGTH {
            tracing::warn!(
                key_length = bytes.len(),
                "Encryption key longer than 16 bytes, only the first 16 are used"
            );
        }

        let mut key_array = [0u8; AES_128_KEY_LENGTH];
        key_array.copy_from_slice(prefix);

        Ok(Self { key: key_array })
    }

    /// Build a cipher from gateway configuration.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, CipherError> {
        Self::new(&config.aes_key)
    }
}

impl FieldCipher for AesEcbCipher {
    fn encrypt(&self, plaintext: &str) -> String {
        let ciphertext =
            Aes128EcbEnc::new(&self.key.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
        general_purpose::STANDARD.encode(ciphertext)
    }

    fn decrypt(&self, ciphertext: &str) -> Option<String> {
        let bytes = general_purpose::STANDARD.decode(ciphertext).ok()?;
        let plaintext = Aes128EcbDec::new(&self.key.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&bytes)
            .ok()?;
        String::from_utf8(plaintext).ok()
    }
}

impl fmt::Debug for AesEcbCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesEcbCipher")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
