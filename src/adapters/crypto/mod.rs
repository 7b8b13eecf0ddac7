//! Field encryption adapters.
//!
//! - `AesEcbCipher` - AES-128-ECB with PKCS#7 padding and base64 output,
//!   the scheme the Eazypay gateway expects for every encrypted parameter.

mod aes_ecb_cipher;

pub use aes_ecb_cipher::AesEcbCipher;
