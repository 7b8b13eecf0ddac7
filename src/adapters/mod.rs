//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `crypto` - Field cipher used for gateway parameters
//! - `http` - REST endpoints and router assembly

pub mod crypto;
pub mod http;

pub use crypto::AesEcbCipher;
