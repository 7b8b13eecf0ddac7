//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FieldCipher` - Symmetric encryption of individual gateway fields

mod field_cipher;

pub use field_cipher::{CipherError, FieldCipher};
