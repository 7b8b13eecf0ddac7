//! Temple Payments - Eazypay payment hand-off service
//!
//! Backend for the temple website's donation flow. The frontend posts the
//! donor's details, the service encrypts them with the merchant AES key and
//! answers with an ICICI Eazypay redirect URL. When the
//! gateway sends the donor back, the callback parameters are decrypted on a
//! best-effort basis and echoed as JSON.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
pub mod telemetry;
