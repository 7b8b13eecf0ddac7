//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `payment` - Payment requests, gateway redirect settings and callback decoding

pub mod payment;
