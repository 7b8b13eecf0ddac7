//! HTTP adapters - REST API implementations.
//!
//! - `payment` - Payment initiation and gateway callback endpoints
//! - `health` - Liveness endpoint
//! - `app` - Router assembly with the shared HTTP layers

pub mod app;
pub mod health;
pub mod payment;

// Re-export key types for convenience
pub use app::build_router;
pub use payment::payment_router;
pub use payment::PaymentAppState;
