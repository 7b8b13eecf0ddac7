//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ServerConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `server.log_level`. Production emits JSON
/// lines; other environments use the human readable format.
///
/// # Errors
///
/// Fails if a global subscriber is already installed or the configured
/// filter directive cannot be parsed.
pub fn init(server: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&server.log_level)
            .map_err(|e| TelemetryError(format!("invalid log_level: {}", e)))?,
    };

    let builder = fmt().with_env_filter(filter).with_target(true);
    let result = if server.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TelemetryError(e.to_string()))
}

/// Tracing could not be initialized.
#[derive(Debug, thiserror::Error)]
#[error("failed to initialize tracing: {0}")]
pub struct TelemetryError(String);
