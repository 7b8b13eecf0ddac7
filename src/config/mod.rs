//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TEMPLE_PAYMENTS` prefix and nested values use double underscores as separators.
//!
//! The conventional deployment variables `AES_KEY`, `MERCHANT_ID`, `RETURN_URL`,
//! `PORT` and `CORS_ORIGIN` are also honored and take precedence over their
//! prefixed equivalents.
//!
//! # Example
//!
//! ```no_run
//! use temple_payments::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod gateway;
mod server;

pub use error::{ConfigError, ValidationError};
pub use gateway::{GatewayConfig, AES_128_KEY_LENGTH};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Flat variable names and the nested keys they override.
const FLAT_OVERRIDES: [(&str, &str); 5] = [
    ("AES_KEY", "gateway.aes_key"),
    ("MERCHANT_ID", "gateway.merchant_id"),
    ("RETURN_URL", "gateway.return_url"),
    ("PORT", "server.port"),
    ("CORS_ORIGIN", "server.cors_origin"),
];

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment gateway configuration (key, merchant, return URL)
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TEMPLE_PAYMENTS` prefix
    /// 3. Applies the flat deployment variables on top
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TEMPLE_PAYMENTS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TEMPLE_PAYMENTS__GATEWAY__BASE_URL=...` -> `gateway.base_url = ...`
    /// - `AES_KEY=...` -> `gateway.aes_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder().add_source(
            config::Environment::default()
                .prefix("TEMPLE_PAYMENTS")
                .separator("__"),
        );

        for (variable, key) in FLAT_OVERRIDES {
            let value = std::env::var(variable)
                .ok()
                .filter(|value| !value.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        let config = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.gateway.validate(&self.server.environment)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ALL_VARS: [&str; 11] = [
        "AES_KEY",
        "MERCHANT_ID",
        "RETURN_URL",
        "PORT",
        "CORS_ORIGIN",
        "TEMPLE_PAYMENTS__GATEWAY__AES_KEY",
        "TEMPLE_PAYMENTS__GATEWAY__MERCHANT_ID",
        "TEMPLE_PAYMENTS__GATEWAY__RETURN_URL",
        "TEMPLE_PAYMENTS__GATEWAY__BASE_URL",
        "TEMPLE_PAYMENTS__SERVER__PORT",
        "TEMPLE_PAYMENTS__SERVER__ENVIRONMENT",
    ];

    fn set_flat_env() {
        env::set_var("AES_KEY", "0123456789abcdef");
        env::set_var("MERCHANT_ID", "136082");
        env::set_var("RETURN_URL", "https://temple.example.org/payment/return");
    }

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_flat_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_flat_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.gateway.merchant_id, "136082");
        assert_eq!(config.gateway.aes_key.expose_secret(), "0123456789abcdef");
        assert_eq!(
            config.gateway.return_url,
            "https://temple.example.org/payment/return"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_prefixed_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TEMPLE_PAYMENTS__GATEWAY__AES_KEY", "fedcba9876543210");
        env::set_var("TEMPLE_PAYMENTS__GATEWAY__MERCHANT_ID", "999");
        env::set_var(
            "TEMPLE_PAYMENTS__GATEWAY__RETURN_URL",
            "https://temple.example.org/return",
        );
        env::set_var(
            "TEMPLE_PAYMENTS__GATEWAY__BASE_URL",
            "https://eazypayuat.icicibank.com/EazyPG",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.gateway.merchant_id, "999");
        assert_eq!(
            config.gateway.base_url,
            "https://eazypayuat.icicibank.com/EazyPG"
        );
    }

    #[test]
    fn test_flat_variables_take_precedence() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_flat_env();
        env::set_var("TEMPLE_PAYMENTS__GATEWAY__MERCHANT_ID", "ignored");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().gateway.merchant_id, "136082");
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_flat_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.gateway.default_paymode, "9");
    }

    #[test]
    fn test_custom_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_flat_env();
        env::set_var("PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_flat_env();
        env::set_var("TEMPLE_PAYMENTS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().server.is_production());
    }

    #[test]
    fn test_missing_gateway_settings_fail_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
