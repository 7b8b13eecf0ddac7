//! Payment gateway configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use super::error::ValidationError;
use super::server::Environment;

/// Length of an AES-128 key in bytes.
pub const AES_128_KEY_LENGTH: usize = 16;

/// Payment gateway configuration (ICICI Eazypay)
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Field encryption key shared with the gateway
    pub aes_key: SecretString,

    /// Merchant identifier, sent in clear text
    pub merchant_id: String,

    /// Where the gateway sends the browser back after payment
    pub return_url: String,

    /// Gateway redirect endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Paymode used when a request does not carry one
    #[serde(default = "default_paymode")]
    pub default_paymode: String,
}

impl GatewayConfig {
    /// Create a configuration with the production gateway URL and default paymode.
    pub fn new(
        aes_key: impl Into<String>,
        merchant_id: impl Into<String>,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            aes_key: SecretString::new(aes_key.into()),
            merchant_id: merchant_id.into(),
            return_url: return_url.into(),
            base_url: default_base_url(),
            default_paymode: default_paymode(),
        }
    }

    /// Validate gateway configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let key = self.aes_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("AES_KEY"));
        }
        if !key.is_ascii() {
            return Err(ValidationError::AesKeyNotAscii);
        }
        if key.len() < AES_128_KEY_LENGTH {
            return Err(ValidationError::AesKeyTooShort);
        }

        if self.merchant_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("MERCHANT_ID"));
        }
        if self.return_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("RETURN_URL"));
        }
        if self.default_paymode.trim().is_empty() {
            return Err(ValidationError::MissingRequired("default_paymode"));
        }

        parse_http_url("return_url", &self.return_url)?;
        let base_url = parse_http_url("base_url", &self.base_url)?;
        if *environment == Environment::Production && base_url.scheme() != "https" {
            return Err(ValidationError::GatewayMustBeHttps);
        }

        Ok(())
    }
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(value).map_err(|e| ValidationError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::InvalidUrl {
            field,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

fn default_base_url() -> String {
    "https://eazypay.icicibank.com/EazyPG".to_string()
}

fn default_paymode() -> String {
    "9".to_string()
}
