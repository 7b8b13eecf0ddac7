//! Gateway redirect settings and query parameter names.

use url::Url;

use super::errors::PaymentError;
use crate::config::GatewayConfig;

/// Query parameters of the gateway redirect URL, in the order they are sent.
///
/// Key names are fixed by the gateway, including the embedded spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayParam {
    MerchantId,
    MandatoryFields,
    OptionalFields,
    ReturnUrl,
    ReferenceNo,
    SubMerchantId,
    TransactionAmount,
    Paymode,
}

impl GatewayParam {
    pub const ALL: [GatewayParam; 8] = [
        GatewayParam::MerchantId,
        GatewayParam::MandatoryFields,
        GatewayParam::OptionalFields,
        GatewayParam::ReturnUrl,
        GatewayParam::ReferenceNo,
        GatewayParam::SubMerchantId,
        GatewayParam::TransactionAmount,
        GatewayParam::Paymode,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GatewayParam::MerchantId => "merchantid",
            GatewayParam::MandatoryFields => "mandatory fields",
            GatewayParam::OptionalFields => "optional fields",
            GatewayParam::ReturnUrl => "returnurl",
            GatewayParam::ReferenceNo => "Reference No",
            GatewayParam::SubMerchantId => "submerchantid",
            GatewayParam::TransactionAmount => "transaction amount",
            GatewayParam::Paymode => "paymode",
        }
    }

    /// Whether the value is sent encrypted.
    pub fn is_encrypted(&self) -> bool {
        !matches!(self, GatewayParam::MerchantId | GatewayParam::OptionalFields)
    }
}

/// Immutable gateway settings shared by all requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    base_url: Url,
    merchant_id: String,
    return_url: String,
    default_paymode: String,
}

impl GatewaySettings {
    /// # Errors
    ///
    /// Returns `PaymentError::InvalidGatewayUrl` if `base_url` is not an absolute URL.
    pub fn new(
        base_url: &str,
        merchant_id: impl Into<String>,
        return_url: impl Into<String>,
        default_paymode: impl Into<String>,
    ) -> Result<Self, PaymentError> {
        let base_url =
            Url::parse(base_url).map_err(|e| PaymentError::invalid_gateway_url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(PaymentError::invalid_gateway_url(format!(
                "{} cannot carry a query string",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            merchant_id: merchant_id.into(),
            return_url: return_url.into(),
            default_paymode: default_paymode.into(),
        })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, PaymentError> {
        Self::new(
            &config.base_url,
            config.merchant_id.clone(),
            config.return_url.clone(),
            config.default_paymode.clone(),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn return_url(&self) -> &str {
        &self.return_url
    }

    pub fn default_paymode(&self) -> &str {
        &self.default_paymode
    }

    /// Append `params` to the base URL as a form-encoded query string.
    ///
    /// Any query already present on the base URL is kept ahead of the gateway keys.
    pub fn redirect_url<S: AsRef<str>>(
        &self,
        params: impl IntoIterator<Item = (GatewayParam, S)>,
    ) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            for (param, value) in params {
                query.append_pair(param.key(), value.as_ref());
            }
        }
        url
    }
}
